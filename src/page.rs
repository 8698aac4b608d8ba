//! Element identities the table page exposes to the audio layer.

use crate::sound::SoundKey;

pub const STAKE_INPUT_ID: &str = "bet";
pub const START_BUTTON_ID: &str = "start-btn";
pub const MUTE_CHECKBOX_ID: &str = "audio-mute";

pub const SETTINGS_TOGGLE_SELECTOR: &str = ".settings-toggle";
pub const SETTINGS_PANEL_SELECTOR: &str = ".settings-panel";
pub const VOLUME_SLIDER_SELECTOR: &str = ".audio-volume-slider";
pub const SOUND_BUTTON_SELECTOR: &str = ".btn";

/// Class flipped on the settings panel to show or hide it.
pub const HIDDEN_CLASS: &str = "hidden";

// `data-*` keys, in `dataset` camelCase.
pub const RESULT_DATA_KEY: &str = "result";
pub const SOUND_DATA_KEY: &str = "sound";
pub const SLIDER_KEY_DATA_KEY: &str = "soundKey";
pub const BG_START_DATA_KEY: &str = "bgStart";
pub const RESULT_DELAY_DATA_KEY: &str = "resultDelayMs";

/// `document.readyState` while the parser is still running; listeners must
/// wait for `DOMContentLoaded` in this state.
pub const DOCUMENT_LOADING: &str = "loading";

pub fn document_is_loading(ready_state: &str) -> bool {
    ready_state == DOCUMENT_LOADING
}

/// Id of the `<audio>` element backing a channel.
pub fn audio_element_id(key: SoundKey) -> &'static str {
    match key {
        SoundKey::Click => "sfx-click",
        SoundKey::Card => "sfx-card",
        SoundKey::Win => "sfx-win",
        SoundKey::Lose => "sfx-lose",
        SoundKey::Bg => "music-bg",
    }
}
