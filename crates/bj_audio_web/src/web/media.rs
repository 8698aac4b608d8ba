use bj_audio::channel::AudioChannel;
use bj_audio::error::PlaybackError;
use bj_audio::page::audio_element_id;
use bj_audio::sound::SoundKey;
use tracing::debug;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlAudioElement};

use super::dom::{by_id, js_error_string};

/// An `<audio>` element on the page.
pub(super) struct MediaChannel {
    key: SoundKey,
    el: HtmlAudioElement,
}

impl MediaChannel {
    pub(super) fn find(doc: &Document, key: SoundKey) -> Option<Self> {
        let el = by_id::<HtmlAudioElement>(doc, audio_element_id(key))?;
        Some(Self { key, el })
    }
}

impl AudioChannel for MediaChannel {
    fn set_volume(&mut self, volume: f64) {
        self.el.set_volume(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        self.el.set_muted(muted);
    }

    fn rewind(&mut self) {
        self.el.set_current_time(0.0);
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let promise = self
            .el
            .play()
            .map_err(|e| PlaybackError::Rejected(js_error_string(&e)))?;

        // Autoplay refusals arrive as a rejected promise; drop them here.
        let label = self.key.label();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                debug!("{} playback refused: {}", label, js_error_string(&e));
            }
        });
        Ok(())
    }
}
