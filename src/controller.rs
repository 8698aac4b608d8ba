//! Page-lifetime owner of the audio preferences.
//!
//! The controller is the one place where storage and playback failures are
//! dropped: internal helpers return `Result`, and the event-facing methods
//! below log the error at debug level and carry on.

use std::time::Duration;

use tracing::{debug, info};

use crate::channel::{AudioChannel, ChannelSet};
use crate::config::{BackgroundStart, ControllerConfig};
use crate::error::PlaybackError;
use crate::outcome::Outcome;
use crate::prefs::{percent_from_input, percent_to_volume, volume_to_percent, AudioPreferences};
use crate::sound::{SoundCategory, SoundKey};
use crate::storage::{read_preferences, write_preferences, PreferenceStore};

/// Start guard for the background music. `Started` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundMusic {
    #[default]
    NotStarted,
    Started,
}

/// When the win/lose sound should play after the page is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPlayback {
    Immediate(SoundKey),
    Delayed(SoundKey, Duration),
}

impl ResultPlayback {
    pub fn sound_key(self) -> SoundKey {
        match self {
            ResultPlayback::Immediate(key) | ResultPlayback::Delayed(key, _) => key,
        }
    }
}

pub struct AudioPreferencesController<S, C> {
    store: S,
    channels: ChannelSet<C>,
    prefs: AudioPreferences,
    config: ControllerConfig,
    background: BackgroundMusic,
}

impl<S: PreferenceStore, C: AudioChannel> AudioPreferencesController<S, C> {
    /// Load stored preferences and apply them to every present channel.
    pub fn new(store: S, channels: ChannelSet<C>, config: ControllerConfig) -> Self {
        let prefs = load_or_default(&store);
        let mut ctl = Self {
            store,
            channels,
            prefs,
            config,
            background: BackgroundMusic::NotStarted,
        };
        ctl.apply();
        ctl
    }

    pub fn prefs(&self) -> &AudioPreferences {
        &self.prefs
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn background(&self) -> BackgroundMusic {
        self.background
    }

    pub fn channels(&self) -> &ChannelSet<C> {
        &self.channels
    }

    /// Re-read storage. Missing or unreadable data yields defaults.
    pub fn load(&self) -> AudioPreferences {
        load_or_default(&self.store)
    }

    /// Persist the current preferences. Returns whether the write landed.
    pub fn save(&mut self) -> bool {
        match write_preferences(&mut self.store, &self.prefs) {
            Ok(()) => true,
            Err(e) => {
                debug!("audio preferences not saved: {}", e);
                false
            }
        }
    }

    /// Push volume and mute state to every present channel.
    pub fn apply(&mut self) {
        let muted = self.prefs.master_muted;
        for (key, channel) in self.channels.iter_mut() {
            channel.set_volume(self.prefs.volumes.resolved(key));
            channel.set_muted(muted);
        }
    }

    /// Rewind and play one channel.
    pub fn try_play(&mut self, key: SoundKey) -> Result<(), PlaybackError> {
        if self.prefs.master_muted {
            return Err(PlaybackError::Muted);
        }
        let channel = self
            .channels
            .get_mut(key)
            .ok_or(PlaybackError::MissingChannel(key))?;
        channel.rewind();
        channel.play()
    }

    /// [`Self::try_play`] with the failure discarded. Returns whether the
    /// sound was started.
    pub fn play_safe(&mut self, key: SoundKey) -> bool {
        match self.try_play(key) {
            Ok(()) => true,
            Err(e) => {
                debug!("{} sound not played: {}", key.label(), e);
                false
            }
        }
    }

    /// Start the background music unless an attempt was already made.
    /// Returns whether this call issued a playback request.
    pub fn start_background_music_once(&mut self) -> bool {
        if self.background == BackgroundMusic::Started {
            return false;
        }
        match self.try_play(SoundKey::Bg) {
            Ok(()) => {
                info!("background music started");
                self.background = BackgroundMusic::Started;
                true
            }
            Err(e @ PlaybackError::Rejected(_)) => {
                // The request went out; a refused start is not retried.
                debug!("background music refused: {}", e);
                self.background = BackgroundMusic::Started;
                true
            }
            Err(e) => {
                debug!("background music not started: {}", e);
                false
            }
        }
    }

    /// Page-ready hook: the eager background-music attempt, if configured.
    pub fn on_page_ready(&mut self) {
        if self.config.background_start == BackgroundStart::EagerWithFallback {
            self.start_background_music_once();
        }
    }

    /// Channel to play for the page's outcome indicator, if any.
    pub fn result_sound(&self, indicator: &str) -> Option<SoundKey> {
        Outcome::parse(indicator).map(Outcome::sound_key)
    }

    /// How to play the outcome sound: after the configured delay, or at once
    /// when the delay is zero.
    pub fn result_playback(&self, indicator: &str) -> Option<ResultPlayback> {
        let key = self.result_sound(indicator)?;
        let delay = self.config.result_delay;
        Some(if delay.is_zero() {
            ResultPlayback::Immediate(key)
        } else {
            ResultPlayback::Delayed(key, delay)
        })
    }

    /// Play the win/lose sound for an outcome indicator right away.
    pub fn play_result(&mut self, indicator: &str) -> bool {
        match self.result_sound(indicator) {
            Some(key) => self.play_safe(key),
            None => false,
        }
    }

    /// A sound button was clicked; `tag` is its `data-sound` value.
    pub fn on_button_click(&mut self, tag: Option<&str>) -> bool {
        self.start_background_music_once();
        let key = SoundCategory::from_tag(tag).sound_key();
        self.play_safe(key)
    }

    /// The mute checkbox changed.
    pub fn on_mute_change(&mut self, muted: bool) {
        self.prefs.master_muted = muted;
        self.apply();
        self.save();
    }

    /// A volume slider moved. Returns the percentage that was stored.
    pub fn on_volume_input(&mut self, key: SoundKey, raw: &str) -> u8 {
        let percent = percent_from_input(raw);
        self.prefs.volumes.set(key, percent_to_volume(percent));
        self.apply();
        self.save();
        percent
    }

    /// A slider moved, addressed by its `data-sound-key`. Labels outside the
    /// channel set are ignored and `None` is returned.
    pub fn on_volume_input_label(&mut self, label: &str, raw: &str) -> Option<u8> {
        let key = SoundKey::parse(label)?;
        Some(self.on_volume_input(key, raw))
    }

    /// Initial slider position for a `data-sound-key` label.
    pub fn slider_percent(&self, label: &str) -> u8 {
        volume_to_percent(self.prefs.volumes.resolve_label(label))
    }
}

fn load_or_default<S: PreferenceStore + ?Sized>(store: &S) -> AudioPreferences {
    match read_preferences(store) {
        Ok(Some(prefs)) => prefs,
        Ok(None) => AudioPreferences::default(),
        Err(e) => {
            debug!("stored audio preferences ignored: {}", e);
            AudioPreferences::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SETTINGS_KEY};

    #[derive(Debug, Default)]
    struct FakeChannel {
        volume: f64,
        muted: bool,
        rewinds: u32,
        plays: u32,
        reject: bool,
    }

    impl AudioChannel for FakeChannel {
        fn set_volume(&mut self, volume: f64) {
            self.volume = volume;
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn rewind(&mut self) {
            self.rewinds += 1;
        }

        fn play(&mut self) -> Result<(), PlaybackError> {
            self.plays += 1;
            if self.reject {
                Err(PlaybackError::Rejected("NotAllowedError".to_string()))
            } else {
                Ok(())
            }
        }
    }

    type Ctl = AudioPreferencesController<MemoryStore, FakeChannel>;

    fn all_channels() -> ChannelSet<FakeChannel> {
        ChannelSet::from_fn(|_| Some(FakeChannel::default()))
    }

    fn controller(store: MemoryStore) -> Ctl {
        AudioPreferencesController::new(store, all_channels(), ControllerConfig::default())
    }

    fn with_channels(channels: ChannelSet<FakeChannel>) -> Ctl {
        AudioPreferencesController::new(MemoryStore::new(), channels, ControllerConfig::default())
    }

    fn with_config(cfg: ControllerConfig) -> Ctl {
        AudioPreferencesController::new(MemoryStore::new(), all_channels(), cfg)
    }

    fn plays(ctl: &Ctl, key: SoundKey) -> u32 {
        ctl.channels().get(key).map(|c| c.plays).unwrap_or(0)
    }

    fn total_plays(ctl: &Ctl) -> u32 {
        SoundKey::ALL.iter().map(|k| plays(ctl, *k)).sum()
    }

    #[test]
    fn stored_scenario_applies_mute_and_merged_volumes() {
        let store =
            MemoryStore::with_item(SETTINGS_KEY, r#"{"masterMuted":true,"volumes":{"bg":0.9}}"#);
        let ctl = controller(store);

        for k in SoundKey::ALL {
            assert!(ctl.channels().get(k).unwrap().muted, "{k:?} not muted");
        }
        let vol = |k| ctl.channels().get(k).unwrap().volume;
        assert_eq!(vol(SoundKey::Bg), 0.9);
        assert_eq!(vol(SoundKey::Click), 0.4);
        assert_eq!(vol(SoundKey::Card), 0.4);
        assert_eq!(vol(SoundKey::Win), 0.45);
        assert_eq!(vol(SoundKey::Lose), 0.45);
    }

    #[test]
    fn corrupt_or_missing_storage_loads_defaults() {
        for raw in [None, Some(""), Some("{broken"), Some("[]"), Some("7")] {
            let store = match raw {
                Some(r) => MemoryStore::with_item(SETTINGS_KEY, r),
                None => MemoryStore::new(),
            };
            let ctl = controller(store);
            assert_eq!(ctl.prefs(), &AudioPreferences::default(), "{raw:?}");
            assert_eq!(ctl.load(), AudioPreferences::default());
        }
    }

    #[test]
    fn apply_skips_absent_channels() {
        let channels = ChannelSet::from_fn(|k| (k == SoundKey::Win).then(FakeChannel::default));
        let mut ctl = with_channels(channels);
        ctl.apply();
        assert_eq!(ctl.channels().get(SoundKey::Win).unwrap().volume, 0.45);
        assert!(!ctl.play_safe(SoundKey::Click));
        assert!(matches!(
            ctl.try_play(SoundKey::Bg),
            Err(PlaybackError::MissingChannel(SoundKey::Bg))
        ));
        assert!(ctl.play_safe(SoundKey::Win));
    }

    #[test]
    fn play_safe_rewinds_then_plays() {
        let mut ctl = controller(MemoryStore::new());
        assert!(ctl.play_safe(SoundKey::Card));
        assert!(ctl.play_safe(SoundKey::Card));
        let card = ctl.channels().get(SoundKey::Card).unwrap();
        assert_eq!((card.rewinds, card.plays), (2, 2));
    }

    #[test]
    fn master_mute_silences_every_channel() {
        let raw = r#"{"masterMuted":true,"volumes":{"click":1}}"#;
        let store = MemoryStore::with_item(SETTINGS_KEY, raw);
        let mut ctl = controller(store);
        for k in SoundKey::ALL {
            assert!(!ctl.play_safe(k));
            assert_eq!(ctl.try_play(k), Err(PlaybackError::Muted));
        }
        assert!(!ctl.start_background_music_once());
        assert!(!ctl.on_button_click(Some("card")));
        assert_eq!(total_plays(&ctl), 0);
    }

    #[test]
    fn rejected_playback_is_swallowed() {
        let mut channels = all_channels();
        channels.get_mut(SoundKey::Click).unwrap().reject = true;
        let mut ctl = with_channels(channels);
        assert!(!ctl.play_safe(SoundKey::Click));
        assert_eq!(plays(&ctl, SoundKey::Click), 1);
    }

    #[test]
    fn background_music_starts_at_most_once() {
        let mut ctl = controller(MemoryStore::new());
        assert!(ctl.start_background_music_once());
        for _ in 0..5 {
            assert!(!ctl.start_background_music_once());
        }
        assert_eq!(plays(&ctl, SoundKey::Bg), 1);
        assert_eq!(ctl.background(), BackgroundMusic::Started);
    }

    #[test]
    fn refused_background_start_is_not_retried() {
        let mut channels = all_channels();
        channels.get_mut(SoundKey::Bg).unwrap().reject = true;
        let mut ctl = with_channels(channels);
        ctl.on_button_click(None);
        ctl.on_button_click(None);
        assert_eq!(plays(&ctl, SoundKey::Bg), 1);
        assert_eq!(plays(&ctl, SoundKey::Click), 2);
    }

    #[test]
    fn first_interaction_policy_waits_for_click() {
        let mut ctl = controller(MemoryStore::new());
        ctl.on_page_ready();
        assert_eq!(ctl.background(), BackgroundMusic::NotStarted);
        assert!(ctl.on_button_click(None));
        assert_eq!(ctl.background(), BackgroundMusic::Started);
        assert_eq!(plays(&ctl, SoundKey::Bg), 1);
    }

    #[test]
    fn eager_policy_starts_at_load_and_click_does_not_restart() {
        let cfg = ControllerConfig {
            background_start: BackgroundStart::EagerWithFallback,
            ..ControllerConfig::default()
        };
        let mut ctl = with_config(cfg);
        ctl.on_page_ready();
        assert_eq!(ctl.background(), BackgroundMusic::Started);
        ctl.on_button_click(Some("card"));
        assert_eq!(plays(&ctl, SoundKey::Bg), 1);
        assert_eq!(plays(&ctl, SoundKey::Card), 1);
    }

    #[test]
    fn eager_attempt_while_muted_falls_back_to_first_click() {
        let cfg = ControllerConfig {
            background_start: BackgroundStart::EagerWithFallback,
            ..ControllerConfig::default()
        };
        let store = MemoryStore::with_item(SETTINGS_KEY, r#"{"masterMuted":true}"#);
        let mut ctl = AudioPreferencesController::new(store, all_channels(), cfg);
        ctl.on_page_ready();
        assert_eq!(ctl.background(), BackgroundMusic::NotStarted);

        ctl.on_mute_change(false);
        ctl.on_button_click(None);
        ctl.on_button_click(None);
        assert_eq!(plays(&ctl, SoundKey::Bg), 1);
        assert_eq!(ctl.background(), BackgroundMusic::Started);
    }

    #[test]
    fn result_indicator_plays_matching_sound_once() {
        let cases = [
            ("victoire", Some(SoundKey::Win)),
            ("VICTOIRE", Some(SoundKey::Win)),
            ("défaite", Some(SoundKey::Lose)),
            ("defaite", Some(SoundKey::Lose)),
            ("", None),
            ("egalite", None),
        ];
        for (raw, expected) in cases {
            let mut ctl = controller(MemoryStore::new());
            assert_eq!(ctl.result_sound(raw), expected);
            assert_eq!(ctl.play_result(raw), expected.is_some());
            assert_eq!(plays(&ctl, SoundKey::Win), u32::from(expected == Some(SoundKey::Win)));
            assert_eq!(plays(&ctl, SoundKey::Lose), u32::from(expected == Some(SoundKey::Lose)));
        }
    }

    #[test]
    fn button_click_picks_card_or_click() {
        let mut ctl = controller(MemoryStore::new());
        ctl.on_button_click(Some("card"));
        ctl.on_button_click(Some("click"));
        ctl.on_button_click(Some("chips"));
        ctl.on_button_click(None);
        assert_eq!(plays(&ctl, SoundKey::Card), 1);
        assert_eq!(plays(&ctl, SoundKey::Click), 3);
    }

    #[test]
    fn mute_toggle_applies_and_persists() {
        let mut ctl = controller(MemoryStore::new());
        ctl.on_mute_change(true);
        assert!(ctl.channels().get(SoundKey::Lose).unwrap().muted);
        assert!(ctl.load().master_muted);

        ctl.on_mute_change(false);
        assert!(!ctl.channels().get(SoundKey::Lose).unwrap().muted);
        assert!(!ctl.load().master_muted);
    }

    #[test]
    fn volume_slider_clamps_and_persists() {
        let mut ctl = controller(MemoryStore::new());
        assert_eq!(ctl.on_volume_input(SoundKey::Win, "150"), 100);
        assert_eq!(ctl.prefs().volumes.resolved(SoundKey::Win), 1.0);
        assert_eq!(ctl.channels().get(SoundKey::Win).unwrap().volume, 1.0);
        assert_eq!(ctl.load().volumes.resolved(SoundKey::Win), 1.0);

        assert_eq!(ctl.on_volume_input(SoundKey::Click, "nope"), 0);
        assert_eq!(ctl.load().volumes.resolved(SoundKey::Click), 0.0);
        assert_eq!(ctl.slider_percent("win"), 100);
    }

    #[test]
    fn slider_positions_follow_resolved_volume() {
        let ctl = controller(MemoryStore::new());
        assert_eq!(ctl.slider_percent("click"), 40);
        assert_eq!(ctl.slider_percent("win"), 45);
        assert_eq!(ctl.slider_percent("bg"), 20);
        assert_eq!(ctl.slider_percent("ambience"), 30);
    }

    #[test]
    fn failed_save_keeps_in_memory_state() {
        let mut ctl = controller(MemoryStore::new().read_only());
        ctl.on_volume_input(SoundKey::Card, "80");
        assert!(!ctl.save());
        assert_eq!(ctl.prefs().volumes.resolved(SoundKey::Card), 0.8);
        assert_eq!(ctl.load(), AudioPreferences::default());
    }

    #[test]
    fn result_sound_waits_for_configured_delay() {
        let ctl = controller(MemoryStore::new());
        assert_eq!(
            ctl.result_playback("victoire"),
            Some(ResultPlayback::Delayed(SoundKey::Win, Duration::from_millis(150)))
        );
        assert_eq!(ctl.result_playback("egalite"), None);
        assert_eq!(ctl.result_playback(""), None);
    }

    #[test]
    fn zero_result_delay_plays_immediately() {
        let cfg = ControllerConfig::default().with_page_overrides(None, Some("0"));
        let ctl = with_config(cfg);
        let playback = ctl.result_playback("Défaite");
        assert_eq!(playback, Some(ResultPlayback::Immediate(SoundKey::Lose)));
        assert_eq!(playback.map(ResultPlayback::sound_key), Some(SoundKey::Lose));
    }

    #[test]
    fn unknown_slider_label_edits_are_ignored() {
        let mut ctl = controller(MemoryStore::new());
        assert_eq!(ctl.on_volume_input_label("ambience", "90"), None);
        assert_eq!(ctl.prefs(), &AudioPreferences::default());
        assert_eq!(ctl.load(), AudioPreferences::default());
        assert_eq!(ctl.slider_percent("ambience"), 30);

        assert_eq!(ctl.on_volume_input_label("lose", "90"), Some(90));
        assert_eq!(ctl.load().volumes.resolved(SoundKey::Lose), 0.9);
    }
}
