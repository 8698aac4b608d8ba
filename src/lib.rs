//! # bj_audio
//!
//! Audio preferences and sound dispatch for the blackjack table page.
//!
//! The page has five audio channels (clicks, card flips, win/lose stings and
//! looping background music), a settings panel with a master mute and one
//! volume slider per channel, and a stake input that gates the start button.
//! This crate holds the platform-independent part: the persisted preference
//! model, the controller that applies it and plays sounds, and the small input
//! rules the page relies on. The browser binding lives in `bj_audio_web`.
//!
//! ## Quick Start
//!
//! ```
//! use bj_audio::prelude::*;
//!
//! # #[derive(Default)]
//! # struct Silent;
//! # impl AudioChannel for Silent {
//! #     fn set_volume(&mut self, _v: f64) {}
//! #     fn set_muted(&mut self, _m: bool) {}
//! #     fn rewind(&mut self) {}
//! #     fn play(&mut self) -> Result<(), PlaybackError> { Ok(()) }
//! # }
//! let channels = ChannelSet::from_fn(|_| Some(Silent));
//! let mut ctl = AudioPreferencesController::new(
//!     MemoryStore::new(),
//!     channels,
//!     ControllerConfig::default(),
//! );
//!
//! ctl.on_button_click(Some("card"));
//! ctl.on_volume_input(SoundKey::Bg, "35");
//! assert_eq!(ctl.slider_percent("bg"), 35);
//! ```

pub mod channel;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod outcome;
pub mod page;
pub mod prefs;
pub mod sound;
pub mod stake;
pub mod storage;

pub mod prelude {
    pub use crate::channel::{AudioChannel, ChannelSet};
    pub use crate::config::{BackgroundStart, ControllerConfig};
    pub use crate::controller::{AudioPreferencesController, BackgroundMusic, ResultPlayback};
    pub use crate::error::{PlaybackError, PrefsError, StorageError};
    pub use crate::outcome::Outcome;
    pub use crate::prefs::{AudioPreferences, VolumeSettings};
    pub use crate::sound::{SoundCategory, SoundKey};
    pub use crate::stake::start_enabled;
    pub use crate::storage::{MemoryStore, PreferenceStore, SETTINGS_KEY};
}
