use thiserror::Error;

use crate::sound::SoundKey;

/// Failures of the key-value backend itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failures reading or writing the preferences blob.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stored preferences are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stored preferences are not a JSON object")]
    NotAnObject,
}

/// Reasons a sound did not start.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("no audio element for channel '{}'", .0.label())]
    MissingChannel(SoundKey),

    #[error("master mute is on")]
    Muted,

    #[error("playback rejected: {0}")]
    Rejected(String),
}
