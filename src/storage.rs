use std::collections::HashMap;

use crate::error::{PrefsError, StorageError};
use crate::prefs::AudioPreferences;

/// Key of the single persisted entry.
pub const SETTINGS_KEY: &str = "bj_audio_settings";

/// String key-value store with `localStorage` semantics.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store, used off the browser and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut s = Self::new();
        s.items.insert(key.to_string(), value.to_string());
        s
    }

    /// Reject every write, the way a full or disabled browser store does.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Backend("quota exceeded".to_string()));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the stored preferences. `Ok(None)` when nothing (or an empty string)
/// is stored.
pub fn read_preferences<S: PreferenceStore + ?Sized>(
    store: &S,
) -> Result<Option<AudioPreferences>, PrefsError> {
    match store.get_item(SETTINGS_KEY)? {
        Some(raw) if !raw.is_empty() => Ok(Some(AudioPreferences::decode(&raw)?)),
        _ => Ok(None),
    }
}

pub fn write_preferences<S: PreferenceStore + ?Sized>(
    store: &mut S,
    prefs: &AudioPreferences,
) -> Result<(), PrefsError> {
    let raw = prefs.encode()?;
    store.set_item(SETTINGS_KEY, &raw)?;
    Ok(())
}
