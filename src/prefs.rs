//! The persisted audio preferences and their lenient JSON decoding.
//!
//! Stored blobs come from older page revisions and from whatever a user left
//! in their browser, so decoding never trusts the shape: each volume is merged
//! over its default key by key, and `masterMuted` is read by truthiness.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::PrefsError;
use crate::input::parse_int_or;
use crate::sound::SoundKey;

/// Volume used for a slider whose key is outside the known channel set.
pub const FALLBACK_VOLUME: f64 = 0.3;

/// Per-channel volume, one entry for every [`SoundKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSettings {
    values: [f64; SoundKey::COUNT],
}

impl VolumeSettings {
    pub fn new() -> Self {
        let mut values = [0.0; SoundKey::COUNT];
        for k in SoundKey::ALL {
            values[k.index()] = k.default_volume();
        }
        Self { values }
    }

    /// Value as stored; may sit outside [0,1] if an old record said so.
    pub fn raw(&self, key: SoundKey) -> f64 {
        self.values[key.index()]
    }

    /// Stored value clamped to [0,1].
    pub fn resolved(&self, key: SoundKey) -> f64 {
        clamp_volume(self.values[key.index()])
    }

    /// Non-finite values are ignored and the previous value kept.
    pub fn set(&mut self, key: SoundKey, volume: f64) {
        if volume.is_finite() {
            self.values[key.index()] = volume;
        }
    }

    /// Resolve a slider's `data-sound-key`; unknown labels get
    /// [`FALLBACK_VOLUME`].
    pub fn resolve_label(&self, label: &str) -> f64 {
        SoundKey::parse(label)
            .map(|k| self.resolved(k))
            .unwrap_or(FALLBACK_VOLUME)
    }

    /// Overlay every finite numeric entry of a stored `volumes` object.
    fn merge_json(&mut self, stored: &serde_json::Map<String, Value>) {
        for (label, v) in stored {
            let (Some(key), Some(vol)) = (SoundKey::parse(label), v.as_f64()) else {
                continue;
            };
            self.set(key, vol);
        }
    }
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for VolumeSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SoundKey::COUNT))?;
        for k in SoundKey::ALL {
            map.serialize_entry(k.label(), &self.raw(k))?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPreferences {
    pub master_muted: bool,
    pub volumes: VolumeSettings,
}

impl AudioPreferences {
    /// Decode a stored blob.
    ///
    /// Invalid JSON and non-object payloads are errors; everything inside an
    /// object is tolerated and falls back to defaults field by field.
    pub fn decode(raw: &str) -> Result<Self, PrefsError> {
        let parsed: Value = serde_json::from_str(raw)?;
        let Value::Object(obj) = parsed else {
            return Err(PrefsError::NotAnObject);
        };

        let mut prefs = AudioPreferences {
            master_muted: obj.get("masterMuted").map(is_truthy).unwrap_or(false),
            volumes: VolumeSettings::new(),
        };
        if let Some(Value::Object(stored)) = obj.get("volumes") {
            prefs.volumes.merge_json(stored);
        }
        Ok(prefs)
    }

    pub fn encode(&self) -> Result<String, PrefsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// JavaScript `!!value` for a JSON value.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn clamp_volume(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Slider position for a volume: `round(volume * 100)` after clamping.
pub fn volume_to_percent(volume: f64) -> u8 {
    (clamp_volume(volume) * 100.0).round() as u8
}

/// Slider input to a percentage. Unparseable input reads as 0.
pub fn percent_from_input(raw: &str) -> u8 {
    parse_int_or(raw, "0").unwrap_or(0).clamp(0, 100) as u8
}

pub fn percent_to_volume(percent: u8) -> f64 {
    f64::from(percent.min(100)) / 100.0
}
