use std::time::Duration;

use crate::input::parse_int_prefix;

/// When the background music first tries to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundStart {
    /// Only on the first sound-button click.
    #[default]
    FirstInteraction,
    /// Try at page load; the first click retries if that attempt was never
    /// issued (muted, or no music element yet).
    EagerWithFallback,
}

impl BackgroundStart {
    pub fn parse(v: &str) -> Option<Self> {
        match v.trim().to_ascii_lowercase().as_str() {
            "click" | "first-click" | "interaction" => Some(BackgroundStart::FirstInteraction),
            "eager" | "load" => Some(BackgroundStart::EagerWithFallback),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub background_start: BackgroundStart,
    /// Pause between page load and the win/lose sound.
    pub result_delay: Duration,
}

pub const DEFAULT_RESULT_DELAY: Duration = Duration::from_millis(150);

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            background_start: BackgroundStart::default(),
            result_delay: DEFAULT_RESULT_DELAY,
        }
    }
}

impl ControllerConfig {
    /// Apply optional page overrides (`data-bg-start`, `data-result-delay-ms`).
    /// Unreadable values leave the default in place.
    pub fn with_page_overrides(
        mut self,
        bg_start: Option<&str>,
        result_delay_ms: Option<&str>,
    ) -> Self {
        if let Some(policy) = bg_start.and_then(BackgroundStart::parse) {
            self.background_start = policy;
        }
        if let Some(ms) = result_delay_ms.and_then(parse_int_prefix) {
            self.result_delay = Duration::from_millis(ms.max(0) as u64);
        }
        self
    }
}
