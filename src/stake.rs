//! Start-button gating on the stake input.

use crate::input::parse_int_or;

/// Limit assumed when the stake input carries no `max` attribute.
pub const DEFAULT_MAX_STAKE: &str = "999999";

/// Whether the start control should be enabled for a stake.
///
/// Both values are raw input strings. The stake must be a positive integer no
/// greater than `max`; an unreadable `max` keeps the control disabled.
pub fn start_enabled(stake: &str, max: &str) -> bool {
    let Some(value) = parse_int_or(stake, "0") else {
        return false;
    };
    let Some(max) = parse_int_or(max, DEFAULT_MAX_STAKE) else {
        return false;
    };
    value > 0 && value <= max
}
