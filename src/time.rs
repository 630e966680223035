//! Clock arithmetic and display formatting for durations and paces.

use serde::{Deserialize, Serialize};

/// A duration split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct TimeParts {
    /// Hours, unbounded (no day carry)
    pub hours: u32,
    /// Minutes, 0-59
    pub minutes: u32,
    /// Seconds, 0-59
    pub seconds: u32,
}

/// Total seconds from hours, minutes and seconds.
pub fn time_to_seconds(hours: f64, minutes: f64, seconds: f64) -> f64 {
    hours * 3600.0 + minutes * 60.0 + seconds
}

/// Distance from a whole second within which a value counts as that second.
pub const WHOLE_SECOND_EPSILON: f64 = 1e-6;

/// Longest duration [`seconds_to_time`] can represent: `u32::MAX` hours.
pub const MAX_DURATION_SECONDS: f64 = u32::MAX as f64 * 3600.0;

/// Clean up a duration before it is floored for display.
///
/// Negative and non-finite values read as zero, values within
/// [`WHOLE_SECOND_EPSILON`] of a whole second snap to it (so
/// `42.195 * (12600 / 42.195)` shows as 12600 s, not one second short), and
/// anything past [`MAX_DURATION_SECONDS`] is clamped.
pub fn display_seconds(total_seconds: f64) -> f64 {
    if !total_seconds.is_finite() || total_seconds <= 0.0 {
        return 0.0;
    }
    let nearest = total_seconds.round();
    let snapped = if (total_seconds - nearest).abs() < WHOLE_SECOND_EPSILON {
        nearest
    } else {
        total_seconds
    };
    snapped.min(MAX_DURATION_SECONDS)
}

/// Decompose a duration into whole hours, minutes and seconds.
///
/// Every component is floored; fractional seconds are dropped rather than
/// rounded, except that values within a hair of a whole second snap to it.
/// Negative or non-finite input reads as zero, and durations past
/// [`MAX_DURATION_SECONDS`] clamp to `u32::MAX` hours.
pub fn seconds_to_time(total_seconds: f64) -> TimeParts {
    let total = display_seconds(total_seconds);
    TimeParts {
        hours: (total / 3600.0).floor() as u32,
        minutes: ((total % 3600.0) / 60.0).floor() as u32,
        seconds: (total % 60.0).floor() as u32,
    }
}

/// Zero-padded `HH:MM:SS`. Hours grow past two digits when needed.
pub fn format_time(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// `HH:MM:SS` for a duration in seconds.
pub fn format_duration(total_seconds: f64) -> String {
    let parts = seconds_to_time(total_seconds);
    format_time(parts.hours, parts.minutes, parts.seconds)
}

/// Pace as `M'SS"`. Minutes are not wrapped into hours, seconds are floored
/// and zero-padded.
pub fn format_pace(pace_seconds: f64) -> String {
    let pace = display_seconds(pace_seconds);
    let minutes = (pace / 60.0).floor() as u64;
    let seconds = (pace % 60.0).floor() as u64;
    format!("{}'{:02}\"", minutes, seconds)
}

/// Distance with two decimals followed by the unit label.
pub fn format_distance(distance: f64, unit: crate::Unit) -> String {
    format!("{:.2} {}", distance, unit)
}
