//! Pace intensity and display colors.
//!
//! Intensity is a linear scale between an easy reference pace (0) and a hard
//! one (1). Colors are banded: five fixed gradient pairs, no interpolation.

use serde::{Deserialize, Serialize};

use crate::units::{convert_pace, Unit};

/// Easy reference pace, 7'00"/km
pub const SLOW_PACE_SECONDS_PER_KM: f64 = 420.0;
/// Hard reference pace, 3'00"/km
pub const FAST_PACE_SECONDS_PER_KM: f64 = 180.0;

/// A gradient as two CSS hex colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ColorPair {
    pub from: String,
    pub to: String,
}

impl ColorPair {
    fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Intensity between custom references, clamped to [0, 1].
pub fn pace_intensity_between(pace_seconds_per_km: f64, slow: f64, fast: f64) -> f64 {
    if slow == fast {
        return 0.0;
    }
    let intensity = 1.0 - (pace_seconds_per_km - fast) / (slow - fast);
    if intensity.is_nan() {
        return 0.0;
    }
    intensity.clamp(0.0, 1.0)
}

/// Intensity for a pace in seconds per km: 0 at 7'00"/km or slower, 1 at
/// 3'00"/km or faster.
pub fn pace_intensity(pace_seconds_per_km: f64) -> f64 {
    pace_intensity_between(
        pace_seconds_per_km,
        SLOW_PACE_SECONDS_PER_KM,
        FAST_PACE_SECONDS_PER_KM,
    )
}

/// Intensity for a pace expressed in `unit`, re-expressed per km first.
pub fn pace_intensity_for_unit(pace_seconds_per_unit: f64, unit: Unit) -> f64 {
    pace_intensity(convert_pace(pace_seconds_per_unit, unit, Unit::Km))
}

/// Gradient for an intensity. Cool colors when easy, warm when hard.
pub fn pace_color(intensity: f64) -> ColorPair {
    if intensity < 0.2 {
        ColorPair::new("#06b6d4", "#0ea5e9")
    } else if intensity < 0.4 {
        ColorPair::new("#3b82f6", "#10b981")
    } else if intensity < 0.6 {
        ColorPair::new("#10b981", "#84cc16")
    } else if intensity < 0.8 {
        ColorPair::new("#facc15", "#f97316")
    } else {
        ColorPair::new("#f97316", "#ef4444")
    }
}
