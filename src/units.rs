//! Distance and pace unit conversion.
//!
//! Both conversions are a single linear scale between kilometres and miles.
//! Pace ("seconds per unit") is scaled by the same factor as distance.
//!
//! ## Example
//! ```rust
//! use pace_planner::units::{convert_distance, preset_distance, PresetDistance, Unit};
//!
//! let miles = convert_distance(10.0, Unit::Km, Unit::Mi);
//! assert!((miles - 6.21371).abs() < 1e-9);
//!
//! let marathon = preset_distance(PresetDistance::Marathon, Unit::Km);
//! assert_eq!(marathon, 42.195);
//! ```

use serde::{Deserialize, Serialize};

/// Kilometres to miles
pub const KM_TO_MI: f64 = 0.621371;
/// Miles to kilometres
pub const MI_TO_KM: f64 = 1.60934;

/// Half marathon distance in kilometres
pub const HALF_MARATHON_KM: f64 = 21.0975;
/// Marathon distance in kilometres
pub const MARATHON_KM: f64 = 42.195;

/// Linear distance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum Unit {
    #[default]
    Km,
    Mi,
}

impl Unit {
    /// The other unit.
    pub fn toggled(self) -> Self {
        match self {
            Unit::Km => Unit::Mi,
            Unit::Mi => Unit::Km,
        }
    }

    /// Short label ("km" / "mi").
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Km => "km",
            Unit::Mi => "mi",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Factor that takes a value expressed in `from` to `to`.
fn factor(from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Km, Unit::Mi) => KM_TO_MI,
        (Unit::Mi, Unit::Km) => MI_TO_KM,
        _ => 1.0,
    }
}

/// Convert a distance between units. Identity when `from == to`.
pub fn convert_distance(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    value * factor(from, to)
}

/// Convert a pace (seconds per unit) between units.
///
/// Uses the distance factor as-is, so `convert_pace(p, Mi, Km)` multiplies by
/// 1.60934. Identity when `from == to`.
pub fn convert_pace(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    value * factor(from, to)
}

/// Common race distances offered as one-tap presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum PresetDistance {
    #[serde(rename = "5k")]
    FiveK,
    #[serde(rename = "10k")]
    TenK,
    HalfMarathon,
    Marathon,
    #[serde(rename = "50k")]
    FiftyK,
}

impl PresetDistance {
    /// All presets, shortest first.
    pub const ALL: [PresetDistance; 5] = [
        PresetDistance::FiveK,
        PresetDistance::TenK,
        PresetDistance::HalfMarathon,
        PresetDistance::Marathon,
        PresetDistance::FiftyK,
    ];

    /// Distance in kilometres.
    pub fn kilometers(self) -> f64 {
        match self {
            PresetDistance::FiveK => 5.0,
            PresetDistance::TenK => 10.0,
            PresetDistance::HalfMarathon => HALF_MARATHON_KM,
            PresetDistance::Marathon => MARATHON_KM,
            PresetDistance::FiftyK => 50.0,
        }
    }
}

/// Preset distance expressed in `unit`.
pub fn preset_distance(preset: PresetDistance, unit: Unit) -> f64 {
    convert_distance(preset.kilometers(), Unit::Km, unit)
}
