//! Segmentation and the per-segment multiplier curve.
//!
//! A multiplier above 1 makes a segment slower than the base pace, below 1
//! faster. The curve is built from the strategy first, then scaled by the
//! fine-tune checkpoints the segment has passed.

use serde::{Deserialize, Serialize};

use super::{FineTunePercent, SplitStrategy, SplitStrategyOptions};
use crate::units::{convert_distance, Unit, HALF_MARATHON_KM};

/// Lower bound on the strategy amplitude (fraction of base pace)
pub const MIN_AMPLITUDE: f64 = 0.02;
/// Upper bound on the strategy amplitude (fraction of base pace)
pub const MAX_AMPLITUDE: f64 = 0.08;

/// Most whole-unit segments a plan may hold
pub const MAX_SEGMENTS: usize = 10_000;

/// A fine-tune checkpoint in the active unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct FineTuneCheckpoint {
    /// Distance from the start, in the active unit
    pub distance: f64,
    /// Percentage applied once a segment midpoint is past `distance`
    pub percent: Option<f64>,
}

/// Split a total distance into whole-unit segments plus a fractional remainder.
///
/// Returns an empty list when `total_distance <= 0`, is not finite, or needs
/// more than [`MAX_SEGMENTS`] whole segments.
pub fn build_segment_distances(total_distance: f64) -> Vec<f64> {
    if !total_distance.is_finite() || total_distance <= 0.0 {
        return Vec::new();
    }

    let whole = total_distance.floor();
    if whole > MAX_SEGMENTS as f64 {
        return Vec::new();
    }
    let mut segments = vec![1.0; whole as usize];

    let remainder = total_distance - whole;
    if remainder > 0.0 {
        segments.push(remainder);
    }

    segments
}

/// Midpoint of each segment, measured from the start.
///
/// Tracked by accumulating segment lengths so that a fractional last segment
/// gets its true midpoint rather than one inferred from its index.
pub fn segment_midpoints(segments: &[f64]) -> Vec<f64> {
    let mut cumulative = 0.0;
    segments
        .iter()
        .map(|&len| {
            let center = cumulative + len / 2.0;
            cumulative += len;
            center
        })
        .collect()
}

/// Strategy amplitude: strength relative to the average pace, kept within
/// [`MIN_AMPLITUDE`, `MAX_AMPLITUDE`].
pub fn strategy_amplitude(strength_seconds: f64, total_distance: f64, total_time: f64) -> f64 {
    let avg_pace = total_time / total_distance;
    (strength_seconds / avg_pace)
        .abs()
        .clamp(MIN_AMPLITUDE, MAX_AMPLITUDE)
}

/// Base multiplier per segment, before fine-tuning.
pub fn build_base_multipliers(
    segments: &[f64],
    total_distance: f64,
    total_time: f64,
    options: &SplitStrategyOptions,
) -> Vec<f64> {
    let n = segments.len();
    let mut multipliers = vec![1.0; n];

    if n == 0 || total_distance <= 0.0 || total_time <= 0.0 {
        return multipliers;
    }
    if options.strategy == SplitStrategy::Even || !(options.strength_seconds > 0.0) {
        return multipliers;
    }

    let amplitude = strategy_amplitude(options.strength_seconds, total_distance, total_time);

    // -1 at the start, +1 at the finish
    let position = |i: usize| -> f64 {
        if n == 1 {
            0.0
        } else {
            (i as f64 / (n - 1) as f64) * 2.0 - 1.0
        }
    };

    match options.strategy {
        SplitStrategy::Even => {}
        SplitStrategy::Negative => {
            for (i, m) in multipliers.iter_mut().enumerate() {
                *m = 1.0 - position(i) * amplitude;
            }
        }
        SplitStrategy::SlightPositive => {
            for (i, m) in multipliers.iter_mut().enumerate() {
                *m = 1.0 + position(i) * amplitude;
            }
        }
        SplitStrategy::Custom => {
            for (i, m) in multipliers.iter_mut().enumerate() {
                *m = 1.0 - position(i) * (amplitude / 2.0);
            }
        }
        SplitStrategy::TenTenTen => {
            let ten_miles = convert_distance(10.0, Unit::Mi, options.unit);
            let ten_km = convert_distance(10.0, Unit::Km, options.unit);

            for (m, center) in multipliers.iter_mut().zip(segment_midpoints(segments)) {
                *m = if center <= ten_miles {
                    1.0 + amplitude
                } else if total_distance - center <= ten_km {
                    1.0 - amplitude
                } else {
                    1.0
                };
            }
        }
    }

    multipliers
}

/// The 5K / 10K / half / 30K checkpoints converted into `unit`.
pub fn fine_tune_checkpoints(unit: Unit, fine_tune: &FineTunePercent) -> [FineTuneCheckpoint; 4] {
    let at = |km: f64, percent: Option<f64>| FineTuneCheckpoint {
        distance: convert_distance(km, Unit::Km, unit),
        percent,
    };
    [
        at(5.0, fine_tune.after_5k),
        at(10.0, fine_tune.after_10k),
        at(HALF_MARATHON_KM, fine_tune.after_half),
        at(30.0, fine_tune.after_30k),
    ]
}

/// Apply fine-tune percentages to a multiplier curve.
///
/// For each segment the percentages of every configured checkpoint at or
/// behind its midpoint are summed, then applied as one factor
/// `1 + sum / 100`.
pub fn apply_fine_tune(
    multipliers: &[f64],
    segments: &[f64],
    unit: Unit,
    fine_tune: Option<&FineTunePercent>,
) -> Vec<f64> {
    let Some(fine_tune) = fine_tune else {
        return multipliers.to_vec();
    };

    let checkpoints = fine_tune_checkpoints(unit, fine_tune);

    multipliers
        .iter()
        .zip(segment_midpoints(segments))
        .map(|(&m, center)| {
            let extra_percent: f64 = checkpoints
                .iter()
                .filter(|cp| center >= cp.distance)
                .filter_map(|cp| cp.percent)
                .sum();

            if extra_percent != 0.0 {
                m * (1.0 + extra_percent / 100.0)
            } else {
                m
            }
        })
        .collect()
}
