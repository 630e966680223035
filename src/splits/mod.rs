//! # Strategy-Based Split Generation
//!
//! Produces a per-segment pacing plan whose total time and distance match the
//! requested race exactly.
//!
//! ## Algorithm
//! 1. Cut the distance into whole-unit segments plus a fractional remainder
//! 2. Assign each segment a base multiplier from the strategy
//! 3. Scale multipliers by the fine-tune checkpoints each segment has passed
//! 4. Solve for the base pace: `p0 = T / Σ(dᵢ · mᵢ)`, then `pᵢ = p0 · mᵢ` and
//!    `tᵢ = pᵢ · dᵢ`, accumulating distance and time segment by segment
//!
//! Degenerate input (non-positive distance or time, a distance needing more
//! than [`MAX_SEGMENTS`] segments, or a non-positive weighted distance) yields
//! an empty plan rather than an error.
//!
//! ## Example
//! ```rust
//! use pace_planner::splits::{calculate_strategy_splits, SplitStrategy, SplitStrategyOptions};
//! use pace_planner::Unit;
//!
//! let options = SplitStrategyOptions {
//!     strategy: SplitStrategy::Negative,
//!     unit: Unit::Km,
//!     strength_seconds: 10.0,
//!     fine_tune: None,
//! };
//! let splits = calculate_strategy_splits(10.0, 3000.0, &options);
//! assert_eq!(splits.len(), 10);
//! assert!(splits[0].pace_seconds > splits[9].pace_seconds);
//! assert_eq!(splits[9].cumulative_time, "00:50:00");
//! ```

mod multipliers;
mod summary;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::time::{format_duration, format_pace};
use crate::Unit;

pub use multipliers::{
    apply_fine_tune, build_base_multipliers, build_segment_distances, fine_tune_checkpoints,
    segment_midpoints, strategy_amplitude, FineTuneCheckpoint, MAX_AMPLITUDE, MAX_SEGMENTS,
    MIN_AMPLITUDE,
};
pub use summary::{
    finish_summary, half_split_summary, select_splits, FinishSummary, HalfSplitSummary, SplitView,
    FINISH_WINDOW, VIEW_EPSILON,
};

/// Pacing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum SplitStrategy {
    /// Same pace throughout
    #[default]
    Even,
    /// Slower start, faster finish
    Negative,
    /// Faster start, slower finish
    SlightPositive,
    /// Conservative first 10 miles, steady middle, faster last 10 km
    TenTenTen,
    /// Half-strength negative split, meant to be shaped with fine-tuning
    Custom,
}

impl SplitStrategy {
    pub const ALL: [SplitStrategy; 5] = [
        SplitStrategy::Even,
        SplitStrategy::Negative,
        SplitStrategy::SlightPositive,
        SplitStrategy::TenTenTen,
        SplitStrategy::Custom,
    ];
}

/// Percentage adjustments that take effect after each checkpoint
/// (+ slower, - faster). Unset checkpoints have no effect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct FineTunePercent {
    pub after_5k: Option<f64>,
    pub after_10k: Option<f64>,
    pub after_half: Option<f64>,
    pub after_30k: Option<f64>,
}

impl FineTunePercent {
    /// True when no checkpoint carries a percentage.
    pub fn is_empty(&self) -> bool {
        self.after_5k.is_none()
            && self.after_10k.is_none()
            && self.after_half.is_none()
            && self.after_30k.is_none()
    }
}

/// Strategy configuration for one plan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct SplitStrategyOptions {
    pub strategy: SplitStrategy,
    pub unit: Unit,
    /// How many seconds per unit the strategy shifts between start and finish
    #[serde(default)]
    pub strength_seconds: f64,
    #[serde(default)]
    pub fine_tune: Option<FineTunePercent>,
}

impl SplitStrategyOptions {
    /// Even pacing in `unit`.
    pub fn even(unit: Unit) -> Self {
        Self {
            strategy: SplitStrategy::Even,
            unit,
            strength_seconds: 0.0,
            fine_tune: None,
        }
    }
}

/// One row of the split table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Split {
    /// 1-based segment number
    pub split_number: u32,
    /// Segment length in the active unit (1, or less for the remainder)
    pub segment_distance: f64,
    /// Final multiplier applied to the base pace
    pub multiplier: f64,
    /// Segment pace in seconds per unit
    pub pace_seconds: f64,
    /// Time spent on this segment in seconds
    pub segment_seconds: f64,
    /// Distance from the start to the end of this segment
    pub distance_from_start: f64,
    /// Time from the start to the end of this segment in seconds
    pub cumulative_seconds: f64,
    /// Pace formatted as `M'SS"`
    pub pace_per_split: String,
    /// Cumulative time formatted as `HH:MM:SS`
    pub cumulative_time: String,
}

/// A full plan for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct StrategyPlan {
    pub strategy: SplitStrategy,
    pub splits: Vec<Split>,
}

/// Compute the split table for a race.
///
/// # Arguments
/// * `total_distance` - Race distance in `options.unit`
/// * `total_time_seconds` - Goal time
/// * `options` - Strategy, strength and fine-tune
///
/// # Returns
/// One [`Split`] per segment, or an empty list for degenerate input.
pub fn calculate_strategy_splits(
    total_distance: f64,
    total_time_seconds: f64,
    options: &SplitStrategyOptions,
) -> Vec<Split> {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(total_distance) || !usable(total_time_seconds) {
        debug!(
            "[Splits] Degenerate input: distance={}, time={}",
            total_distance, total_time_seconds
        );
        return Vec::new();
    }
    if total_distance.floor() > MAX_SEGMENTS as f64 {
        debug!(
            "[Splits] Distance {} needs more than {} segments",
            total_distance, MAX_SEGMENTS
        );
        return Vec::new();
    }

    let segments = build_segment_distances(total_distance);
    let base = build_base_multipliers(&segments, total_distance, total_time_seconds, options);
    let multipliers = apply_fine_tune(&base, &segments, options.unit, options.fine_tune.as_ref());

    let weighted_distance: f64 = segments
        .iter()
        .zip(&multipliers)
        .map(|(d, m)| d * m)
        .sum();

    if !(weighted_distance > 0.0) {
        debug!("[Splits] Weighted distance {} is not positive", weighted_distance);
        return Vec::new();
    }

    let base_pace = total_time_seconds / weighted_distance;
    let last = segments.len() - 1;

    let mut cumulative_seconds = 0.0;
    let mut cumulative_distance = 0.0;

    segments
        .iter()
        .zip(&multipliers)
        .enumerate()
        .map(|(i, (&segment_distance, &multiplier))| {
            let pace_seconds = base_pace * multiplier;
            let segment_seconds = pace_seconds * segment_distance;

            cumulative_seconds += segment_seconds;
            cumulative_distance += segment_distance;

            // Pin the finish to the exact totals so rounding drift cannot
            // floor the final time one second short
            if i == last {
                cumulative_seconds = total_time_seconds;
                cumulative_distance = total_distance;
            }

            Split {
                split_number: (i + 1) as u32,
                segment_distance,
                multiplier,
                pace_seconds,
                segment_seconds,
                distance_from_start: cumulative_distance,
                cumulative_seconds,
                pace_per_split: format_pace(pace_seconds),
                cumulative_time: format_duration(cumulative_seconds),
            }
        })
        .collect()
}

/// Even-pace split table from a distance and a pace.
pub fn calculate_splits(total_distance: f64, pace_seconds_per_unit: f64, unit: Unit) -> Vec<Split> {
    let total_time_seconds = total_distance * pace_seconds_per_unit;
    calculate_strategy_splits(total_distance, total_time_seconds, &SplitStrategyOptions::even(unit))
}

/// Run every strategy with the same strength and fine-tune settings.
pub fn compare_strategies(
    total_distance: f64,
    total_time_seconds: f64,
    options: &SplitStrategyOptions,
) -> Vec<StrategyPlan> {
    SplitStrategy::ALL
        .iter()
        .map(|&strategy| StrategyPlan {
            strategy,
            splits: calculate_strategy_splits(
                total_distance,
                total_time_seconds,
                &SplitStrategyOptions {
                    strategy,
                    ..*options
                },
            ),
        })
        .collect()
}
