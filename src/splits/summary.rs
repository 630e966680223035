//! Split table summaries and condensed views.
//!
//! Works on a finished table only: totals are read from the last row, so these
//! helpers agree with whatever plan produced the rows.

use serde::{Deserialize, Serialize};

use super::Split;
use crate::time::format_pace;

/// Tolerance when matching a split's distance against a target distance
pub const VIEW_EPSILON: f64 = 0.2;

/// Length of the closing stretch reported by [`finish_summary`]
pub const FINISH_WINDOW: f64 = 10.0;

/// Which rows of the split table to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum SplitView {
    /// Every segment
    PerUnit,
    /// Every fifth unit plus the finish
    PerFive,
    /// 5, 10, half, 30, 35, 40 and the finish
    #[default]
    Key,
}

/// Front half vs back half of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct HalfSplitSummary {
    pub half_distance: f64,
    pub front_seconds: f64,
    pub back_seconds: f64,
    pub front_pace_seconds: f64,
    pub back_pace_seconds: f64,
    pub front_pace: String,
    pub back_pace: String,
}

/// The closing stretch of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct FinishSummary {
    pub distance: f64,
    pub seconds: f64,
    pub pace_seconds: f64,
    pub pace: String,
}

fn totals(splits: &[Split]) -> Option<(f64, f64)> {
    let last = splits.last()?;
    let distance = last.distance_from_start;
    let seconds = last.cumulative_seconds;
    (distance > 0.0 && seconds > 0.0).then_some((distance, seconds))
}

/// First row whose cumulative distance reaches `distance`.
fn first_reaching(splits: &[Split], distance: f64) -> Option<&Split> {
    splits.iter().find(|s| s.distance_from_start >= distance)
}

/// Time and pace for each half of the race.
///
/// The front half ends at the first row that reaches half the distance, so
/// with whole-unit rows the split point is the end of that row.
pub fn half_split_summary(splits: &[Split]) -> Option<HalfSplitSummary> {
    let (total_distance, total_seconds) = totals(splits)?;
    let half_distance = total_distance / 2.0;

    let front_seconds = first_reaching(splits, half_distance)
        .map(|s| s.cumulative_seconds)
        .unwrap_or(total_seconds);
    let back_seconds = (total_seconds - front_seconds).max(0.0);

    let front_pace_seconds = front_seconds / half_distance;
    let back_pace_seconds = back_seconds / half_distance;

    Some(HalfSplitSummary {
        half_distance,
        front_seconds,
        back_seconds,
        front_pace_seconds,
        back_pace_seconds,
        front_pace: format_pace(front_pace_seconds),
        back_pace: format_pace(back_pace_seconds),
    })
}

/// Time and pace over roughly the last [`FINISH_WINDOW`] units, measured from
/// the end of the first row that reaches `total - FINISH_WINDOW`.
pub fn finish_summary(splits: &[Split]) -> Option<FinishSummary> {
    let (total_distance, total_seconds) = totals(splits)?;
    let start_distance = (total_distance - FINISH_WINDOW).max(0.0);

    let start = first_reaching(splits, start_distance)?;
    let distance = total_distance - start.distance_from_start;
    let seconds = (total_seconds - start.cumulative_seconds).max(0.0);

    if distance <= 0.0 || seconds <= 0.0 {
        return None;
    }

    let pace_seconds = seconds / distance;
    Some(FinishSummary {
        distance,
        seconds,
        pace_seconds,
        pace: format_pace(pace_seconds),
    })
}

/// Rows to display for a view mode.
pub fn select_splits(splits: &[Split], view: SplitView) -> Vec<Split> {
    match view {
        SplitView::PerUnit => splits.to_vec(),
        SplitView::PerFive => select_per_five(splits),
        SplitView::Key => select_key(splits),
    }
}

fn select_per_five(splits: &[Split]) -> Vec<Split> {
    let last = splits.len().saturating_sub(1);
    splits
        .iter()
        .enumerate()
        .filter(|(i, s)| {
            if *i == last {
                return true;
            }
            let d = s.distance_from_start;
            let target = (d / 5.0).round() * 5.0;
            (d - target).abs() <= VIEW_EPSILON
        })
        .map(|(_, s)| s.clone())
        .collect()
}

fn select_key(splits: &[Split]) -> Vec<Split> {
    let Some((total_distance, _)) = totals(splits) else {
        return Vec::new();
    };

    let candidates = [5.0, 10.0, total_distance / 2.0, 30.0, 35.0, 40.0];
    let mut targets: Vec<f64> = Vec::new();
    for c in candidates {
        if c <= 0.0 || c > total_distance + VIEW_EPSILON {
            continue;
        }
        if !targets.iter().any(|t| (t - c).abs() <= VIEW_EPSILON) {
            targets.push(c);
        }
    }

    let mut picked: Vec<&Split> = Vec::new();
    for target in targets {
        // Closest row at or (within tolerance) past the target
        let best = splits
            .iter()
            .filter(|s| s.distance_from_start + VIEW_EPSILON >= target)
            .min_by(|a, b| a.distance_from_start.total_cmp(&b.distance_from_start));

        if let Some(best) = best {
            if !picked.iter().any(|p| p.split_number == best.split_number) {
                picked.push(best);
            }
        }
    }

    // The finish is always the final row, even when an earlier row is within
    // tolerance of the total
    if let Some(finish) = splits.last() {
        if !picked.iter().any(|p| p.split_number == finish.split_number) {
            picked.push(finish);
        }
    }

    picked.sort_by_key(|s| s.split_number);
    picked.into_iter().cloned().collect()
}
