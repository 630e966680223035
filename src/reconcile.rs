//! Distance / time / pace reconciliation.
//!
//! Exactly one quantity is derived at a time, chosen by [`CalculationMode`].
//! Non-positive divisors never raise: the derived value is 0 instead.
//!
//! ## Example
//! ```rust
//! use pace_planner::reconcile::{calculate_pace, calculate_distance, calculate_time};
//!
//! let pace = calculate_pace(10.0, 0.0, 50.0, 0.0);
//! assert_eq!(pace, 300.0);
//! assert_eq!(calculate_time(10.0, pace), 3000.0);
//! assert_eq!(calculate_distance(0.0, 50.0, 0.0, pace), 10.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::time::time_to_seconds;

/// Which quantity is output-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum CalculationMode {
    /// Distance and time in, pace out
    #[default]
    Pace,
    /// Distance and pace in, time out
    Time,
    /// Time and pace in, distance out
    Distance,
}

/// Reconciled distance, time and pace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PaceResult {
    /// Distance in the active unit
    pub distance: f64,
    /// Total time in seconds
    pub total_seconds: f64,
    /// Pace in seconds per active unit
    pub pace_seconds_per_unit: f64,
}

/// Parsed numeric inputs for one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ReconcileInputs {
    pub distance: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    /// Pace in seconds per unit (pace minutes * 60 + pace seconds)
    pub pace_seconds: f64,
}

/// Pace in seconds per unit. 0 when `distance <= 0`.
pub fn calculate_pace(distance: f64, hours: f64, minutes: f64, seconds: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }
    time_to_seconds(hours, minutes, seconds) / distance
}

/// Total time in seconds. The caller guarantees `distance >= 0`.
pub fn calculate_time(distance: f64, pace_seconds_per_unit: f64) -> f64 {
    distance * pace_seconds_per_unit
}

/// Distance covered. 0 when `pace_seconds_per_unit <= 0`.
pub fn calculate_distance(
    hours: f64,
    minutes: f64,
    seconds: f64,
    pace_seconds_per_unit: f64,
) -> f64 {
    if pace_seconds_per_unit <= 0.0 {
        return 0.0;
    }
    time_to_seconds(hours, minutes, seconds) / pace_seconds_per_unit
}

/// Derive the quantity selected by `mode` from the other two.
///
/// Returns `None` when the free inputs cannot produce a meaningful result
/// (pace mode needs a distance, time mode needs distance and pace, distance
/// mode needs a pace). The caller then keeps its previous result.
pub fn reconcile(mode: CalculationMode, inputs: &ReconcileInputs) -> Option<PaceResult> {
    let total_seconds = time_to_seconds(inputs.hours, inputs.minutes, inputs.seconds);

    match mode {
        CalculationMode::Pace if inputs.distance > 0.0 => Some(PaceResult {
            distance: inputs.distance,
            total_seconds,
            pace_seconds_per_unit: calculate_pace(
                inputs.distance,
                inputs.hours,
                inputs.minutes,
                inputs.seconds,
            ),
        }),
        CalculationMode::Time if inputs.distance > 0.0 && inputs.pace_seconds > 0.0 => {
            Some(PaceResult {
                distance: inputs.distance,
                total_seconds: calculate_time(inputs.distance, inputs.pace_seconds),
                pace_seconds_per_unit: inputs.pace_seconds,
            })
        }
        CalculationMode::Distance if inputs.pace_seconds > 0.0 => Some(PaceResult {
            distance: calculate_distance(
                inputs.hours,
                inputs.minutes,
                inputs.seconds,
                inputs.pace_seconds,
            ),
            total_seconds,
            pace_seconds_per_unit: inputs.pace_seconds,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marathon_inputs() -> ReconcileInputs {
        ReconcileInputs {
            distance: 42.195,
            hours: 3.0,
            minutes: 30.0,
            seconds: 0.0,
            pace_seconds: 300.0,
        }
    }

    #[test]
    fn test_calculate_pace() {
        let pace = calculate_pace(42.195, 3.0, 30.0, 0.0);
        assert!((pace - 298.613).abs() < 0.001);
        assert_eq!(calculate_pace(0.0, 1.0, 0.0, 0.0), 0.0);
        assert_eq!(calculate_pace(-1.0, 1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_calculate_distance_zero_pace() {
        assert_eq!(calculate_distance(1.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(calculate_distance(1.0, 0.0, 0.0, -10.0), 0.0);
        assert_eq!(calculate_distance(1.0, 0.0, 0.0, 360.0), 10.0);
    }

    #[test]
    fn test_reconcile_pace_mode() {
        let result = reconcile(CalculationMode::Pace, &marathon_inputs()).unwrap();
        assert_eq!(result.distance, 42.195);
        assert_eq!(result.total_seconds, 12600.0);
        assert!((result.pace_seconds_per_unit * result.distance - 12600.0).abs() < 1e-9);
    }

    #[test]
    fn test_reconcile_time_mode() {
        let result = reconcile(CalculationMode::Time, &marathon_inputs()).unwrap();
        assert!((result.total_seconds - 12658.5).abs() < 1e-9);
        assert_eq!(result.pace_seconds_per_unit, 300.0);
    }

    #[test]
    fn test_reconcile_distance_mode() {
        let result = reconcile(CalculationMode::Distance, &marathon_inputs()).unwrap();
        assert!((result.distance - 42.0).abs() < 1e-9);
        assert_eq!(result.total_seconds, 12600.0);
    }

    #[test]
    fn test_reconcile_degenerate_inputs() {
        let mut inputs = marathon_inputs();
        inputs.distance = 0.0;
        assert!(reconcile(CalculationMode::Pace, &inputs).is_none());
        assert!(reconcile(CalculationMode::Time, &inputs).is_none());

        let mut inputs = marathon_inputs();
        inputs.pace_seconds = 0.0;
        assert!(reconcile(CalculationMode::Time, &inputs).is_none());
        assert!(reconcile(CalculationMode::Distance, &inputs).is_none());
        // Pace mode ignores the pace input entirely
        assert!(reconcile(CalculationMode::Pace, &inputs).is_some());
    }
}
