//! # Pace Planner
//!
//! Running pace calculator and race split planner.
//!
//! This library provides:
//! - Distance / time / pace reconciliation (give any two, derive the third)
//! - Strategy-based split tables (even, negative, positive, 10-10-10, custom)
//! - Angle-to-percentage mapping for circular drag controls
//! - Pace intensity and banded display colors
//! - A caller-owned planner state with a pure `recompute` step
//!
//! ## Features
//!
//! - **`ffi`** - Enable UniFFI bindings for mobile and web hosts
//!
//! ## Quick Start
//!
//! ```rust
//! use pace_planner::{recompute, handle_event, PlannerConfig, PlannerEvent, PlannerState};
//! use pace_planner::{CalculationMode, SplitStrategy};
//!
//! let config = PlannerConfig::default();
//! let state = PlannerState::default(); // 42.195 km in 3:30:00
//!
//! let derived = recompute(&state, &config);
//! assert_eq!(derived.pace_display, "4'58\"");
//! assert_eq!(derived.splits.len(), 43);
//!
//! let state = handle_event(
//!     state,
//!     PlannerEvent::SetStrategy { strategy: SplitStrategy::Negative },
//!     &config,
//! );
//! let state = handle_event(state, PlannerEvent::SetStrength { seconds: 10.0 }, &config);
//! let derived = recompute(&state, &config);
//! assert!(derived.splits[0].pace_seconds > derived.splits[41].pace_seconds);
//! assert_eq!(state.mode, CalculationMode::Pace);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{OptionExt, PlannerError, Result};

// Unit conversion and preset race distances
pub mod units;
pub use units::{convert_distance, convert_pace, preset_distance, PresetDistance, Unit};

// Clock arithmetic and display formatting
pub mod time;
pub use time::{format_duration, format_pace, format_time, seconds_to_time, time_to_seconds, TimeParts};

// Raw form field parsing
pub mod input;

// Distance / time / pace reconciliation
pub mod reconcile;
pub use reconcile::{
    calculate_distance, calculate_pace, calculate_time, reconcile, CalculationMode, PaceResult,
    ReconcileInputs,
};

// Strategy-based split tables
pub mod splits;
pub use splits::{
    calculate_splits, calculate_strategy_splits, compare_strategies, FineTunePercent, Split,
    SplitStrategy, SplitStrategyOptions, SplitView, StrategyPlan,
};

// Circular drag control mapping
pub mod ring;
pub use ring::{percentage_from_offset, percentage_from_pointer, Point, RingBounds};

// Pace intensity and colors
pub mod intensity;
pub use intensity::{pace_color, pace_intensity, ColorPair};

// Caller-owned planner state and recomputation
pub mod planner;
pub use planner::{
    handle_event, recompute, update, DerivedState, PlannerEvent, PlannerInputs, PlannerState,
};

// FFI bindings for mobile/web hosts
#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
pub(crate) fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("PacePlannerRust"),
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
pub(crate) fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the planner's controls and intensity scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PlannerConfig {
    /// Distance represented by a full turn of the distance ring.
    /// Default: 50.0 (in whatever unit is active)
    pub ring_max_distance: f64,

    /// Hours represented by a full turn of the time ring.
    /// Default: 5.0
    pub ring_max_hours: f64,

    /// Smallest distance a drag can select, so pace stays defined.
    /// Default: 0.001
    pub min_drag_distance: f64,

    /// Pace (seconds per km) that maps to intensity 0.
    /// Default: 420.0 (7'00"/km)
    pub slow_pace_reference: f64,

    /// Pace (seconds per km) that maps to intensity 1.
    /// Default: 180.0 (3'00"/km)
    pub fast_pace_reference: f64,

    /// Upper bound accepted for strategy strength.
    /// Default: 60.0 seconds per unit
    pub max_strength_seconds: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ring_max_distance: 50.0,
            ring_max_hours: 5.0,
            min_drag_distance: 0.001,
            slow_pace_reference: intensity::SLOW_PACE_SECONDS_PER_KM,
            fast_pace_reference: intensity::FAST_PACE_SECONDS_PER_KM,
            max_strength_seconds: 60.0,
        }
    }
}

impl PlannerConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every bound is usable.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f64| -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(PlannerError::ConfigError {
                    message: format!("{} must be positive, got {}", name, value),
                })
            }
        };

        positive("ring_max_distance", self.ring_max_distance)?;
        positive("ring_max_hours", self.ring_max_hours)?;
        positive("min_drag_distance", self.min_drag_distance)?;
        positive("fast_pace_reference", self.fast_pace_reference)?;
        positive("max_strength_seconds", self.max_strength_seconds)?;

        if !(self.slow_pace_reference > self.fast_pace_reference) {
            return Err(PlannerError::ConfigError {
                message: format!(
                    "slow_pace_reference ({}) must be slower than fast_pace_reference ({})",
                    self.slow_pace_reference, self.fast_pace_reference
                ),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
