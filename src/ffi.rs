//! FFI bindings for mobile and web hosts.
//!
//! This module provides the UniFFI bindings that expose the planner to
//! Kotlin, Swift and JavaScript. Functions that would clash with the Rust API
//! are prefixed with `ffi_`.

use crate::intensity::pace_intensity_for_unit;
use crate::planner::{handle_event, recompute, update, DerivedState, PlannerEvent, PlannerState};
use crate::splits::{calculate_strategy_splits, compare_strategies, Split, SplitStrategyOptions};
use crate::{init_logging, ColorPair, PlannerConfig, Unit};
use log::{info, warn};

// ============================================================================
// Planner State
// ============================================================================

/// State and derived values after one event, as returned to the host.
#[derive(Debug, Clone, uniffi::Record)]
pub struct PlannerUpdate {
    pub state: PlannerState,
    pub derived: DerivedState,
}

/// Default planner configuration.
#[uniffi::export]
pub fn default_planner_config() -> PlannerConfig {
    init_logging();
    info!("[PacePlannerRust] default_planner_config called - Rust is active!");
    PlannerConfig::default()
}

/// Load a planner configuration from JSON, falling back to the defaults when
/// the JSON is malformed or out of range.
#[uniffi::export]
pub fn ffi_load_planner_config(json: String) -> PlannerConfig {
    init_logging();
    match PlannerConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            warn!("[PacePlannerRust] Rejected planner config: {}", e);
            PlannerConfig::default()
        }
    }
}

/// Initial planner state (3:30:00 marathon, pace mode).
#[uniffi::export]
pub fn default_planner_state() -> PlannerState {
    init_logging();
    PlannerState::default()
}

/// Apply one input event without recomputing.
#[uniffi::export]
pub fn ffi_handle_event(
    state: PlannerState,
    event: PlannerEvent,
    config: PlannerConfig,
) -> PlannerState {
    init_logging();
    info!("[PacePlannerRust] handle_event: {:?}", event);
    handle_event(state, event, &config)
}

/// Derive every displayed value from a state.
#[uniffi::export]
pub fn ffi_recompute(state: PlannerState, config: PlannerConfig) -> DerivedState {
    init_logging();
    let derived = recompute(&state, &config);
    info!(
        "[PacePlannerRust] recompute: {} / {} / {}, {} splits",
        derived.distance_display,
        derived.time_display,
        derived.pace_display,
        derived.splits.len()
    );
    derived
}

/// Apply an event, recompute and commit.
#[uniffi::export]
pub fn ffi_update(state: PlannerState, event: PlannerEvent, config: PlannerConfig) -> PlannerUpdate {
    init_logging();
    info!("[PacePlannerRust] update: {:?}", event);
    let (state, derived) = update(state, event, &config);
    PlannerUpdate { state, derived }
}

// ============================================================================
// Split Tables
// ============================================================================

/// Strategy split table.
#[uniffi::export]
pub fn ffi_calculate_strategy_splits(
    total_distance: f64,
    total_time_seconds: f64,
    options: SplitStrategyOptions,
) -> Vec<Split> {
    init_logging();
    info!(
        "[PacePlannerRust] calculate_strategy_splits: {:.3} {} in {:.0}s, {:?}",
        total_distance, options.unit, total_time_seconds, options.strategy
    );
    calculate_strategy_splits(total_distance, total_time_seconds, &options)
}

/// Strategy split table as JSON.
///
/// # Arguments
/// * `total_distance` - Race distance in the options' unit
/// * `total_time_seconds` - Target finish time
/// * `options_json` - JSON `SplitStrategyOptions`, e.g.
///   `{"strategy":"negative","unit":"km","strengthSeconds":10}`
///
/// # Returns
/// JSON array of splits, or `[]` when the options cannot be read
#[uniffi::export]
pub fn ffi_strategy_splits_json(
    total_distance: f64,
    total_time_seconds: f64,
    options_json: String,
) -> String {
    init_logging();

    let options: SplitStrategyOptions = match serde_json::from_str(&options_json) {
        Ok(options) => options,
        Err(e) => {
            warn!("[PacePlannerRust] Invalid split options JSON: {}", e);
            return "[]".to_string();
        }
    };

    let splits = calculate_strategy_splits(total_distance, total_time_seconds, &options);
    info!(
        "[PacePlannerRust] strategy_splits_json: {:?}, {} splits",
        options.strategy,
        splits.len()
    );

    serde_json::to_string(&splits).unwrap_or_else(|_| "[]".to_string())
}

/// One plan per strategy, as JSON, sharing strength and fine-tuning.
#[uniffi::export]
pub fn ffi_compare_strategies_json(
    total_distance: f64,
    total_time_seconds: f64,
    options: SplitStrategyOptions,
) -> String {
    init_logging();
    let plans = compare_strategies(total_distance, total_time_seconds, &options);
    info!("[PacePlannerRust] compare_strategies: {} plans", plans.len());
    serde_json::to_string(&plans).unwrap_or_else(|_| "[]".to_string())
}

// ============================================================================
// Ring and Intensity
// ============================================================================

/// Ring percentage (0-100) for a pointer offset from the ring center.
#[uniffi::export]
pub fn ffi_percentage_from_offset(dx: f64, dy: f64) -> f64 {
    crate::ring::percentage_from_offset(dx, dy)
}

/// Ring percentage (0-100) for a pointer over the ring's bounding box.
#[uniffi::export]
pub fn ffi_percentage_from_pointer(pointer: crate::Point, bounds: crate::RingBounds) -> f64 {
    crate::ring::percentage_from_pointer(pointer, &bounds)
}

/// Intensity (0-1) for a pace in seconds per `unit`.
#[uniffi::export]
pub fn ffi_pace_intensity(pace_seconds_per_unit: f64, unit: Unit) -> f64 {
    pace_intensity_for_unit(pace_seconds_per_unit, unit)
}

/// Display gradient for an intensity.
#[uniffi::export]
pub fn ffi_pace_color(intensity: f64) -> ColorPair {
    crate::intensity::pace_color(intensity)
}
