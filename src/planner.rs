//! # Planner State
//!
//! Caller-owned calculator state and the pure recomputation step behind it.
//!
//! The host keeps a [`PlannerState`], feeds user input through
//! [`handle_event`], and renders the [`DerivedState`] that [`recompute`]
//! produces. [`PlannerState::commit`] folds the derived result back in so the
//! next pass can fall back to it. Nothing here is global: every transition
//! takes a state by value and returns the next one.
//!
//! ## Example
//! ```rust
//! use pace_planner::planner::{update, PlannerEvent, PlannerState};
//! use pace_planner::{CalculationMode, PlannerConfig};
//!
//! let config = PlannerConfig::default();
//! let state = PlannerState::default();
//!
//! // Switch to time mode and type a 4'30" pace
//! let (state, _) = update(state, PlannerEvent::SetMode { mode: CalculationMode::Time }, &config);
//! let (state, derived) = update(
//!     state,
//!     PlannerEvent::SetPace { minutes: "4".into(), seconds: "30".into() },
//!     &config,
//! );
//! assert_eq!(derived.pace_display, "4'30\"");
//! assert_eq!(derived.time_display, "03:09:52");
//! assert_eq!(state.inputs.pace_minutes, "4");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::input::{parse_float_or_zero, parse_int_or_zero};
use crate::intensity::{pace_color, pace_intensity_between, ColorPair};
use crate::reconcile::{reconcile, CalculationMode, PaceResult, ReconcileInputs};
use crate::ring::{distance_from_percentage, ring_percentage, seconds_from_percentage};
use crate::splits::{
    calculate_strategy_splits, finish_summary, half_split_summary, select_splits,
    FineTunePercent, FinishSummary, HalfSplitSummary, Split, SplitStrategy, SplitStrategyOptions,
    SplitView,
};
use crate::time::{display_seconds, format_distance, format_duration, format_pace, seconds_to_time};
use crate::units::{convert_distance, convert_pace, preset_distance, PresetDistance, Unit, MARATHON_KM};
use crate::PlannerConfig;

/// Raw text of every input field, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PlannerInputs {
    pub distance: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub pace_minutes: String,
    pub pace_seconds: String,
}

impl Default for PlannerInputs {
    fn default() -> Self {
        Self {
            distance: "42.195".to_string(),
            hours: "3".to_string(),
            minutes: "30".to_string(),
            seconds: "0".to_string(),
            pace_minutes: "5".to_string(),
            pace_seconds: "0".to_string(),
        }
    }
}

impl PlannerInputs {
    /// Leniently parse every field.
    pub fn parse(&self) -> ReconcileInputs {
        ReconcileInputs {
            distance: parse_float_or_zero(&self.distance),
            hours: parse_int_or_zero(&self.hours),
            minutes: parse_int_or_zero(&self.minutes),
            seconds: parse_int_or_zero(&self.seconds),
            pace_seconds: parse_int_or_zero(&self.pace_minutes) * 60.0
                + parse_int_or_zero(&self.pace_seconds),
        }
    }
}

/// Everything the calculator remembers between events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PlannerState {
    pub mode: CalculationMode,
    pub unit: Unit,
    pub inputs: PlannerInputs,
    pub strategy: SplitStrategy,
    /// Strategy strength in seconds per unit
    pub strength_seconds: f64,
    pub fine_tune: FineTunePercent,
    pub split_view: SplitView,
    /// Last successful reconciliation, used while the inputs are incomplete
    pub last_result: PaceResult,
}

impl Default for PlannerState {
    /// A 3:30:00 marathon in pace mode.
    fn default() -> Self {
        Self {
            mode: CalculationMode::Pace,
            unit: Unit::Km,
            inputs: PlannerInputs::default(),
            strategy: SplitStrategy::Even,
            strength_seconds: 0.0,
            fine_tune: FineTunePercent::default(),
            split_view: SplitView::default(),
            last_result: PaceResult {
                distance: MARATHON_KM,
                total_seconds: 12600.0,
                pace_seconds_per_unit: 12600.0 / MARATHON_KM,
            },
        }
    }
}

impl PlannerState {
    /// Strategy options for the current state.
    pub fn split_options(&self) -> SplitStrategyOptions {
        SplitStrategyOptions {
            strategy: self.strategy,
            unit: self.unit,
            strength_seconds: self.strength_seconds,
            fine_tune: (!self.fine_tune.is_empty()).then_some(self.fine_tune),
        }
    }

    /// Store a recomputation: the result becomes the fallback and, when the
    /// inputs reconciled, the pace fields are rewritten from the derived pace.
    pub fn commit(mut self, derived: &DerivedState) -> Self {
        if derived.reconciled {
            self.last_result = derived.result;
            self.inputs.pace_minutes = derived.pace_minutes.clone();
            self.inputs.pace_seconds = derived.pace_seconds.clone();
        }
        self
    }
}

/// User input the planner reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum PlannerEvent {
    SetMode { mode: CalculationMode },
    /// Switch km/mi, converting the typed distance
    ToggleUnit,
    SetDistance { value: String },
    SetTime { hours: String, minutes: String, seconds: String },
    SetPace { minutes: String, seconds: String },
    ApplyPreset { preset: PresetDistance },
    /// Drag on the distance ring, 0-100
    DragDistance { percentage: f64 },
    /// Drag on the time ring, 0-100
    DragTime { percentage: f64 },
    SetStrategy { strategy: SplitStrategy },
    SetStrength { seconds: f64 },
    SetFineTune { fine_tune: FineTunePercent },
    SetSplitView { view: SplitView },
}

/// Everything a host renders after one recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct DerivedState {
    pub result: PaceResult,
    /// False when the inputs were incomplete and `result` is the fallback
    pub reconciled: bool,
    pub distance_display: String,
    pub time_display: String,
    pub pace_display: String,
    pub distance_percentage: f64,
    pub time_percentage: f64,
    pub intensity: f64,
    pub colors: ColorPair,
    pub splits: Vec<Split>,
    /// Rows selected by the state's split view
    pub visible_splits: Vec<Split>,
    pub half_summary: Option<HalfSplitSummary>,
    pub finish_summary: Option<FinishSummary>,
    /// Pace inputs rewritten from the derived pace
    pub pace_minutes: String,
    pub pace_seconds: String,
}

/// Distance as written back into the input field.
fn distance_field(distance: f64) -> String {
    format!("{:.3}", distance)
}

fn clamp_strength(seconds: f64, max: f64) -> f64 {
    if seconds.is_nan() {
        return 0.0;
    }
    seconds.clamp(0.0, max.max(0.0))
}

/// Apply one input event.
///
/// Drags on the ring of the quantity being derived are ignored, since that
/// ring is output-only in the current mode.
pub fn handle_event(state: PlannerState, event: PlannerEvent, config: &PlannerConfig) -> PlannerState {
    let mut state = state;

    match event {
        PlannerEvent::SetMode { mode } => state.mode = mode,
        PlannerEvent::ToggleUnit => {
            let next = state.unit.toggled();
            let current = parse_float_or_zero(&state.inputs.distance);
            state.inputs.distance = distance_field(convert_distance(current, state.unit, next));
            state.unit = next;
        }
        PlannerEvent::SetDistance { value } => state.inputs.distance = value,
        PlannerEvent::SetTime {
            hours,
            minutes,
            seconds,
        } => {
            state.inputs.hours = hours;
            state.inputs.minutes = minutes;
            state.inputs.seconds = seconds;
        }
        PlannerEvent::SetPace { minutes, seconds } => {
            state.inputs.pace_minutes = minutes;
            state.inputs.pace_seconds = seconds;
        }
        PlannerEvent::ApplyPreset { preset } => {
            state.inputs.distance = distance_field(preset_distance(preset, state.unit));
        }
        PlannerEvent::DragDistance { percentage } => {
            if state.mode == CalculationMode::Distance {
                debug!("[Planner] Ignoring distance drag in distance mode");
            } else {
                let distance = distance_from_percentage(percentage, config);
                state.inputs.distance = distance_field(distance);
            }
        }
        PlannerEvent::DragTime { percentage } => {
            if state.mode == CalculationMode::Time {
                debug!("[Planner] Ignoring time drag in time mode");
            } else {
                let parts = seconds_to_time(seconds_from_percentage(percentage, config));
                state.inputs.hours = parts.hours.to_string();
                state.inputs.minutes = parts.minutes.to_string();
                state.inputs.seconds = parts.seconds.to_string();
            }
        }
        PlannerEvent::SetStrategy { strategy } => state.strategy = strategy,
        PlannerEvent::SetStrength { seconds } => {
            state.strength_seconds = clamp_strength(seconds, config.max_strength_seconds);
        }
        PlannerEvent::SetFineTune { fine_tune } => state.fine_tune = fine_tune,
        PlannerEvent::SetSplitView { view } => state.split_view = view,
    }

    state
}

/// Derive every displayed value from the state.
pub fn recompute(state: &PlannerState, config: &PlannerConfig) -> DerivedState {
    let parsed = state.inputs.parse();
    let reconciled = reconcile(state.mode, &parsed);
    let result = reconciled.unwrap_or(state.last_result);

    if reconciled.is_none() {
        debug!(
            "[Planner] Incomplete {:?}-mode inputs, keeping last result",
            state.mode
        );
    }

    let splits = calculate_strategy_splits(
        result.distance,
        result.total_seconds,
        &state.split_options(),
    );
    let visible_splits = select_splits(&splits, state.split_view);

    let pace_per_km = convert_pace(result.pace_seconds_per_unit, state.unit, Unit::Km);
    let intensity = pace_intensity_between(
        pace_per_km,
        config.slow_pace_reference,
        config.fast_pace_reference,
    );

    let pace = display_seconds(result.pace_seconds_per_unit);
    let pace_minutes = (pace / 60.0).floor();
    let pace_seconds = (pace % 60.0).floor();

    debug!(
        "[Planner] {:?} mode: {:.3} {} in {:.0}s, pace {:.1}s/{}, {} splits",
        state.mode,
        result.distance,
        state.unit,
        result.total_seconds,
        result.pace_seconds_per_unit,
        state.unit,
        splits.len()
    );

    DerivedState {
        result,
        reconciled: reconciled.is_some(),
        distance_display: format_distance(result.distance, state.unit),
        time_display: format_duration(result.total_seconds),
        pace_display: format_pace(result.pace_seconds_per_unit),
        distance_percentage: ring_percentage(result.distance, config.ring_max_distance),
        time_percentage: ring_percentage(result.total_seconds / 3600.0, config.ring_max_hours),
        intensity,
        colors: pace_color(intensity),
        half_summary: half_split_summary(&splits),
        finish_summary: finish_summary(&splits),
        visible_splits,
        splits,
        pace_minutes: format!("{}", pace_minutes as u64),
        pace_seconds: format!("{}", pace_seconds as u64),
    }
}

/// Apply an event, recompute, and commit in one step.
pub fn update(
    state: PlannerState,
    event: PlannerEvent,
    config: &PlannerConfig,
) -> (PlannerState, DerivedState) {
    let state = handle_event(state, event, config);
    let derived = recompute(&state, config);
    (state.commit(&derived), derived)
}
