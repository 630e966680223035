//! End-to-end planner scenarios: a host feeding events and rendering results.

use pace_planner::splits::{half_split_summary, select_splits};
use pace_planner::{
    calculate_splits, calculate_strategy_splits, compare_strategies, percentage_from_pointer,
    update, CalculationMode, FineTunePercent, PlannerConfig, PlannerEvent, PlannerState, Point,
    PresetDistance, RingBounds, SplitStrategy, SplitStrategyOptions, SplitView, Unit,
};

fn run(events: Vec<PlannerEvent>) -> (PlannerState, pace_planner::DerivedState) {
    let config = PlannerConfig::default();
    let mut state = PlannerState::default();
    let mut derived = pace_planner::recompute(&state, &config);
    for event in events {
        let (next, next_derived) = update(state, event, &config);
        state = next;
        derived = next_derived;
    }
    (state, derived)
}

#[test]
fn marathon_even_pace_table() {
    let splits = calculate_splits(42.195, 12600.0 / 42.195, Unit::Km);

    assert_eq!(splits.len(), 43);
    assert_eq!(splits[0].pace_per_split, "4'58\"");
    assert!(splits[41].cumulative_time.starts_with("03:29:0"));
    assert!((splits[41].cumulative_seconds - 12541.77).abs() < 0.01);
    assert_eq!(splits[42].cumulative_time, "03:30:00");
    assert!((splits[42].segment_distance - 0.195).abs() < 1e-9);
}

#[test]
fn half_marathon_preset_in_pace_mode() {
    let (state, derived) = run(vec![
        PlannerEvent::ApplyPreset {
            preset: PresetDistance::HalfMarathon,
        },
        PlannerEvent::SetTime {
            hours: "1".into(),
            minutes: "40".into(),
            seconds: "0".into(),
        },
    ]);

    assert_eq!(state.inputs.distance, "21.098");
    assert_eq!(derived.time_display, "01:40:00");
    assert_eq!(derived.pace_display, "4'44\"");
    assert_eq!(state.inputs.pace_minutes, "4");
    assert_eq!(state.inputs.pace_seconds, "44");
    assert_eq!(derived.splits.len(), 22);
}

#[test]
fn marathon_in_miles() {
    let (state, derived) = run(vec![PlannerEvent::ToggleUnit]);

    assert_eq!(state.unit, Unit::Mi);
    assert_eq!(derived.distance_display, "26.22 mi");
    assert_eq!(derived.pace_display, "8'00\"");
    assert_eq!(derived.splits.len(), 27);
    assert_eq!(derived.splits[26].cumulative_time, "03:30:00");
}

#[test]
fn time_mode_from_pace() {
    let (_, derived) = run(vec![
        PlannerEvent::SetMode {
            mode: CalculationMode::Time,
        },
        PlannerEvent::ApplyPreset {
            preset: PresetDistance::FiveK,
        },
        PlannerEvent::SetPace {
            minutes: "4".into(),
            seconds: "0".into(),
        },
    ]);

    assert_eq!(derived.result.total_seconds, 1200.0);
    assert_eq!(derived.time_display, "00:20:00");
    assert_eq!(derived.splits.len(), 5);
}

#[test]
fn distance_mode_from_time_and_pace() {
    let (_, derived) = run(vec![
        PlannerEvent::SetMode {
            mode: CalculationMode::Distance,
        },
        PlannerEvent::SetTime {
            hours: "0".into(),
            minutes: "45".into(),
            seconds: "0".into(),
        },
        PlannerEvent::SetPace {
            minutes: "4".into(),
            seconds: "30".into(),
        },
    ]);

    assert_eq!(derived.result.distance, 10.0);
    assert_eq!(derived.distance_display, "10.00 km");
    assert_eq!(derived.distance_percentage, 20.0);
}

#[test]
fn garbage_input_keeps_previous_result() {
    let (state, derived) = run(vec![
        PlannerEvent::SetDistance {
            value: "ten".into(),
        },
    ]);

    assert!(!derived.reconciled);
    assert_eq!(state.last_result.total_seconds, 12600.0);
    assert_eq!(derived.time_display, "03:30:00");
    assert_eq!(derived.splits.len(), 43);
}

#[test]
fn ring_drag_sets_distance() {
    let bounds = RingBounds {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 200.0,
    };
    // Pointer at three o'clock
    let percentage = percentage_from_pointer(Point::new(200.0, 100.0), &bounds);
    assert!((percentage - 25.0).abs() < 1e-9);

    let (state, derived) = run(vec![PlannerEvent::DragDistance { percentage }]);
    assert_eq!(state.inputs.distance, "12.500");
    assert!((derived.distance_percentage - 25.0).abs() < 1e-9);
}

#[test]
fn ring_drag_sets_time() {
    let (state, derived) = run(vec![PlannerEvent::DragTime { percentage: 75.0 }]);
    assert_eq!(state.inputs.hours, "3");
    assert_eq!(state.inputs.minutes, "45");
    assert_eq!(derived.time_display, "03:45:00");
    assert_eq!(derived.time_percentage, 75.0);
}

#[test]
fn negative_split_ten_k() {
    let options = SplitStrategyOptions {
        strategy: SplitStrategy::Negative,
        unit: Unit::Km,
        strength_seconds: 10.0,
        fine_tune: None,
    };
    let splits = calculate_strategy_splits(10.0, 3000.0, &options);

    assert_eq!(splits.len(), 10);
    assert!(splits.windows(2).all(|w| w[0].pace_seconds > w[1].pace_seconds));
    assert_eq!(splits[9].cumulative_time, "00:50:00");

    let summary = half_split_summary(&splits).unwrap();
    assert!(summary.front_seconds > summary.back_seconds);
    assert!((summary.front_seconds + summary.back_seconds - 3000.0).abs() < 1e-6);
}

#[test]
fn ten_ten_ten_marathon_zones() {
    let (_, derived) = run(vec![
        PlannerEvent::SetStrategy {
            strategy: SplitStrategy::TenTenTen,
        },
        PlannerEvent::SetStrength { seconds: 15.0 },
    ]);

    let splits = &derived.splits;
    let opening = splits[0].pace_seconds;
    let middle = splits[20].pace_seconds;
    let closing = splits[40].pace_seconds;
    assert!(opening > middle);
    assert!(middle > closing);
    assert_eq!(splits[42].cumulative_time, "03:30:00");
}

#[test]
fn fine_tune_speeds_up_after_30k() {
    let (_, derived) = run(vec![
        PlannerEvent::SetStrategy {
            strategy: SplitStrategy::Custom,
        },
        PlannerEvent::SetFineTune {
            fine_tune: FineTunePercent {
                after_30k: Some(-5.0),
                ..FineTunePercent::default()
            },
        },
    ]);

    let splits = &derived.splits;
    // Strength 0 keeps the base curve flat, so only the checkpoint shapes it
    assert_eq!(splits[0].pace_seconds, splits[29].pace_seconds);
    assert!(splits[30].pace_seconds < splits[29].pace_seconds);
    assert!((splits[30].multiplier - 0.95).abs() < 1e-12);
    assert_eq!(splits[42].cumulative_time, "03:30:00");
}

#[test]
fn key_view_for_marathon() {
    let (_, derived) = run(vec![PlannerEvent::SetSplitView {
        view: SplitView::Key,
    }]);
    let numbers: Vec<u32> = derived.visible_splits.iter().map(|s| s.split_number).collect();
    assert_eq!(numbers, vec![5, 10, 21, 30, 35, 40, 43]);
    assert_eq!(
        select_splits(&derived.splits, SplitView::PerUnit).len(),
        derived.splits.len()
    );
}

#[test]
fn every_strategy_finishes_on_time() {
    let options = SplitStrategyOptions {
        strategy: SplitStrategy::Even,
        unit: Unit::Km,
        strength_seconds: 20.0,
        fine_tune: None,
    };
    let plans = compare_strategies(21.0975, 6000.0, &options);

    assert_eq!(plans.len(), 5);
    for plan in plans {
        let last = plan.splits.last().unwrap();
        assert_eq!(last.cumulative_time, "01:40:00", "{:?}", plan.strategy);
        let total: f64 = plan.splits.iter().map(|s| s.segment_seconds).sum();
        assert!((total - 6000.0).abs() < 1e-6, "{:?}", plan.strategy);
    }
}

#[test]
fn fast_pace_is_hot() {
    let (_, derived) = run(vec![PlannerEvent::SetTime {
        hours: "2".into(),
        minutes: "6".into(),
        seconds: "35".into(),
    }]);
    // 7595 s over 42.195 km is ~3'00"/km
    assert!(derived.intensity > 0.99);
    assert_eq!(derived.colors.from, "#f97316");
    assert_eq!(derived.colors.to, "#ef4444");
}

#[test]
fn host_supplied_config_changes_ring_scale() {
    let config = PlannerConfig::from_json(r#"{"ring_max_distance": 100.0, "ring_max_hours": 7.0}"#)
        .unwrap();
    let (state, derived) = update(
        PlannerState::default(),
        PlannerEvent::DragDistance { percentage: 50.0 },
        &config,
    );
    assert_eq!(state.inputs.distance, "50.000");
    assert_eq!(derived.distance_percentage, 50.0);
    assert_eq!(derived.time_percentage, 50.0);
}

#[test]
fn state_round_trips_through_json() {
    let (state, _) = run(vec![
        PlannerEvent::SetStrategy {
            strategy: SplitStrategy::SlightPositive,
        },
        PlannerEvent::ToggleUnit,
    ]);
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"slightPositive\""));
    assert!(json.contains("\"mi\""));
    let back: PlannerState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.unit, state.unit);
    assert_eq!(back.strategy, state.strategy);
    assert_eq!(back.inputs, state.inputs);
    assert!((back.last_result.distance - state.last_result.distance).abs() < 1e-9);
}
