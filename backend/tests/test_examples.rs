//! Canned example runs: every preset executes a full 8-hour day anchored at
//! 08:00 and produces a consistent, bounded summary.

use yard_simulator_core_rs::orchestrator::{run_example, Example, PresetScenario};

const ANCHOR_0800: u64 = 480;
const HOURS: u64 = 8;

// ============================================================================
// All presets run to completion
// ============================================================================

#[test]
fn test_all_examples_complete_and_conserve() {
    for example in Example::ALL {
        let run = run_example(example, ANCHOR_0800, HOURS).unwrap();

        // 8 hours of 5-minute ticks
        assert_eq!(run.summary.tick, 96, "{:?}", example);
        assert_eq!(run.summary.minute, ANCHOR_0800 + HOURS * 60);

        // Seeds (12 + 8 + 20) plus per-tick intake, all accounted for
        let per_tick = match example.scenario() {
            PresetScenario::PortSurge => 5,
            _ => 3,
        };
        assert_eq!(run.summary.yard.total(), 40 + per_tick * 96, "{:?}", example);

        assert!(
            run.notable_events.len() <= 20,
            "{:?} produced {} notable events",
            example,
            run.notable_events.len()
        );
        assert!(run.notable_events.iter().all(|e| e.is_notable()));
    }
}

#[test]
fn test_example_strategy_tags() {
    let baseline = run_example(Example::BaselineBaseline, ANCHOR_0800, HOURS).unwrap();
    assert_eq!(baseline.summary.strategy, "baseline");

    let urgency = run_example(Example::BaselineUrgencyAware, ANCHOR_0800, HOURS).unwrap();
    assert_eq!(urgency.summary.strategy, "urgency-aware");
}

// ============================================================================
// Scenario-specific outcomes
// ============================================================================

/// 08:00 anchor, 8-hour run: only the 12:00 train departs inside the run, so
/// containers do move out of the yard.
#[test]
fn test_baseline_day_loads_containers() {
    let run = run_example(Example::BaselineBaseline, ANCHOR_0800, HOURS).unwrap();
    assert!(run.summary.yard.loaded_departed > 0);
    assert_eq!(run.summary.yard.total_cancelled_departures, 0);
}

/// The urgency-aware strategy never moves fewer containers onto trains than
/// the baseline under identical conditions.
#[test]
fn test_urgency_aware_at_least_matches_baseline() {
    let baseline = run_example(Example::BaselineBaseline, ANCHOR_0800, HOURS).unwrap();
    let urgency = run_example(Example::BaselineUrgencyAware, ANCHOR_0800, HOURS).unwrap();
    assert!(urgency.summary.yard.loaded_departed >= baseline.summary.yard.loaded_departed);
}

/// The surge pushes more containers in than baseline; the backlog shows up
/// somewhere upstream of loading.
#[test]
fn test_port_surge_builds_backlog() {
    let baseline = run_example(Example::BaselineBaseline, ANCHOR_0800, HOURS).unwrap();
    let surge = run_example(Example::PortSurgeBaseline, ANCHOR_0800, HOURS).unwrap();
    assert!(surge.summary.yard.arrival_buffer > baseline.summary.yard.arrival_buffer);
}

/// The crane outage starts an hour in and reverts three hours later, inside
/// the 8-hour run: one start and one end per affected gate.
#[test]
fn test_crane_outage_windows_open_and_close() {
    let run = run_example(Example::CraneOutageBaseline, ANCHOR_0800, HOURS).unwrap();
    let starts = run
        .notable_events
        .iter()
        .filter(|e| e.event_type() == "DisruptionStart")
        .count();
    let ends = run
        .notable_events
        .iter()
        .filter(|e| e.event_type() == "DisruptionEnd")
        .count();
    assert_eq!(starts, 2);
    assert_eq!(ends, 2);
}

/// With every train cancelled, nothing ever loads and the 12:00 train is
/// counted as a cancelled departure when its minute passes.
#[test]
fn test_train_cancelled_day_loads_nothing() {
    let run = run_example(Example::TrainCancelledBaseline, ANCHOR_0800, HOURS).unwrap();
    assert_eq!(run.summary.yard.loaded_departed, 0);
    assert_eq!(run.summary.yard.missed_connection, 0);
    assert_eq!(run.summary.yard.total_cancelled_departures, 1);
    assert!(run.summary.yard.staged >= 20);
}

// ============================================================================
// Serialization of run summaries
// ============================================================================

#[test]
fn test_example_run_serializes_to_json() {
    let run = run_example(Example::BaselineBaseline, ANCHOR_0800, HOURS).unwrap();
    let json = serde_json::to_value(&run).unwrap();
    assert_eq!(json["summary"]["tick"], 96);
    assert!(json["notable_events"].is_array());
    assert_eq!(json["example"], "BaselineBaseline");
}
