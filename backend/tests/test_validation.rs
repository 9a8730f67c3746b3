//! Configuration validation tests: every malformed-input class is rejected
//! with `ConfigurationError`, and a failed reset leaves prior state intact.

use yard_simulator_core_rs::arrivals::{ArrivalProfile, ArrivalStep};
use yard_simulator_core_rs::disruption::{DisruptionEffect, DisruptionSpec};
use yard_simulator_core_rs::models::CheckpointId;
use yard_simulator_core_rs::orchestrator::{
    CheckpointCapacities, DepartureConfig, EngineConfig, ScenarioConfig, SeedCounts,
    SimulationError, StrategyConfig, YardEngine,
};

fn valid_config() -> EngineConfig {
    EngineConfig {
        anchor_minute: 0,
        tick_minutes: 5,
        scenario: ScenarioConfig {
            arrival_profile: ArrivalProfile::Constant { per_tick: 3 },
            departures: vec![DepartureConfig {
                id: "T1".to_string(),
                scheduled_minute: 300,
                capacity: 25,
            }],
            disruptions: vec![],
            checkpoint_capacities: CheckpointCapacities::uniform(5),
            seed_counts: SeedCounts::default(),
        },
        strategy: StrategyConfig::Baseline,
    }
}

fn assert_rejected(config: EngineConfig) {
    match YardEngine::new(config) {
        Err(SimulationError::ConfigurationError(_)) => {}
        Err(other) => panic!("expected ConfigurationError, got {:?}", other),
        Ok(_) => panic!("expected rejection, config was accepted"),
    }
}

// ============================================================================
// Rejected configurations
// ============================================================================

#[test]
fn test_zero_tick_length_rejected() {
    let mut config = valid_config();
    config.tick_minutes = 0;
    assert_rejected(config);
}

#[test]
fn test_urgency_boost_must_exceed_one() {
    for boost in [1.0, 0.5, 0.0, -2.0, f64::NAN, f64::INFINITY] {
        let mut config = valid_config();
        config.strategy = StrategyConfig::UrgencyAware { boost };
        assert_rejected(config);
    }
}

#[test]
fn test_unordered_arrival_profile_rejected() {
    let mut config = valid_config();
    config.scenario.arrival_profile = ArrivalProfile::Piecewise {
        steps: vec![
            ArrivalStep {
                from_minute: 200,
                per_tick: 5,
            },
            ArrivalStep {
                from_minute: 100,
                per_tick: 3,
            },
        ],
    };
    assert_rejected(config);
}

#[test]
fn test_duplicate_departure_ids_rejected() {
    let mut config = valid_config();
    config.scenario.departures.push(DepartureConfig {
        id: "T1".to_string(),
        scheduled_minute: 600,
        capacity: 25,
    });
    assert_rejected(config);
}

#[test]
fn test_departure_at_or_before_anchor_rejected() {
    let mut config = valid_config();
    config.anchor_minute = 300;
    assert_rejected(config);
}

#[test]
fn test_outage_multiplier_bounds() {
    for multiplier in [-0.5, f64::NAN, f64::INFINITY] {
        let mut config = valid_config();
        config.scenario.disruptions = vec![DisruptionSpec {
            effect: DisruptionEffect::CraneOutage {
                checkpoint: CheckpointId::PlacementApproval,
                multiplier,
            },
            start_minute: 10,
            end_minute: 50,
        }];
        assert_rejected(config);
    }
}

#[test]
fn test_empty_outage_window_rejected() {
    let mut config = valid_config();
    config.scenario.disruptions = vec![DisruptionSpec {
        effect: DisruptionEffect::CraneOutage {
            checkpoint: CheckpointId::PlacementApproval,
            multiplier: 0.5,
        },
        start_minute: 50,
        end_minute: 50,
    }];
    assert_rejected(config);
}

#[test]
fn test_overlapping_outages_on_same_gate_rejected() {
    let outage = |start, end| DisruptionSpec {
        effect: DisruptionEffect::CraneOutage {
            checkpoint: CheckpointId::PlacementApproval,
            multiplier: 0.5,
        },
        start_minute: start,
        end_minute: end,
    };
    let mut config = valid_config();
    config.scenario.disruptions = vec![outage(10, 60), outage(40, 90)];
    assert_rejected(config);
}

/// The same windows on different gates are fine; adjacent windows on the same
/// gate ([10, 60) then [60, 90)) are fine too.
#[test]
fn test_non_overlapping_outages_accepted() {
    let outage = |gate, start, end| DisruptionSpec {
        effect: DisruptionEffect::CraneOutage {
            checkpoint: gate,
            multiplier: 0.5,
        },
        start_minute: start,
        end_minute: end,
    };
    let mut config = valid_config();
    config.scenario.disruptions = vec![
        outage(CheckpointId::PlacementApproval, 10, 60),
        outage(CheckpointId::StagingApproval, 10, 60),
        outage(CheckpointId::PlacementApproval, 60, 90),
    ];
    assert!(YardEngine::new(config).is_ok());
}

#[test]
fn test_cancellation_of_unknown_departure_rejected() {
    let mut config = valid_config();
    config.scenario.disruptions = vec![DisruptionSpec {
        effect: DisruptionEffect::TrainCancelled {
            departure_id: "GHOST".to_string(),
        },
        start_minute: 10,
        end_minute: 300,
    }];
    assert_rejected(config);
}

#[test]
fn test_cancellation_must_start_before_departure() {
    let mut config = valid_config();
    config.scenario.disruptions = vec![DisruptionSpec {
        effect: DisruptionEffect::TrainCancelled {
            departure_id: "T1".to_string(),
        },
        start_minute: 300,
        end_minute: 400,
    }];
    assert_rejected(config);
}

#[test]
fn test_double_cancellation_of_one_departure_rejected() {
    let cancel = |start| DisruptionSpec {
        effect: DisruptionEffect::TrainCancelled {
            departure_id: "T1".to_string(),
        },
        start_minute: start,
        end_minute: 300,
    };
    let mut config = valid_config();
    config.scenario.disruptions = vec![cancel(10), cancel(20)];
    assert_rejected(config);
}

// ============================================================================
// Reset semantics
// ============================================================================

/// A reset with a bad configuration fails without touching the running
/// simulation: clock, counts, and event history all survive.
#[test]
fn test_failed_reset_preserves_state() {
    let mut engine = YardEngine::new(valid_config()).unwrap();
    engine.step(10).unwrap();
    let before = engine.snapshot();
    let events_before = engine.event_log().len();

    let mut bad = valid_config();
    bad.tick_minutes = 0;
    assert!(matches!(
        engine.reset(bad),
        Err(SimulationError::ConfigurationError(_))
    ));

    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.event_log().len(), events_before);

    // And the engine still ticks from where it was
    engine.tick().unwrap();
    assert_eq!(engine.current_tick(), 11);
}

/// A successful reset discards all prior state and history.
#[test]
fn test_successful_reset_clears_state() {
    let mut engine = YardEngine::new(valid_config()).unwrap();
    engine.step(10).unwrap();

    let mut next = valid_config();
    next.scenario.seed_counts = SeedCounts {
        arrival_buffer: 7,
        confirmed_waiting: 0,
        staged: 0,
    };
    engine.reset(next).unwrap();

    assert_eq!(engine.current_tick(), 0);
    assert!(engine.event_log().is_empty());
    assert_eq!(engine.cumulative_arrivals(), 7);
    assert_eq!(engine.yard_state().arrival_buffer, 7);
}
