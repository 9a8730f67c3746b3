//! Preset scenarios, strategies, and the example-run helper
//!
//! Canned configurations for demo runs: a baseline day, a port surge, a
//! crane outage, and a train-cancelled day, each pairable with a throughput
//! strategy. `run_example` is pure composition (reset, step, summarize)
//! and adds no engine behavior of its own.

use crate::arrivals::ArrivalProfile;
use crate::core::time::hhmm;
use crate::disruption::{DisruptionEffect, DisruptionSpec};
use crate::models::{CheckpointId, Event};
use crate::orchestrator::engine::{
    CheckpointCapacities, DepartureConfig, EngineConfig, ScenarioConfig, SeedCounts,
    SimulationError, StrategyConfig, YardEngine, YardSnapshot,
};
use serde::{Deserialize, Serialize};

/// Default tick length: one tick per five minutes
pub const DEFAULT_TICK_MINUTES: u64 = 5;

/// Preset departure board, minutes since midnight: 06:00 / 12:00 / 18:00 / 23:00
pub const DEPARTURE_BOARD: [u64; 4] = [360, 720, 1080, 1380];

/// Nominal loading capacity of every preset train
pub const PRESET_TRAIN_CAPACITY: u64 = 25;

/// Cap on the notable-event sample returned by `run_example`
pub const NOTABLE_EVENT_CAP: usize = 20;

/// Canned scenario variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetScenario {
    /// Steady intake, no disruptions
    BaselineDay,
    /// Elevated intake pressure from the port
    PortSurge,
    /// Placement and staging throughput halved for a mid-day window
    CraneOutage,
    /// Every departure in the horizon cancelled
    TrainCancelled,
}

/// The six canned example runs (scenario x strategy pairs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Example {
    BaselineBaseline,
    BaselineUrgencyAware,
    PortSurgeBaseline,
    PortSurgeUrgencyAware,
    CraneOutageBaseline,
    TrainCancelledBaseline,
}

impl Example {
    pub const ALL: [Example; 6] = [
        Example::BaselineBaseline,
        Example::BaselineUrgencyAware,
        Example::PortSurgeBaseline,
        Example::PortSurgeUrgencyAware,
        Example::CraneOutageBaseline,
        Example::TrainCancelledBaseline,
    ];

    /// Display label for summaries
    pub fn label(&self) -> &'static str {
        match self {
            Example::BaselineBaseline => "Baseline Day -> Baseline",
            Example::BaselineUrgencyAware => "Baseline Day -> Urgency-Aware",
            Example::PortSurgeBaseline => "Port Surge -> Baseline",
            Example::PortSurgeUrgencyAware => "Port Surge -> Urgency-Aware",
            Example::CraneOutageBaseline => "Crane Outage -> Baseline",
            Example::TrainCancelledBaseline => "Train Cancelled -> Baseline",
        }
    }

    /// Machine-friendly slug, accepted by `FromStr`
    pub fn slug(&self) -> &'static str {
        match self {
            Example::BaselineBaseline => "baseline-baseline",
            Example::BaselineUrgencyAware => "baseline-urgency",
            Example::PortSurgeBaseline => "surge-baseline",
            Example::PortSurgeUrgencyAware => "surge-urgency",
            Example::CraneOutageBaseline => "crane-outage",
            Example::TrainCancelledBaseline => "train-cancelled",
        }
    }

    pub fn scenario(&self) -> PresetScenario {
        match self {
            Example::BaselineBaseline | Example::BaselineUrgencyAware => {
                PresetScenario::BaselineDay
            }
            Example::PortSurgeBaseline | Example::PortSurgeUrgencyAware => {
                PresetScenario::PortSurge
            }
            Example::CraneOutageBaseline => PresetScenario::CraneOutage,
            Example::TrainCancelledBaseline => PresetScenario::TrainCancelled,
        }
    }

    pub fn strategy(&self) -> StrategyConfig {
        match self {
            Example::BaselineUrgencyAware | Example::PortSurgeUrgencyAware => {
                StrategyConfig::UrgencyAware { boost: 1.5 }
            }
            _ => StrategyConfig::Baseline,
        }
    }
}

impl std::str::FromStr for Example {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Example::ALL
            .into_iter()
            .find(|e| e.slug() == s)
            .ok_or_else(|| {
                SimulationError::ConfigurationError(format!("unknown example slug: {}", s))
            })
    }
}

/// Result of a preset example run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleRun {
    pub example: Example,
    /// Final state after the run
    pub summary: YardSnapshot,
    /// Bounded sample of storytelling events (urgency, disruptions, departures)
    pub notable_events: Vec<Event>,
}

/// Departure board over `[anchor, anchor + horizon]`, preset times-of-day
fn preset_departures(anchor_minute: u64, horizon_minutes: u64) -> Vec<DepartureConfig> {
    let mut departures = Vec::new();
    let last_day = (anchor_minute + horizon_minutes) / 1440;
    for day in 0..=last_day {
        for time_of_day in DEPARTURE_BOARD {
            let minute = day * 1440 + time_of_day;
            if minute <= anchor_minute || minute > anchor_minute + horizon_minutes {
                continue;
            }
            departures.push(DepartureConfig {
                id: format!("TRAIN_{}_D{}", hhmm(minute).replace(':', ""), day),
                scheduled_minute: minute,
                capacity: PRESET_TRAIN_CAPACITY,
            });
        }
    }
    departures
}

/// Build a preset scenario over `[anchor, anchor + horizon]`
pub fn preset_scenario(
    preset: PresetScenario,
    anchor_minute: u64,
    horizon_minutes: u64,
) -> ScenarioConfig {
    let departures = preset_departures(anchor_minute, horizon_minutes);

    let arrival_profile = match preset {
        PresetScenario::PortSurge => ArrivalProfile::Constant { per_tick: 5 },
        _ => ArrivalProfile::Constant { per_tick: 3 },
    };

    let disruptions = match preset {
        PresetScenario::CraneOutage => {
            // Both crane-served gates halved from one hour in, for three hours
            let (start, end) = (anchor_minute + 60, anchor_minute + 240);
            vec![
                DisruptionSpec {
                    effect: DisruptionEffect::CraneOutage {
                        checkpoint: CheckpointId::PlacementApproval,
                        multiplier: 0.5,
                    },
                    start_minute: start,
                    end_minute: end,
                },
                DisruptionSpec {
                    effect: DisruptionEffect::CraneOutage {
                        checkpoint: CheckpointId::StagingApproval,
                        multiplier: 0.5,
                    },
                    start_minute: start,
                    end_minute: end,
                },
            ]
        }
        PresetScenario::TrainCancelled => departures
            .iter()
            .map(|d| DisruptionSpec {
                effect: DisruptionEffect::TrainCancelled {
                    departure_id: d.id.clone(),
                },
                start_minute: anchor_minute + 1,
                end_minute: d.scheduled_minute,
            })
            .collect(),
        _ => vec![],
    };

    ScenarioConfig {
        arrival_profile,
        departures,
        disruptions,
        checkpoint_capacities: CheckpointCapacities {
            arrival_confirm: 2,
            placement_approval: 2,
            staging_approval: 2,
            final_loading: PRESET_TRAIN_CAPACITY,
        },
        seed_counts: SeedCounts {
            arrival_buffer: 12,
            confirmed_waiting: 8,
            staged: 20,
        },
    }
}

/// Run a canned example: preset reset, `hours` of 5-minute ticks, summary
///
/// The departure board extends a day past the run so the urgency window
/// always has a next departure to refer to.
pub fn run_example(
    example: Example,
    anchor_minute: u64,
    hours: u64,
) -> Result<ExampleRun, SimulationError> {
    let horizon_minutes = hours * 60 + 1440;
    let config = EngineConfig {
        anchor_minute,
        tick_minutes: DEFAULT_TICK_MINUTES,
        scenario: preset_scenario(example.scenario(), anchor_minute, horizon_minutes),
        strategy: example.strategy(),
    };

    let mut engine = YardEngine::new(config)?;
    let events = engine.step(hours * 60 / DEFAULT_TICK_MINUTES)?;

    let notable_events: Vec<Event> = events
        .into_iter()
        .filter(|e| e.is_notable())
        .take(NOTABLE_EVENT_CAP)
        .collect();

    Ok(ExampleRun {
        example,
        summary: engine.snapshot(),
        notable_events,
    })
}
