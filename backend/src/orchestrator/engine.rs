//! Yard Engine - deterministic tick loop
//!
//! Main simulation loop integrating all components:
//! - Disruption apply/revert (clock-driven)
//! - Arrival ingestion (scenario profile)
//! - Checkpoint draining in lifecycle order (policy-governed throughput)
//! - Departure reconciliation (capacity vs. staged supply)
//! - Urgency re-evaluation
//! - Event logging (complete simulation history)
//!
//! # Architecture
//!
//! ```text
//! For each tick t:
//! 1. Apply/revert disruptions (same tick's throughput reflects them)
//! 2. Ingest arrivals into the arrival buffer
//! 3. Drain checkpoints, one pass: arrival confirmation -> placement
//!    approval -> staging approval (a container never clears two gates
//!    in one tick; final loading waits for a departure)
//! 4. Resolve departures whose scheduled time has been reached:
//!    reconcile Scheduled ones, count Cancelled ones
//! 5. Re-evaluate urgency (last, so same-tick departure outcomes count)
//! ```
//!
//! The engine is the single writer of all simulation state. A tick runs
//! synchronously from start to finish; consumers read `snapshot()` between
//! ticks only.
//!
//! # Example
//!
//! ```
//! use yard_simulator_core_rs::arrivals::ArrivalProfile;
//! use yard_simulator_core_rs::orchestrator::{
//!     CheckpointCapacities, DepartureConfig, EngineConfig, ScenarioConfig, SeedCounts,
//!     StrategyConfig, YardEngine,
//! };
//!
//! let config = EngineConfig {
//!     anchor_minute: 0,
//!     tick_minutes: 5,
//!     scenario: ScenarioConfig {
//!         arrival_profile: ArrivalProfile::Constant { per_tick: 3 },
//!         departures: vec![DepartureConfig {
//!             id: "TRAIN_0600".to_string(),
//!             scheduled_minute: 360,
//!             capacity: 25,
//!         }],
//!         disruptions: vec![],
//!         checkpoint_capacities: CheckpointCapacities::uniform(5),
//!         seed_counts: SeedCounts::default(),
//!     },
//!     strategy: StrategyConfig::Baseline,
//! };
//!
//! let mut engine = YardEngine::new(config).unwrap();
//! let events = engine.step(12).unwrap();
//! assert!(!events.is_empty());
//! assert_eq!(engine.snapshot().minute, 60);
//! ```

use crate::arrivals::ArrivalProfile;
use crate::core::time::SimClock;
use crate::disruption::{DisruptionController, DisruptionEffect, DisruptionSpec};
use crate::models::{
    CheckpointId, CheckpointQueue, DepartureEvent, DepartureSchedule, DepartureStatus, Event,
    EventLog, YardState,
};
use crate::policy::{BaselinePolicy, LookaheadPolicy, ThroughputPolicy, UrgencyAwarePolicy};
use crate::urgency::UrgencyDetector;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete engine configuration
///
/// Everything needed to initialize (or reset) a simulation instance. Passed
/// explicitly so concurrent instances never share configuration state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Simulation start, minutes since the anchor day's midnight
    pub anchor_minute: u64,

    /// Fixed tick length in minutes
    pub tick_minutes: u64,

    /// Scenario: arrivals, departures, disruptions, gate capacities
    pub scenario: ScenarioConfig,

    /// Throughput strategy variant and parameters
    pub strategy: StrategyConfig,
}

/// Scenario configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Deterministic arrival-rate profile
    pub arrival_profile: ArrivalProfile,

    /// Departure board, fixed at load (mutable only via cancellation)
    pub departures: Vec<DepartureConfig>,

    /// Disruptions attached to this scenario
    pub disruptions: Vec<DisruptionSpec>,

    /// Base per-tick capacity of each checkpoint gate
    pub checkpoint_capacities: CheckpointCapacities,

    /// Container populations already in the yard at reset
    pub seed_counts: SeedCounts,
}

/// One scheduled departure, as configured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureConfig {
    pub id: String,
    /// Absolute minute (since the anchor day's midnight); must be after the anchor
    pub scheduled_minute: u64,
    /// Nominal loading capacity in containers
    pub capacity: u64,
}

/// Base per-tick capacities for the four checkpoint gates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointCapacities {
    pub arrival_confirm: u64,
    pub placement_approval: u64,
    pub staging_approval: u64,
    pub final_loading: u64,
}

impl CheckpointCapacities {
    /// Same base capacity at every gate
    pub fn uniform(capacity: u64) -> Self {
        Self {
            arrival_confirm: capacity,
            placement_approval: capacity,
            staging_approval: capacity,
            final_loading: capacity,
        }
    }

    /// Base capacity for one gate
    pub fn base_for(&self, checkpoint: CheckpointId) -> u64 {
        match checkpoint {
            CheckpointId::ArrivalConfirm => self.arrival_confirm,
            CheckpointId::PlacementApproval => self.placement_approval,
            CheckpointId::StagingApproval => self.staging_approval,
            CheckpointId::FinalLoading => self.final_loading,
        }
    }
}

/// Container populations present in the yard when the scenario starts
///
/// Counted into the cumulative arrival total so conservation holds from the
/// first tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCounts {
    /// Unconfirmed containers at the gate
    pub arrival_buffer: u64,
    /// Confirmed containers awaiting placement
    pub confirmed_waiting: u64,
    /// Containers already staged
    pub staged: u64,
}

impl SeedCounts {
    pub fn total(&self) -> u64 {
        self.arrival_buffer + self.confirmed_waiting + self.staged
    }
}

/// Throughput strategy selection
///
/// A small closed set of variants behind one trait; new strategies slot in
/// without touching the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StrategyConfig {
    /// Every gate at base capacity, always
    Baseline,

    /// Boost placement and staging gates inside the urgency window
    UrgencyAware {
        /// Capacity multiplier while urgent; must be > 1.0
        boost: f64,
    },

    /// Reserved pass-through variant (behaves like Baseline, distinct tag)
    Lookahead,
}

// ============================================================================
// Errors and Results
// ============================================================================

/// Simulation error taxonomy
///
/// There are no transient errors: the engine performs no I/O, and all
/// per-tick arithmetic is total over non-negative integers. Internal
/// invariant violations abort the tick via `assert!` instead of surfacing
/// here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Malformed scenario/strategy input, rejected at construction or reset;
    /// prior state is left untouched
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),

    /// Attempt to cancel a departure that is already Completed or Cancelled;
    /// nothing is mutated
    #[error("invalid transition: departure {departure_id} is already {status}")]
    InvalidTransition {
        departure_id: String,
        status: DepartureStatus,
    },
}

/// Summary of a single executed tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    pub tick: u64,
    pub minute: u64,
    /// Containers ingested this tick
    pub num_arrivals: u64,
    /// Events recorded this tick
    pub num_events: usize,
}

// ============================================================================
// Snapshot Types
// ============================================================================

/// Read-only view of one checkpoint gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointSnapshot {
    pub id: CheckpointId,
    pub pending: u64,
    pub base_capacity: u64,
    pub processed: u64,
}

/// Next scheduled departure, as seen from the current tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextDeparture {
    pub id: String,
    pub scheduled_minute: u64,
    pub minutes_out: u64,
}

/// Stable between-ticks view of the whole simulation
///
/// Handed to the presentation layer; never mutated by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YardSnapshot {
    pub tick: u64,
    pub minute: u64,
    /// Tag of the active throughput strategy
    pub strategy: String,
    pub yard: YardState,
    pub checkpoints: Vec<CheckpointSnapshot>,
    pub urgency_active: bool,
    pub next_departure: Option<NextDeparture>,
}

// ============================================================================
// Engine
// ============================================================================

/// Main orchestrator owning all simulation state
///
/// Single-threaded, single-writer: the engine advances strictly one tick at
/// a time under external control, with no internal timers or background
/// threads. Same configuration always produces identical results.
pub struct YardEngine {
    clock: SimClock,
    arrival_profile: ArrivalProfile,
    queues: [CheckpointQueue; 4],
    schedule: DepartureSchedule,
    policy: Box<dyn ThroughputPolicy>,
    detector: UrgencyDetector,
    disruptions: DisruptionController,

    /// Cumulative containers departed on a train
    loaded_departed: u64,
    /// Cumulative containers that missed their connection
    missed_connection: u64,
    /// Scheduled trains that did not run
    total_cancelled_departures: u64,
    /// Everything ever introduced: seed counts plus ingested arrivals
    cumulative_arrivals: u64,

    /// Index of the earliest departure not yet resolved (time order)
    next_unresolved: usize,

    event_log: EventLog,
}

impl YardEngine {
    /// Build an engine from configuration
    ///
    /// Validates the configuration first; on error no engine exists and the
    /// caller's prior instance (if resetting) is untouched.
    pub fn new(config: EngineConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let caps = config.scenario.checkpoint_capacities;
        let seeds = config.scenario.seed_counts;

        let mut queues = [
            CheckpointQueue::new(CheckpointId::ArrivalConfirm, caps.arrival_confirm),
            CheckpointQueue::new(CheckpointId::PlacementApproval, caps.placement_approval),
            CheckpointQueue::new(CheckpointId::StagingApproval, caps.staging_approval),
            CheckpointQueue::new(CheckpointId::FinalLoading, caps.final_loading),
        ];
        queues[0].enqueue(seeds.arrival_buffer);
        queues[1].enqueue(seeds.confirmed_waiting);
        queues[3].enqueue(seeds.staged);

        let schedule = DepartureSchedule::new(
            config
                .scenario
                .departures
                .iter()
                .map(|d| DepartureEvent::new(d.id.clone(), d.scheduled_minute, d.capacity))
                .collect(),
        );

        Ok(Self {
            clock: SimClock::new(config.anchor_minute, config.tick_minutes),
            arrival_profile: config.scenario.arrival_profile,
            queues,
            schedule,
            policy: Self::make_policy(&config.strategy),
            detector: UrgencyDetector::new(),
            disruptions: DisruptionController::new(config.scenario.disruptions),
            loaded_departed: 0,
            missed_connection: 0,
            total_cancelled_departures: 0,
            cumulative_arrivals: seeds.total(),
            next_unresolved: 0,
            event_log: EventLog::new(),
        })
    }

    /// Clear and reinitialize all state from a new configuration
    ///
    /// Validation failures leave the current state exactly as it was.
    pub fn reset(&mut self, config: EngineConfig) -> Result<(), SimulationError> {
        let rebuilt = Self::new(config)?;
        *self = rebuilt;
        Ok(())
    }

    fn make_policy(strategy: &StrategyConfig) -> Box<dyn ThroughputPolicy> {
        match strategy {
            StrategyConfig::Baseline => Box::new(BaselinePolicy),
            StrategyConfig::UrgencyAware { boost } => Box::new(UrgencyAwarePolicy::new(*boost)),
            StrategyConfig::Lookahead => Box::new(LookaheadPolicy),
        }
    }

    /// Validate a configuration without building anything
    fn validate_config(config: &EngineConfig) -> Result<(), SimulationError> {
        let err = |msg: String| Err(SimulationError::ConfigurationError(msg));

        if config.tick_minutes == 0 {
            return err("tick_minutes must be > 0".to_string());
        }

        if let StrategyConfig::UrgencyAware { boost } = config.strategy {
            if !boost.is_finite() || boost <= 1.0 {
                return err(format!("urgency boost must be > 1.0, got {}", boost));
            }
        }

        if !config.scenario.arrival_profile.is_ordered() {
            return err("arrival profile segments must be ordered by from_minute".to_string());
        }

        let mut ids = HashSet::new();
        for departure in &config.scenario.departures {
            if !ids.insert(departure.id.as_str()) {
                return err(format!("duplicate departure id: {}", departure.id));
            }
            if departure.scheduled_minute <= config.anchor_minute {
                return err(format!(
                    "departure {} scheduled at minute {} is not after the anchor ({})",
                    departure.id, departure.scheduled_minute, config.anchor_minute
                ));
            }
        }

        let mut outage_windows: HashMap<CheckpointId, Vec<(u64, u64)>> = HashMap::new();
        let mut cancelled_targets = HashSet::new();
        for spec in &config.scenario.disruptions {
            match &spec.effect {
                DisruptionEffect::CraneOutage {
                    checkpoint,
                    multiplier,
                } => {
                    if !multiplier.is_finite() || *multiplier < 0.0 {
                        return err(format!(
                            "crane outage multiplier must be >= 0, got {}",
                            multiplier
                        ));
                    }
                    if spec.start_minute >= spec.end_minute {
                        return err(format!(
                            "crane outage window [{}, {}) is empty",
                            spec.start_minute, spec.end_minute
                        ));
                    }
                    outage_windows
                        .entry(*checkpoint)
                        .or_default()
                        .push((spec.start_minute, spec.end_minute));
                }
                DisruptionEffect::TrainCancelled { departure_id } => {
                    let target = config
                        .scenario
                        .departures
                        .iter()
                        .find(|d| &d.id == departure_id);
                    let Some(target) = target else {
                        return err(format!(
                            "cancellation targets unknown departure: {}",
                            departure_id
                        ));
                    };
                    if spec.start_minute >= target.scheduled_minute {
                        return err(format!(
                            "cancellation of {} must start before its departure at minute {}",
                            departure_id, target.scheduled_minute
                        ));
                    }
                    if !cancelled_targets.insert(departure_id.clone()) {
                        return err(format!(
                            "departure {} is cancelled by more than one disruption",
                            departure_id
                        ));
                    }
                }
            }
        }
        for (checkpoint, mut windows) in outage_windows {
            windows.sort_unstable();
            for pair in windows.windows(2) {
                if pair[1].0 < pair[0].1 {
                    return err(format!(
                        "overlapping crane outages on {}: [{}, {}) and [{}, {})",
                        checkpoint.label(),
                        pair[0].0,
                        pair[0].1,
                        pair[1].0,
                        pair[1].1
                    ));
                }
            }
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn current_tick(&self) -> u64 {
        self.clock.current_tick()
    }

    pub fn now_minute(&self) -> u64 {
        self.clock.now_minute()
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn schedule(&self) -> &DepartureSchedule {
        &self.schedule
    }

    /// Tag of the active throughput strategy
    pub fn strategy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Everything ever introduced since reset (seeds plus arrivals)
    pub fn cumulative_arrivals(&self) -> u64 {
        self.cumulative_arrivals
    }

    /// Current per-state counts and KPIs
    pub fn yard_state(&self) -> YardState {
        YardState {
            arrival_buffer: self.queues[0].pending(),
            // Confirmed-awaiting-placement plus placed-awaiting-retrieval:
            // both populations sit between confirmation and staging
            confirmed_waiting_placement: self.queues[1].pending() + self.queues[2].pending(),
            staged: self.queues[3].pending(),
            loaded_departed: self.loaded_departed,
            missed_connection: self.missed_connection,
            total_missed_connections: self.missed_connection,
            total_cancelled_departures: self.total_cancelled_departures,
        }
    }

    /// Stable read-only view for the presentation layer
    pub fn snapshot(&self) -> YardSnapshot {
        let now = self.clock.now_minute();
        YardSnapshot {
            tick: self.clock.current_tick(),
            minute: now,
            strategy: self.policy.name().to_string(),
            yard: self.yard_state(),
            checkpoints: self
                .queues
                .iter()
                .map(|q| CheckpointSnapshot {
                    id: q.id(),
                    pending: q.pending(),
                    base_capacity: q.base_capacity(),
                    processed: q.processed(),
                })
                .collect(),
            urgency_active: self.detector.is_active(),
            next_departure: self.schedule.next_scheduled(now).map(|d| NextDeparture {
                id: d.id().to_string(),
                scheduled_minute: d.scheduled_minute(),
                minutes_out: d.scheduled_minute() - now,
            }),
        }
    }

    // ========================================================================
    // Tick Loop
    // ========================================================================

    /// Advance `n` ticks, returning the ordered events produced
    ///
    /// `n = 0` is a no-op. Each tick runs to completion before the next
    /// begins; an error aborts between ticks, never mid-tick.
    pub fn step(&mut self, n: u64) -> Result<Vec<Event>, SimulationError> {
        let start = self.event_log.len();
        for _ in 0..n {
            self.tick()?;
        }
        Ok(self.event_log.events()[start..].to_vec())
    }

    /// Execute one simulation tick
    pub fn tick(&mut self) -> Result<TickResult, SimulationError> {
        self.clock.advance();
        let tick = self.clock.current_tick();
        let now = self.clock.now_minute();
        let events_before = self.event_log.len();

        // STEP 1: DISRUPTIONS
        // Apply/revert first so this tick's throughput and board reflect them
        self.disruptions
            .tick_update(tick, now, &mut self.schedule, &mut self.event_log)?;

        // STEP 2: ARRIVALS
        let arrivals = self.arrival_profile.arrivals_at(now);
        if arrivals > 0 {
            self.queues[0].enqueue(arrivals);
            self.cumulative_arrivals += arrivals;
            self.event_log.log(Event::Arrival {
                tick,
                minute: now,
                count: arrivals,
            });
        }

        // STEP 3: CHECKPOINT DRAINING
        // The urgency flag feeding the policy is the detector's value from the
        // previous evaluation; urgency is re-evaluated last (step 5)
        let urgency_active = self.detector.is_active();
        let mut caps = [0u64; 3];
        for (i, checkpoint) in CheckpointId::ALL[..3].iter().enumerate() {
            let multiplier = self.policy.multiplier_for(*checkpoint, urgency_active)
                * self.disruptions.multiplier_for(*checkpoint);
            caps[i] = self.queues[i].effective_capacity(multiplier);
        }
        // Drain downstream gates first so no container clears two gates in
        // one tick; it becomes eligible for the next gate next tick
        let mut moved = [0u64; 3];
        for i in (0..3).rev() {
            moved[i] = self.queues[i].drain(caps[i]);
            let out = moved[i];
            self.queues[i + 1].enqueue(out);
        }
        for i in 0..3 {
            self.event_log.log(Event::CheckpointDrain {
                tick,
                minute: now,
                checkpoint: CheckpointId::ALL[i],
                moved: moved[i],
                effective_capacity: caps[i],
            });
        }

        // STEP 4: DEPARTURE RESOLUTION
        while self.next_unresolved < self.schedule.len() {
            let (id, capacity, status) = {
                let departure = &self.schedule.departures()[self.next_unresolved];
                if departure.scheduled_minute() > now {
                    break;
                }
                (
                    departure.id().to_string(),
                    departure.capacity(),
                    departure.status(),
                )
            };

            match status {
                DepartureStatus::Scheduled => {
                    let demand = self.queues[3].pending();
                    let loaded = self.queues[3].drain(capacity);
                    let missed = self.queues[3].take_pending();
                    self.loaded_departed += loaded;
                    self.missed_connection += missed;
                    self.schedule.complete_at(self.next_unresolved);
                    self.event_log.log(Event::DepartureReconciled {
                        tick,
                        minute: now,
                        departure_id: id.clone(),
                        demand,
                        capacity,
                        loaded,
                        missed,
                    });
                    if missed > 0 {
                        self.event_log.log(Event::MissedConnection {
                            tick,
                            minute: now,
                            departure_id: id,
                            count: missed,
                        });
                    }
                }
                DepartureStatus::Cancelled => {
                    // Staged containers stay staged, eligible for a later
                    // departure; no automatic reassignment
                    self.total_cancelled_departures += 1;
                    self.event_log.log(Event::DepartureCancelled {
                        tick,
                        minute: now,
                        departure_id: id,
                        staged_held: self.queues[3].pending(),
                    });
                }
                DepartureStatus::Completed => {
                    unreachable!("departure {} resolved twice", id)
                }
            }
            self.next_unresolved += 1;
        }

        // STEP 5: URGENCY RE-EVALUATION
        let eval = self.detector.evaluate(now, &self.schedule);
        if eval.changed {
            match (eval.departure_id.as_ref(), eval.minutes_to_departure) {
                (Some(departure_id), Some(minutes)) if eval.active => {
                    self.event_log.log(Event::UrgencyEntry {
                        tick,
                        minute: now,
                        departure_id: departure_id.clone(),
                        minutes_to_departure: minutes,
                    });
                }
                _ => {
                    self.event_log.log(Event::UrgencyExit { tick, minute: now });
                }
            }
        }

        // Conservation law: a violation is a logic bug, not a runtime
        // condition, so abort instead of clamping
        let state = self.yard_state();
        assert!(
            state.conserves(self.cumulative_arrivals),
            "conservation violated at tick {}: {} counted across states vs {} ingested",
            tick,
            state.total(),
            self.cumulative_arrivals
        );

        Ok(TickResult {
            tick,
            minute: now,
            num_arrivals: arrivals,
            num_events: self.event_log.len() - events_before,
        })
    }
}
