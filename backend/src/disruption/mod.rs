//! Disruption handling
//!
//! A scenario attaches a set of disruption specs; the controller applies and
//! reverts them on clock-driven checks at the start of every tick, before
//! checkpoint draining and departure reconciliation, so the same tick's
//! throughput and capacity already reflect the disruption.
//!
//! Two effects exist: a crane outage multiplies a checkpoint's capacity for a
//! bounded `[start, end)` window and reverts automatically; a train
//! cancellation pulls a departure from the board permanently. Effects are
//! never partially applied.

use crate::models::{CheckpointId, DepartureSchedule, Event, EventLog};
use crate::orchestrator::SimulationError;
use serde::{Deserialize, Serialize};

/// What a disruption does when it takes effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisruptionEffect {
    /// Multiply one checkpoint's per-tick capacity while active
    CraneOutage {
        checkpoint: CheckpointId,
        multiplier: f64,
    },

    /// Cancel a scheduled departure (permanent, not reverted at `end`)
    TrainCancelled { departure_id: String },
}

/// A scenario-configured disruption over a `[start, end)` minute interval
///
/// For `TrainCancelled` the end bound is ignored: cancellation is binary and
/// permanent once the start time is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionSpec {
    pub effect: DisruptionEffect,
    pub start_minute: u64,
    pub end_minute: u64,
}

impl DisruptionSpec {
    /// Human-readable description for disruption events
    pub fn description(&self) -> String {
        match &self.effect {
            DisruptionEffect::CraneOutage {
                checkpoint,
                multiplier,
            } => format!(
                "crane outage: {} throughput x{}",
                checkpoint.label(),
                multiplier
            ),
            DisruptionEffect::TrainCancelled { departure_id } => {
                format!("train {} cancelled", departure_id)
            }
        }
    }
}

/// Applies and reverts disruption specs as the clock passes their bounds
#[derive(Debug, Clone)]
pub struct DisruptionController {
    specs: Vec<DisruptionSpec>,
    applied: Vec<bool>,
    reverted: Vec<bool>,
}

impl DisruptionController {
    pub fn new(specs: Vec<DisruptionSpec>) -> Self {
        let n = specs.len();
        Self {
            specs,
            applied: vec![false; n],
            reverted: vec![false; n],
        }
    }

    /// Configured specs
    pub fn specs(&self) -> &[DisruptionSpec] {
        &self.specs
    }

    /// Apply newly-due specs and revert expired ones, logging transitions
    ///
    /// A cancellation that hits an already-Completed departure surfaces
    /// `InvalidTransition` to the caller; configuration validation rejects
    /// the reachable cases of this at reset time.
    pub fn tick_update(
        &mut self,
        tick: u64,
        now: u64,
        schedule: &mut DepartureSchedule,
        log: &mut EventLog,
    ) -> Result<(), SimulationError> {
        for i in 0..self.specs.len() {
            let start = self.specs[i].start_minute;
            let end = self.specs[i].end_minute;

            if !self.applied[i] && start <= now {
                let due = match self.specs[i].effect {
                    // A multiplier window the clock has already passed never applies
                    DisruptionEffect::CraneOutage { .. } => now < end,
                    DisruptionEffect::TrainCancelled { .. } => true,
                };
                if due {
                    if let DisruptionEffect::TrainCancelled { ref departure_id } =
                        self.specs[i].effect
                    {
                        schedule.cancel(departure_id)?;
                        // Nothing to revert later
                        self.reverted[i] = true;
                    }
                    self.applied[i] = true;
                    log.log(Event::DisruptionStart {
                        tick,
                        minute: now,
                        description: self.specs[i].description(),
                    });
                }
            } else if self.applied[i] && !self.reverted[i] && now >= end {
                self.reverted[i] = true;
                log.log(Event::DisruptionEnd {
                    tick,
                    minute: now,
                    description: self.specs[i].description(),
                });
            }
        }
        Ok(())
    }

    /// Composed capacity multiplier from all active outages targeting
    /// `checkpoint` (1.0 when none)
    pub fn multiplier_for(&self, checkpoint: CheckpointId) -> f64 {
        let mut multiplier = 1.0;
        for (i, spec) in self.specs.iter().enumerate() {
            if self.applied[i] && !self.reverted[i] {
                if let DisruptionEffect::CraneOutage {
                    checkpoint: target,
                    multiplier: m,
                } = spec.effect
                {
                    if target == checkpoint {
                        multiplier *= m;
                    }
                }
            }
        }
        multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DepartureEvent;

    fn outage(start: u64, end: u64) -> DisruptionSpec {
        DisruptionSpec {
            effect: DisruptionEffect::CraneOutage {
                checkpoint: CheckpointId::PlacementApproval,
                multiplier: 0.5,
            },
            start_minute: start,
            end_minute: end,
        }
    }

    fn empty_schedule() -> DepartureSchedule {
        DepartureSchedule::new(vec![])
    }

    #[test]
    fn test_outage_window_applies_and_reverts() {
        let mut controller = DisruptionController::new(vec![outage(30, 60)]);
        let mut schedule = empty_schedule();
        let mut log = EventLog::new();

        controller.tick_update(1, 20, &mut schedule, &mut log).unwrap();
        assert_eq!(controller.multiplier_for(CheckpointId::PlacementApproval), 1.0);

        controller.tick_update(2, 30, &mut schedule, &mut log).unwrap();
        assert_eq!(controller.multiplier_for(CheckpointId::PlacementApproval), 0.5);
        assert_eq!(log.events_of_type("DisruptionStart").len(), 1);

        controller.tick_update(3, 60, &mut schedule, &mut log).unwrap();
        assert_eq!(controller.multiplier_for(CheckpointId::PlacementApproval), 1.0);
        assert_eq!(log.events_of_type("DisruptionEnd").len(), 1);
    }

    #[test]
    fn test_outage_only_hits_its_target() {
        let mut controller = DisruptionController::new(vec![outage(0, 100)]);
        let mut schedule = empty_schedule();
        let mut log = EventLog::new();
        controller.tick_update(1, 10, &mut schedule, &mut log).unwrap();

        assert_eq!(controller.multiplier_for(CheckpointId::PlacementApproval), 0.5);
        assert_eq!(controller.multiplier_for(CheckpointId::StagingApproval), 1.0);
    }

    #[test]
    fn test_overlapping_outages_compose_multiplicatively() {
        let mut controller = DisruptionController::new(vec![outage(0, 100), outage(0, 100)]);
        let mut schedule = empty_schedule();
        let mut log = EventLog::new();
        controller.tick_update(1, 10, &mut schedule, &mut log).unwrap();

        assert_eq!(controller.multiplier_for(CheckpointId::PlacementApproval), 0.25);
    }

    #[test]
    fn test_cancellation_is_permanent() {
        let mut schedule = DepartureSchedule::new(vec![DepartureEvent::new(
            "T1".to_string(),
            500,
            25,
        )]);
        let mut controller = DisruptionController::new(vec![DisruptionSpec {
            effect: DisruptionEffect::TrainCancelled {
                departure_id: "T1".to_string(),
            },
            start_minute: 100,
            end_minute: 200,
        }]);
        let mut log = EventLog::new();

        controller.tick_update(1, 100, &mut schedule, &mut log).unwrap();
        assert!(schedule.next_scheduled(0).is_none());

        // Past the end bound: no revert, no end event for cancellations
        controller.tick_update(2, 300, &mut schedule, &mut log).unwrap();
        assert_eq!(log.events_of_type("DisruptionStart").len(), 1);
        assert_eq!(log.events_of_type("DisruptionEnd").len(), 0);
    }

    #[test]
    fn test_skipped_window_never_applies() {
        let mut controller = DisruptionController::new(vec![outage(30, 40)]);
        let mut schedule = empty_schedule();
        let mut log = EventLog::new();

        // Clock jumped past the whole window in one stride
        controller.tick_update(1, 50, &mut schedule, &mut log).unwrap();
        assert_eq!(controller.multiplier_for(CheckpointId::PlacementApproval), 1.0);
        assert!(log.is_empty());
    }
}
