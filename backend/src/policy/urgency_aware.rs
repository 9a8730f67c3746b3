//! Urgency-aware policy
//!
//! Boosts placement and staging throughput while the urgency window ahead of
//! the next departure is open, modeling crews prioritizing containers that
//! risk missing their train. Arrival confirmation and final loading are not
//! boosted in this version.

use super::ThroughputPolicy;
use crate::models::CheckpointId;

/// Urgency-aware: configured boost factor for placement and staging gates
/// inside the urgency window
///
/// # Example
/// ```
/// use yard_simulator_core_rs::policy::{ThroughputPolicy, UrgencyAwarePolicy};
/// use yard_simulator_core_rs::models::CheckpointId;
///
/// let policy = UrgencyAwarePolicy::new(1.5);
/// assert_eq!(policy.multiplier_for(CheckpointId::StagingApproval, true), 1.5);
/// assert_eq!(policy.multiplier_for(CheckpointId::StagingApproval, false), 1.0);
/// assert_eq!(policy.multiplier_for(CheckpointId::ArrivalConfirm, true), 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UrgencyAwarePolicy {
    /// Multiplier applied while urgent; must be > 1.0 (validated at reset)
    boost: f64,
}

impl UrgencyAwarePolicy {
    pub fn new(boost: f64) -> Self {
        Self { boost }
    }

    pub fn boost(&self) -> f64 {
        self.boost
    }
}

impl ThroughputPolicy for UrgencyAwarePolicy {
    fn multiplier_for(&self, checkpoint: CheckpointId, urgency_active: bool) -> f64 {
        match checkpoint {
            CheckpointId::PlacementApproval | CheckpointId::StagingApproval if urgency_active => {
                self.boost
            }
            _ => 1.0,
        }
    }

    fn name(&self) -> &'static str {
        "urgency-aware"
    }
}
