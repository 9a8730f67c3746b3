//! Baseline policy
//!
//! Simplest throughput policy: every checkpoint runs at its base capacity
//! regardless of urgency. Serves as the comparison baseline for smarter
//! strategies.

use super::ThroughputPolicy;
use crate::models::CheckpointId;

/// Baseline: multiplier 1.0 for every checkpoint
///
/// # Example
/// ```
/// use yard_simulator_core_rs::policy::{BaselinePolicy, ThroughputPolicy};
/// use yard_simulator_core_rs::models::CheckpointId;
///
/// let policy = BaselinePolicy;
/// assert_eq!(policy.multiplier_for(CheckpointId::PlacementApproval, true), 1.0);
/// assert_eq!(policy.multiplier_for(CheckpointId::PlacementApproval, false), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselinePolicy;

impl ThroughputPolicy for BaselinePolicy {
    fn multiplier_for(&self, _checkpoint: CheckpointId, _urgency_active: bool) -> f64 {
        1.0
    }

    fn name(&self) -> &'static str {
        "baseline"
    }
}
