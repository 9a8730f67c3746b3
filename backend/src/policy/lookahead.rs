//! Lookahead policy (reserved)
//!
//! Placeholder for a future strategy that plans throughput against upcoming
//! departures. Behaves exactly like Baseline today but carries its own tag so
//! callers and tests can tell the variants apart.

use super::ThroughputPolicy;
use crate::models::CheckpointId;

/// Lookahead: unconditional pass-through, distinct identity
#[derive(Debug, Clone, Copy, Default)]
pub struct LookaheadPolicy;

impl ThroughputPolicy for LookaheadPolicy {
    fn multiplier_for(&self, _checkpoint: CheckpointId, _urgency_active: bool) -> f64 {
        1.0
    }

    fn name(&self) -> &'static str {
        "lookahead"
    }
}
