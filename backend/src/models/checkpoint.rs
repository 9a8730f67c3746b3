//! Human-confirmation checkpoint queues
//!
//! The yard models four human gates, all instances of one generic
//! bounded-throughput queue: a pending count, a base per-tick capacity, and a
//! cumulative processed count. Per-tick throughput is governed externally by
//! composing the base capacity with policy and disruption multipliers; the
//! queue itself only enforces `drained <= min(pending, effective capacity)`.
//!
//! Containers are aggregated counters here, never individual objects.

use serde::{Deserialize, Serialize};

/// Identifies one of the four checkpoint gates, in lifecycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckpointId {
    /// Gate clerk confirms arrivals out of the arrival buffer
    ArrivalConfirm,
    /// Yard planner approves placement into stacks
    PlacementApproval,
    /// Crane dispatcher approves retrieval to the staging area
    StagingApproval,
    /// Loading crew moves staged containers onto a departing train
    FinalLoading,
}

impl CheckpointId {
    /// All checkpoints in lifecycle order
    pub const ALL: [CheckpointId; 4] = [
        CheckpointId::ArrivalConfirm,
        CheckpointId::PlacementApproval,
        CheckpointId::StagingApproval,
        CheckpointId::FinalLoading,
    ];

    /// Position in lifecycle order (0-based)
    pub fn index(&self) -> usize {
        match self {
            CheckpointId::ArrivalConfirm => 0,
            CheckpointId::PlacementApproval => 1,
            CheckpointId::StagingApproval => 2,
            CheckpointId::FinalLoading => 3,
        }
    }

    /// Human-readable label for event payloads
    pub fn label(&self) -> &'static str {
        match self {
            CheckpointId::ArrivalConfirm => "arrival confirmation",
            CheckpointId::PlacementApproval => "placement approval",
            CheckpointId::StagingApproval => "staging approval",
            CheckpointId::FinalLoading => "final loading",
        }
    }
}

/// Generic bounded-throughput human gate
///
/// # Example
/// ```
/// use yard_simulator_core_rs::models::{CheckpointId, CheckpointQueue};
///
/// let mut gate = CheckpointQueue::new(CheckpointId::ArrivalConfirm, 15);
/// gate.enqueue(40);
///
/// assert_eq!(gate.drain(15), 15);
/// assert_eq!(gate.pending(), 25);
/// assert_eq!(gate.processed(), 15);
///
/// // Zero effective capacity is a legal no-op, not an error
/// assert_eq!(gate.drain(0), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointQueue {
    id: CheckpointId,
    /// Containers waiting at this gate
    pending: u64,
    /// Nominal per-tick throughput before multipliers
    base_capacity: u64,
    /// Cumulative containers processed through this gate
    processed: u64,
}

impl CheckpointQueue {
    /// Create an empty queue with the given base per-tick capacity
    pub fn new(id: CheckpointId, base_capacity: u64) -> Self {
        Self {
            id,
            pending: 0,
            base_capacity,
            processed: 0,
        }
    }

    /// Add `n` containers to the pending count
    pub fn enqueue(&mut self, n: u64) {
        self.pending += n;
    }

    /// Process up to `effective_cap` pending containers, returning the count moved
    pub fn drain(&mut self, effective_cap: u64) -> u64 {
        let moved = self.pending.min(effective_cap);
        self.pending -= moved;
        self.processed += moved;
        moved
    }

    /// Remove and return every pending container without counting it processed
    ///
    /// Used only at departure reconciliation, where staged surplus diverts to
    /// the missed-connection branch instead of passing the gate.
    pub fn take_pending(&mut self) -> u64 {
        std::mem::take(&mut self.pending)
    }

    /// Base capacity composed with a throughput multiplier, floored to whole
    /// containers
    ///
    /// Fractional throughput never drains a fractional unit: `15 x 0.5 = 7`.
    /// Non-finite or negative multipliers floor to zero capacity.
    pub fn effective_capacity(&self, multiplier: f64) -> u64 {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return 0;
        }
        (self.base_capacity as f64 * multiplier).floor() as u64
    }

    pub fn id(&self) -> CheckpointId {
        self.id
    }

    pub fn pending(&self) -> u64 {
        self.pending
    }

    pub fn base_capacity(&self) -> u64 {
        self.base_capacity
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }
}
