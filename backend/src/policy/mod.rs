//! Throughput Policy Module
//!
//! Checkpoint throughput is governed by a swappable policy object: each tick
//! the engine asks the active policy for a capacity multiplier per checkpoint,
//! given whether the urgency window is open. Policies are stateless and pure;
//! all state they react to arrives through the call.
//!
//! # Policy Interface
//!
//! All policies implement the `ThroughputPolicy` trait:
//! ```
//! use yard_simulator_core_rs::policy::ThroughputPolicy;
//! use yard_simulator_core_rs::models::CheckpointId;
//!
//! struct MyPolicy;
//!
//! impl ThroughputPolicy for MyPolicy {
//!     fn multiplier_for(&self, _checkpoint: CheckpointId, _urgency_active: bool) -> f64 {
//!         1.0
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my-policy"
//!     }
//! }
//! ```
//!
//! Available policies:
//! 1. **Baseline**: multiplier 1.0 everywhere (no urgency reaction)
//! 2. **UrgencyAware**: boosts placement and staging gates inside the window
//! 3. **Lookahead**: reserved pass-through, distinguishable by tag only

use crate::models::CheckpointId;

mod baseline;
mod lookahead;
mod urgency_aware;

pub use baseline::BaselinePolicy;
pub use lookahead::LookaheadPolicy;
pub use urgency_aware::UrgencyAwarePolicy;

/// Per-tick capacity multiplier supplier for checkpoint gates
///
/// Multipliers must be finite and `>= 0`; the engine composes them
/// multiplicatively with disruption multipliers and floors the result to
/// whole containers.
pub trait ThroughputPolicy {
    /// Capacity multiplier for `checkpoint` this tick
    fn multiplier_for(&self, checkpoint: CheckpointId, urgency_active: bool) -> f64;

    /// Stable identity tag, used to tell variants apart even when their
    /// behavior is currently identical (Baseline vs. Lookahead)
    fn name(&self) -> &'static str;
}
