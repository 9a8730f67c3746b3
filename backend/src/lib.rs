//! Yard Simulator Core - deterministic container-flow simulation engine
//!
//! Simulates container flow through an intermodal rail yard: containers
//! arrive at the gate, clear a fixed sequence of capacity-limited
//! checkpoints (arrival confirmation, placement approval, staging approval,
//! final loading), and depart on scheduled trains, or miss them when staged
//! supply exceeds train capacity. Time advances in fixed externally-driven
//! ticks; the same configuration always produces the same results.
//!
//! # Module Map
//!
//! - [`core`]: simulation clock and time formatting
//! - [`models`]: checkpoint queues, departure board, lifecycle state, events
//! - [`arrivals`]: deterministic arrival-rate profiles
//! - [`policy`]: pluggable throughput strategies
//! - [`urgency`]: pre-departure urgency window detection
//! - [`disruption`]: crane outages and train cancellations
//! - [`orchestrator`]: the tick loop, configuration, presets
//!
//! # Quick Start
//!
//! ```
//! use yard_simulator_core_rs::orchestrator::{run_example, Example};
//!
//! let run = run_example(Example::BaselineBaseline, 480, 8).unwrap();
//! assert_eq!(run.summary.tick, 96);
//! assert!(run.summary.yard.loaded_departed > 0);
//! ```

pub mod arrivals;
pub mod core;
pub mod disruption;
pub mod models;
pub mod orchestrator;
pub mod policy;
pub mod urgency;

pub use crate::core::time::SimClock;
pub use models::{
    CheckpointId, CheckpointQueue, DepartureEvent, DepartureSchedule, DepartureStatus, Event,
    EventLog, LifecycleState, YardState,
};
pub use orchestrator::{
    run_example, EngineConfig, Example, ExampleRun, SimulationError, YardEngine, YardSnapshot,
};

#[cfg(feature = "pyo3")]
mod ffi;

/// Python extension module (enabled via the `pyo3` feature)
#[cfg(feature = "pyo3")]
#[pyo3::pymodule]
fn yard_simulator_core_rs(_py: pyo3::Python, m: &pyo3::types::PyModule) -> pyo3::PyResult<()> {
    ffi::register(m)
}
