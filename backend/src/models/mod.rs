//! Domain models: checkpoint queues, departures, lifecycle state, events

pub mod checkpoint;
pub mod departure;
pub mod event;
pub mod state;

pub use checkpoint::{CheckpointId, CheckpointQueue};
pub use departure::{DepartureEvent, DepartureSchedule, DepartureStatus};
pub use event::{Event, EventLog};
pub use state::{LifecycleState, YardState};
