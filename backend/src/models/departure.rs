//! Train departure schedule
//!
//! Holds the ordered board of scheduled departures for a scenario. The board
//! is fixed at scenario load; the only mutation paths are `cancel` (via a
//! disruption, before the scheduled time) and `complete_at` (engine-internal,
//! at reconciliation). Capacity is fixed per departure and never partially
//! reduced: cancellation is binary.

use crate::orchestrator::SimulationError;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a scheduled departure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepartureStatus {
    /// On the board, will run at its scheduled time
    Scheduled,
    /// Pulled from the board by a disruption; permanent
    Cancelled,
    /// Reconciled at its scheduled time; immutable from here on
    Completed,
}

impl std::fmt::Display for DepartureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DepartureStatus::Scheduled => "scheduled",
            DepartureStatus::Cancelled => "cancelled",
            DepartureStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

/// One scheduled train departure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartureEvent {
    id: String,
    /// Absolute minute (since the anchor day's midnight) the train leaves
    scheduled_minute: u64,
    /// Nominal loading capacity in containers
    capacity: u64,
    status: DepartureStatus,
}

impl DepartureEvent {
    pub fn new(id: String, scheduled_minute: u64, capacity: u64) -> Self {
        Self {
            id,
            scheduled_minute,
            capacity,
            status: DepartureStatus::Scheduled,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn scheduled_minute(&self) -> u64 {
        self.scheduled_minute
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn status(&self) -> DepartureStatus {
        self.status
    }
}

/// Ordered-by-time board of departures
///
/// # Example
/// ```
/// use yard_simulator_core_rs::models::{DepartureEvent, DepartureSchedule};
///
/// let schedule = DepartureSchedule::new(vec![
///     DepartureEvent::new("TRAIN_1200".to_string(), 720, 25),
///     DepartureEvent::new("TRAIN_0600".to_string(), 360, 25),
/// ]);
///
/// // Sorted on construction; earliest scheduled departure at or after `after`
/// let next = schedule.next_scheduled(400).unwrap();
/// assert_eq!(next.id(), "TRAIN_1200");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartureSchedule {
    departures: Vec<DepartureEvent>,
}

impl DepartureSchedule {
    /// Build a schedule, sorting by scheduled time
    pub fn new(mut departures: Vec<DepartureEvent>) -> Self {
        departures.sort_by_key(|d| d.scheduled_minute);
        Self { departures }
    }

    /// All departures in time order
    pub fn departures(&self) -> &[DepartureEvent] {
        &self.departures
    }

    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    /// Look up a departure by id
    pub fn get(&self, id: &str) -> Option<&DepartureEvent> {
        self.departures.iter().find(|d| d.id == id)
    }

    /// Earliest still-Scheduled departure at or after `after`, if any
    pub fn next_scheduled(&self, after: u64) -> Option<&DepartureEvent> {
        self.departures
            .iter()
            .find(|d| d.status == DepartureStatus::Scheduled && d.scheduled_minute >= after)
    }

    /// Cancel a departure, returning its scheduled minute
    ///
    /// Fails with `InvalidTransition` if the departure is already Completed or
    /// already Cancelled; no state is mutated on failure.
    pub fn cancel(&mut self, id: &str) -> Result<u64, SimulationError> {
        let departure = self
            .departures
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| {
                SimulationError::ConfigurationError(format!("unknown departure id: {}", id))
            })?;

        match departure.status {
            DepartureStatus::Scheduled => {
                departure.status = DepartureStatus::Cancelled;
                Ok(departure.scheduled_minute)
            }
            status => Err(SimulationError::InvalidTransition {
                departure_id: id.to_string(),
                status,
            }),
        }
    }

    /// Mark the departure at `index` Completed
    ///
    /// Called by the engine at reconciliation; the departure must still be
    /// Scheduled.
    pub(crate) fn complete_at(&mut self, index: usize) {
        let departure = &mut self.departures[index];
        assert_eq!(
            departure.status,
            DepartureStatus::Scheduled,
            "cannot complete departure {} in status {}",
            departure.id,
            departure.status
        );
        departure.status = DepartureStatus::Completed;
    }
}
