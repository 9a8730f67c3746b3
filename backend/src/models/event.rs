//! Event logging for simulation replay and auditing.
//!
//! Every state change the engine makes is captured as an `Event` in an
//! append-only log. Events are ordered by tick; within a tick they follow the
//! engine's fixed processing order, so disruption events precede departure
//! reconciliation events, which precede urgency re-evaluation events.
//!
//! The event log is the engine's observability surface: the presentation
//! layer renders its feed from here and never mutates it.

use crate::models::checkpoint::CheckpointId;
use serde::{Deserialize, Serialize};

/// Simulation event capturing one state change
///
/// All events carry the tick number and the simulated minute at which they
/// occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// New containers ingested into the arrival buffer
    Arrival { tick: u64, minute: u64, count: u64 },

    /// A checkpoint gate processed pending containers this tick
    CheckpointDrain {
        tick: u64,
        minute: u64,
        checkpoint: CheckpointId,
        moved: u64,
        effective_capacity: u64,
    },

    /// The urgency window opened ahead of a scheduled departure
    UrgencyEntry {
        tick: u64,
        minute: u64,
        departure_id: String,
        minutes_to_departure: u64,
    },

    /// The urgency window closed (departure completed, cancelled, or left the window)
    UrgencyExit { tick: u64, minute: u64 },

    /// A disruption took effect
    DisruptionStart {
        tick: u64,
        minute: u64,
        description: String,
    },

    /// A time-bounded disruption was reverted
    DisruptionEnd {
        tick: u64,
        minute: u64,
        description: String,
    },

    /// Capacity-vs-staged-supply matching at a departure's scheduled time
    DepartureReconciled {
        tick: u64,
        minute: u64,
        departure_id: String,
        /// Staged supply at reconciliation time
        demand: u64,
        capacity: u64,
        loaded: u64,
        missed: u64,
    },

    /// Staged surplus diverted to the missed-connection branch
    MissedConnection {
        tick: u64,
        minute: u64,
        departure_id: String,
        count: u64,
    },

    /// A cancelled train reached its scheduled time; staged supply held back
    DepartureCancelled {
        tick: u64,
        minute: u64,
        departure_id: String,
        staged_held: u64,
    },
}

impl Event {
    /// Tick at which this event occurred
    pub fn tick(&self) -> u64 {
        match self {
            Event::Arrival { tick, .. } => *tick,
            Event::CheckpointDrain { tick, .. } => *tick,
            Event::UrgencyEntry { tick, .. } => *tick,
            Event::UrgencyExit { tick, .. } => *tick,
            Event::DisruptionStart { tick, .. } => *tick,
            Event::DisruptionEnd { tick, .. } => *tick,
            Event::DepartureReconciled { tick, .. } => *tick,
            Event::MissedConnection { tick, .. } => *tick,
            Event::DepartureCancelled { tick, .. } => *tick,
        }
    }

    /// Simulated minute at which this event occurred
    pub fn minute(&self) -> u64 {
        match self {
            Event::Arrival { minute, .. } => *minute,
            Event::CheckpointDrain { minute, .. } => *minute,
            Event::UrgencyEntry { minute, .. } => *minute,
            Event::UrgencyExit { minute, .. } => *minute,
            Event::DisruptionStart { minute, .. } => *minute,
            Event::DisruptionEnd { minute, .. } => *minute,
            Event::DepartureReconciled { minute, .. } => *minute,
            Event::MissedConnection { minute, .. } => *minute,
            Event::DepartureCancelled { minute, .. } => *minute,
        }
    }

    /// Short category tag
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Arrival { .. } => "Arrival",
            Event::CheckpointDrain { .. } => "CheckpointDrain",
            Event::UrgencyEntry { .. } => "UrgencyEntry",
            Event::UrgencyExit { .. } => "UrgencyExit",
            Event::DisruptionStart { .. } => "DisruptionStart",
            Event::DisruptionEnd { .. } => "DisruptionEnd",
            Event::DepartureReconciled { .. } => "DepartureReconciled",
            Event::MissedConnection { .. } => "MissedConnection",
            Event::DepartureCancelled { .. } => "DepartureCancelled",
        }
    }

    /// Departure id if the event refers to a specific departure
    pub fn departure_id(&self) -> Option<&str> {
        match self {
            Event::UrgencyEntry { departure_id, .. } => Some(departure_id),
            Event::DepartureReconciled { departure_id, .. } => Some(departure_id),
            Event::MissedConnection { departure_id, .. } => Some(departure_id),
            Event::DepartureCancelled { departure_id, .. } => Some(departure_id),
            _ => None,
        }
    }

    /// Whether the event is worth surfacing in a bounded example-run summary
    ///
    /// Per-tick arrival and drain events are too noisy for storytelling;
    /// urgency, disruption, and departure milestones are kept.
    pub fn is_notable(&self) -> bool {
        !matches!(self, Event::Arrival { .. } | Event::CheckpointDrain { .. })
    }
}

/// Append-only event log with convenience queries
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in append order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events recorded at a specific tick
    pub fn events_at_tick(&self, tick: u64) -> Vec<&Event> {
        self.events.iter().filter(|e| e.tick() == tick).collect()
    }

    /// Events of a specific category
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
