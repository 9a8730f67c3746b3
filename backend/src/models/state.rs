//! Aggregated yard state
//!
//! The yard tracks container populations as per-lifecycle-state counters,
//! never as individual objects. The counts here are a read-only view
//! assembled by the engine from its checkpoint queues and cumulative
//! counters; the engine is the single writer.
//!
//! # Critical Invariant
//!
//! Conservation: every container ever introduced (scenario seed counts plus
//! ingested arrivals) is in exactly one lifecycle state, so the five counts
//! always sum to the cumulative arrival total. A violation is a logic bug
//! and aborts the tick.

use serde::{Deserialize, Serialize};

/// Container lifecycle states, in flow order
///
/// `MissedConnection` is a terminal side branch reachable only from `Staged`
/// at a departure reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Arrived at the gate, awaiting confirmation
    ArrivalBuffer,
    /// Confirmed and inside the yard, awaiting placement or retrieval
    ConfirmedWaitingPlacement,
    /// Retrieved to the staging area, ready to load
    Staged,
    /// Loaded onto a train that departed
    LoadedDeparted,
    /// Staged supply in excess of departure capacity at reconciliation
    MissedConnection,
}

impl LifecycleState {
    /// All states in flow order, side branch last
    pub const ALL: [LifecycleState; 5] = [
        LifecycleState::ArrivalBuffer,
        LifecycleState::ConfirmedWaitingPlacement,
        LifecycleState::Staged,
        LifecycleState::LoadedDeparted,
        LifecycleState::MissedConnection,
    ];
}

/// Per-state container counts plus cumulative KPIs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardState {
    /// Unconfirmed containers at the gate
    pub arrival_buffer: u64,
    /// Confirmed containers in the yard (awaiting placement or retrieval)
    pub confirmed_waiting_placement: u64,
    /// Containers staged for the next departure
    pub staged: u64,
    /// Cumulative containers that departed on a train
    pub loaded_departed: u64,
    /// Cumulative containers that missed their connection
    pub missed_connection: u64,

    /// KPI: total missed connections since reset
    pub total_missed_connections: u64,
    /// KPI: scheduled trains that did not run
    pub total_cancelled_departures: u64,
}

impl YardState {
    /// Count for a single lifecycle state
    pub fn count(&self, state: LifecycleState) -> u64 {
        match state {
            LifecycleState::ArrivalBuffer => self.arrival_buffer,
            LifecycleState::ConfirmedWaitingPlacement => self.confirmed_waiting_placement,
            LifecycleState::Staged => self.staged,
            LifecycleState::LoadedDeparted => self.loaded_departed,
            LifecycleState::MissedConnection => self.missed_connection,
        }
    }

    /// Sum of all lifecycle-state counts
    pub fn total(&self) -> u64 {
        LifecycleState::ALL.iter().map(|s| self.count(*s)).sum()
    }

    /// Check the conservation law against the cumulative arrival total
    pub fn conserves(&self, cumulative_arrivals: u64) -> bool {
        self.total() == cumulative_arrivals
    }
}
