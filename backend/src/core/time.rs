//! Time management for the simulation
//!
//! The simulation operates in discrete ticks of a fixed number of minutes,
//! anchored to a caller-supplied start time. This module provides
//! deterministic time advancement; all other components read the clock,
//! never advance it.

use serde::{Deserialize, Serialize};

/// Manages simulation time as minutes since the anchor day's midnight
///
/// Time is monotonically increasing across day boundaries (no time-of-day
/// wraparound), so a schedule entry at minute 1800 means 06:00 on day two.
///
/// # Example
/// ```
/// use yard_simulator_core_rs::SimClock;
///
/// // Anchor at 08:00, 5-minute ticks
/// let mut clock = SimClock::new(480, 5);
/// assert_eq!(clock.now_minute(), 480);
///
/// clock.advance();
/// assert_eq!(clock.current_tick(), 1);
/// assert_eq!(clock.now_minute(), 485);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimClock {
    /// Minutes since midnight at which the simulation was anchored
    anchor_minute: u64,
    /// Fixed length of one tick in minutes
    tick_minutes: u64,
    /// Total ticks elapsed since the anchor
    current_tick: u64,
}

impl SimClock {
    /// Create a clock anchored at `anchor_minute` with fixed-length ticks
    pub fn new(anchor_minute: u64, tick_minutes: u64) -> Self {
        assert!(tick_minutes > 0, "tick_minutes must be positive");
        Self {
            anchor_minute,
            tick_minutes,
            current_tick: 0,
        }
    }

    /// Advance time by one tick
    pub fn advance(&mut self) {
        self.current_tick += 1;
    }

    /// Total ticks elapsed since the anchor
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Current simulated time in minutes since the anchor day's midnight
    pub fn now_minute(&self) -> u64 {
        self.anchor_minute + self.current_tick * self.tick_minutes
    }

    /// Anchor time in minutes since midnight
    pub fn anchor_minute(&self) -> u64 {
        self.anchor_minute
    }

    /// Tick length in minutes
    pub fn tick_minutes(&self) -> u64 {
        self.tick_minutes
    }
}

/// Format an absolute minute value as an `HH:MM` time-of-day label
///
/// # Example
/// ```
/// use yard_simulator_core_rs::core::time::hhmm;
///
/// assert_eq!(hhmm(360), "06:00");
/// assert_eq!(hhmm(1445), "00:05"); // next day wraps
/// ```
pub fn hhmm(minute: u64) -> String {
    format!("{:02}:{:02}", (minute / 60) % 24, minute % 60)
}
