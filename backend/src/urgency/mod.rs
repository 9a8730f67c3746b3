//! Urgency window detection
//!
//! The yard is "urgent" inside a fixed window before the next scheduled
//! departure. The detector is a pure function of current time and the
//! departure schedule, plus one bit of retained state (the previous window
//! flag) used to detect transitions: exactly one entry event per window
//! opening and one exit event per closing, never on re-evaluation of an
//! unchanged window.
//!
//! The engine evaluates urgency last in the tick, so a departure completed
//! or cancelled earlier in the same tick is already reflected: a window
//! cannot stay open for a train that will not run.

use crate::models::DepartureSchedule;

/// Fixed urgency horizon: within this many minutes of the next departure
pub const URGENCY_WINDOW_MINUTES: u64 = 120;

/// Result of one urgency evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgencyEval {
    /// Whether the urgency window is open this tick
    pub active: bool,
    /// True exactly on the tick where `active` flipped
    pub changed: bool,
    /// Departure the window refers to (set when `active`)
    pub departure_id: Option<String>,
    /// Minutes until that departure (set when `active`)
    pub minutes_to_departure: Option<u64>,
}

/// Edge-detecting urgency window evaluator
///
/// # Example
/// ```
/// use yard_simulator_core_rs::models::{DepartureEvent, DepartureSchedule};
/// use yard_simulator_core_rs::urgency::UrgencyDetector;
///
/// let schedule = DepartureSchedule::new(vec![
///     DepartureEvent::new("TRAIN_0600".to_string(), 360, 25),
/// ]);
/// let mut detector = UrgencyDetector::new();
///
/// // 06:00 departure, window opens at 04:00
/// assert!(!detector.evaluate(230, &schedule).active);
/// let entry = detector.evaluate(240, &schedule);
/// assert!(entry.active && entry.changed);
///
/// // Re-evaluating an open window emits no further transition
/// assert!(!detector.evaluate(250, &schedule).changed);
/// ```
#[derive(Debug, Clone)]
pub struct UrgencyDetector {
    window_minutes: u64,
    prev_active: bool,
}

impl Default for UrgencyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl UrgencyDetector {
    /// Detector with the standard 120-minute window
    pub fn new() -> Self {
        Self::with_window(URGENCY_WINDOW_MINUTES)
    }

    /// Detector with a custom window, for tests
    pub fn with_window(window_minutes: u64) -> Self {
        Self {
            window_minutes,
            prev_active: false,
        }
    }

    /// Forget the retained window flag (engine reset)
    pub fn reset(&mut self) {
        self.prev_active = false;
    }

    /// Window flag as of the most recent evaluation
    pub fn is_active(&self) -> bool {
        self.prev_active
    }

    /// Evaluate the window at `now` against the schedule
    ///
    /// Only departures still in Scheduled status count; a cancelled or
    /// completed departure closes its window on the evaluation that observes
    /// the status change.
    pub fn evaluate(&mut self, now: u64, schedule: &DepartureSchedule) -> UrgencyEval {
        let next = schedule.next_scheduled(now);

        let (active, departure_id, minutes_to_departure) = match next {
            Some(d) if d.scheduled_minute() - now <= self.window_minutes => (
                true,
                Some(d.id().to_string()),
                Some(d.scheduled_minute() - now),
            ),
            _ => (false, None, None),
        };

        let changed = active != self.prev_active;
        self.prev_active = active;

        UrgencyEval {
            active,
            changed,
            departure_id,
            minutes_to_departure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DepartureEvent;

    fn schedule() -> DepartureSchedule {
        DepartureSchedule::new(vec![DepartureEvent::new("T1".to_string(), 360, 25)])
    }

    #[test]
    fn test_entry_edge_fires_once() {
        let schedule = schedule();
        let mut detector = UrgencyDetector::new();

        assert!(!detector.evaluate(239, &schedule).active);
        let entry = detector.evaluate(240, &schedule);
        assert!(entry.active);
        assert!(entry.changed);
        assert_eq!(entry.departure_id.as_deref(), Some("T1"));
        assert_eq!(entry.minutes_to_departure, Some(120));

        let again = detector.evaluate(245, &schedule);
        assert!(again.active);
        assert!(!again.changed);
    }

    #[test]
    fn test_cancellation_forces_exit() {
        let mut schedule = schedule();
        let mut detector = UrgencyDetector::new();

        assert!(detector.evaluate(300, &schedule).active);
        schedule.cancel("T1").unwrap();

        let exit = detector.evaluate(305, &schedule);
        assert!(!exit.active);
        assert!(exit.changed);
    }

    #[test]
    fn test_exhausted_schedule_is_never_urgent() {
        let schedule = DepartureSchedule::new(vec![]);
        let mut detector = UrgencyDetector::new();
        let eval = detector.evaluate(0, &schedule);
        assert!(!eval.active);
        assert!(!eval.changed);
    }

    #[test]
    fn test_reset_clears_retained_flag() {
        let schedule = schedule();
        let mut detector = UrgencyDetector::new();
        assert!(detector.evaluate(300, &schedule).active);

        detector.reset();
        assert!(!detector.is_active());
        // After reset the next in-window evaluation is an entry edge again
        assert!(detector.evaluate(301, &schedule).changed);
    }
}
