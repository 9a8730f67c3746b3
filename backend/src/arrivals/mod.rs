//! Arrival generation: deterministic per-tick intake profiles
//!
//! The scenario supplies an arrival-rate profile; the engine asks it how many
//! containers arrive at each tick. Profiles are pure functions of simulated
//! time, so the same scenario always produces the same intake; there is no
//! randomness anywhere in the engine.

use serde::{Deserialize, Serialize};

/// One segment of a piecewise arrival profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalStep {
    /// Minute (inclusive) from which this rate applies
    pub from_minute: u64,
    /// Containers ingested per tick while this segment is active
    pub per_tick: u64,
}

/// Deterministic arrival-rate profile
///
/// # Example
/// ```
/// use yard_simulator_core_rs::arrivals::{ArrivalProfile, ArrivalStep};
///
/// let constant = ArrivalProfile::Constant { per_tick: 3 };
/// assert_eq!(constant.arrivals_at(0), 3);
/// assert_eq!(constant.arrivals_at(900), 3);
///
/// // Surge from minute 600 onwards
/// let surge = ArrivalProfile::Piecewise {
///     steps: vec![
///         ArrivalStep { from_minute: 0, per_tick: 3 },
///         ArrivalStep { from_minute: 600, per_tick: 8 },
///     ],
/// };
/// assert_eq!(surge.arrivals_at(599), 3);
/// assert_eq!(surge.arrivals_at(600), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrivalProfile {
    /// Fixed intake every tick
    Constant { per_tick: u64 },

    /// Stepwise rates: the segment with the greatest `from_minute <= now`
    /// applies; before the first segment the rate is zero
    Piecewise { steps: Vec<ArrivalStep> },
}

impl ArrivalProfile {
    /// Containers arriving at the tick that lands on `minute`
    pub fn arrivals_at(&self, minute: u64) -> u64 {
        match self {
            ArrivalProfile::Constant { per_tick } => *per_tick,
            ArrivalProfile::Piecewise { steps } => steps
                .iter()
                .rev()
                .find(|s| s.from_minute <= minute)
                .map(|s| s.per_tick)
                .unwrap_or(0),
        }
    }

    /// Whether the segment list is ordered by `from_minute`
    ///
    /// `arrivals_at` assumes ordered segments; configuration validation
    /// rejects unordered profiles before the engine runs.
    pub fn is_ordered(&self) -> bool {
        match self {
            ArrivalProfile::Constant { .. } => true,
            ArrivalProfile::Piecewise { steps } => {
                steps.windows(2).all(|w| w[0].from_minute < w[1].from_minute)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piecewise_before_first_segment_is_zero() {
        let profile = ArrivalProfile::Piecewise {
            steps: vec![ArrivalStep {
                from_minute: 100,
                per_tick: 5,
            }],
        };
        assert_eq!(profile.arrivals_at(99), 0);
        assert_eq!(profile.arrivals_at(100), 5);
    }

    #[test]
    fn test_empty_piecewise_is_silent() {
        let profile = ArrivalProfile::Piecewise { steps: vec![] };
        assert_eq!(profile.arrivals_at(0), 0);
        assert!(profile.is_ordered());
    }

    #[test]
    fn test_ordering_check() {
        let bad = ArrivalProfile::Piecewise {
            steps: vec![
                ArrivalStep {
                    from_minute: 200,
                    per_tick: 1,
                },
                ArrivalStep {
                    from_minute: 100,
                    per_tick: 2,
                },
            ],
        };
        assert!(!bad.is_ordered());
    }
}
