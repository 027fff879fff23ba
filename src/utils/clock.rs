// Simulated clock: explicit, day-granular time owned by the driver

use crate::models::Timestamp;

/// Simulated current time, advanced explicitly in whole days.
///
/// The clock is a plain value handed to time-dependent calls rather than
/// hidden process-wide state, so every test scenario can run its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimClock {
    now: Timestamp,
}

impl SimClock {
    /// Creates a clock starting at the given moment
    pub fn starting_at(now: Timestamp) -> Self {
        Self { now }
    }

    /// Current simulated time
    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Advances the clock by a number of days and returns the new time
    pub fn advance(&mut self, days: u32) -> Timestamp {
        self.now += Timestamp::from(days);
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = SimClock::starting_at(5);

        assert_eq!(clock.advance(3), 8);
        assert_eq!(clock.advance(0), 8);
        assert_eq!(clock.now(), 8);
    }

    #[test]
    fn test_independent_clocks() {
        let mut a = SimClock::default();
        let b = SimClock::default();

        a.advance(10);
        assert_eq!(a.now(), 10);
        assert_eq!(b.now(), 0);
    }
}
