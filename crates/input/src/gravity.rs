//! Gravity clock - turns elapsed host time into gravity ticks.
//!
//! The engine has no timer. The host feeds elapsed milliseconds in here each
//! frame, and once the accumulated time reaches the session's current speed
//! one [`Action::GravityTick`] is due and the accumulator restarts at zero.

use crate::types::Action;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GravityClock {
    elapsed_ms: u32,
}

impl GravityClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated time since the last tick
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Advance by `elapsed_ms` against the threshold `speed_ms`.
    ///
    /// Returns at most one tick per call; leftover time is dropped.
    pub fn advance(&mut self, elapsed_ms: u32, speed_ms: u32) -> Option<Action> {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= speed_ms {
            self.elapsed_ms = 0;
            Some(Action::GravityTick)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_when_threshold_reached() {
        let mut clock = GravityClock::new();
        for _ in 0..19 {
            assert_eq!(clock.advance(50, 1000), None);
        }
        assert_eq!(clock.elapsed_ms(), 950);
        assert_eq!(clock.advance(50, 1000), Some(Action::GravityTick));
        assert_eq!(clock.elapsed_ms(), 0);
    }

    #[test]
    fn test_faster_speed_ticks_sooner() {
        let mut clock = GravityClock::new();
        assert_eq!(clock.advance(50, 100), None);
        assert_eq!(clock.advance(50, 100), Some(Action::GravityTick));
    }

    #[test]
    fn test_long_frame_yields_single_tick() {
        let mut clock = GravityClock::new();
        assert_eq!(clock.advance(5000, 100), Some(Action::GravityTick));
        assert_eq!(clock.advance(0, 100), None);
    }

    #[test]
    fn test_reset() {
        let mut clock = GravityClock::new();
        clock.advance(300, 1000);
        clock.reset();
        assert_eq!(clock.elapsed_ms(), 0);
    }
}
