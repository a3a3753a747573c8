use std::time::{Duration, Instant};

/// Measures the time between consecutive frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
    max_step: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Longest step reported for a single frame, so a stalled window does not
    /// produce one huge movement step.
    pub const DEFAULT_MAX_STEP: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            last: start,
            max_step: Self::DEFAULT_MAX_STEP,
        }
    }

    pub fn with_max_step(mut self, max_step: Duration) -> Self {
        self.max_step = max_step;
        self
    }

    /// Time since the previous tick, capped at the maximum step.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Like [`tick`](Self::tick) with an explicit timestamp. A timestamp
    /// earlier than the previous one yields zero.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        if now > self.last {
            self.last = now;
        }
        elapsed.min(self.max_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_measures_elapsed_time() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert_eq!(dt, Duration::from_millis(16));

        let dt = clock.tick_at(start + Duration::from_millis(48));
        assert_eq!(dt, Duration::from_millis(32));
    }

    #[test]
    fn test_tick_is_capped_and_never_negative() {
        let start = Instant::now() + Duration::from_secs(5);
        let mut clock = FrameClock::starting_at(start).with_max_step(Duration::from_millis(100));

        assert_eq!(clock.tick_at(start + Duration::from_secs(3)), Duration::from_millis(100));
        assert_eq!(clock.tick_at(start), Duration::ZERO);
    }
}
