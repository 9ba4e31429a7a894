//! Fixed-interval tick driver.
//!
//! Converts elapsed wall-clock time into whole ticks. Leftover time carries
//! over to the next call, so ticks stay on a steady cadence no matter how
//! often the caller polls.

use crate::constants::{MAX_FRAME_DELTA_MS, TICK_INTERVAL_MS};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TickDriver {
    interval: Duration,
    max_delta: Duration,
    accumulated: Duration,
    stopped: bool,
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS))
    }
}

impl TickDriver {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            max_delta: Duration::from_millis(MAX_FRAME_DELTA_MS),
            accumulated: Duration::ZERO,
            stopped: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Credit `elapsed` time and return how many ticks are now due.
    ///
    /// `elapsed` is clamped so a suspended process does not come back to a
    /// burst of ticks.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.stopped {
            return 0;
        }

        self.accumulated += elapsed.min(self.max_delta);

        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }

    /// Time left until the next tick is due, or `None` once stopped.
    pub fn until_next(&self) -> Option<Duration> {
        if self.stopped {
            None
        } else {
            Some(self.interval.saturating_sub(self.accumulated))
        }
    }

    /// Stop for good. Later `advance` calls return 0.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.accumulated = Duration::ZERO;
    }
}
