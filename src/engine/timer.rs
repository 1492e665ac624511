//! Cancelable repeating timer on a caller-driven clock.
//!
//! The timer never reads the wall clock. Callers feed it elapsed time with
//! [`RepeatingTimer::advance`] and get back how many intervals completed,
//! so playback can be stepped deterministically in tests and driven from
//! `Instant` deltas in the terminal front end.
//!
//! ```text
//!  interval ─────┬──────────┬──────────┬────
//!  advance(Δ)  ──┼─▶ fire   │          │
//!                │  elapsed carries over│
//!  cancel()    ──┴──────────┴─▶ no more fires
//! ```

use std::time::Duration;

/// Smallest interval accepted; shorter values are raised to it.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// A recurring task that fires every `interval` until canceled.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval: Duration,
    /// Time accumulated since the last fire.
    elapsed: Duration,
    cancelled: bool,
}

impl RepeatingTimer {
    /// Create an armed timer.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            elapsed: Duration::ZERO,
            cancelled: false,
        }
    }

    /// Feed elapsed time and return how many intervals completed.
    ///
    /// Leftover time carries over to the next call. A canceled timer
    /// always returns zero.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if self.cancelled {
            return 0;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        let interval_ns = self.interval.as_nanos();
        let due = self.elapsed.as_nanos() / interval_ns;
        if due == 0 {
            return 0;
        }

        let due = u32::try_from(due).unwrap_or(u32::MAX);
        let consumed = self.interval.saturating_mul(due);
        self.elapsed = self.elapsed.saturating_sub(consumed);
        due
    }

    /// Stop the timer. Further `advance` calls fire nothing.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Check if the timer was canceled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Time left until the next fire, or `None` once canceled.
    pub fn until_next(&self) -> Option<Duration> {
        if self.cancelled {
            None
        } else {
            Some(self.interval.saturating_sub(self.elapsed))
        }
    }

}
