use crate::domain::TaskId;
use std::time::{Duration, Instant};

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration for the event-poll loop
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// A countdown for one of the daily blocks.
///
/// Remaining time is decremented from wall-clock elapsed time on each loop
/// tick; the display rounds to whole seconds. Completion is latched so the
/// app loop observes it exactly once.
#[derive(Debug)]
pub struct CountdownTimer {
    pub task: TaskId,
    pub total: Duration,
    pub remaining: Duration,
    pub running: bool,
    finished: bool,
    last_tick: Option<Instant>,
}

impl CountdownTimer {
    pub fn new(task: TaskId, minutes: u32) -> Self {
        let total = Duration::from_secs(u64::from(minutes) * 60);
        Self {
            task,
            total,
            remaining: total,
            running: false,
            finished: false,
            last_tick: None,
        }
    }

    /// Toggle between running and paused
    pub fn toggle(&mut self) {
        self.running = !self.running;
        self.last_tick = if self.running {
            Some(Instant::now())
        } else {
            None
        };
    }

    /// Stop and restore the full duration
    pub fn reset(&mut self) {
        self.running = false;
        self.finished = false;
        self.last_tick = None;
        self.remaining = self.total;
    }

    /// Advance the countdown by wall-clock elapsed time
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        let now = Instant::now();
        let elapsed = self
            .last_tick
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_tick = Some(now);
        self.advance(elapsed);
    }

    /// Deterministic core of `tick`: advance by a known elapsed duration
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.running || self.remaining.is_zero() {
            return;
        }

        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.running = false;
            self.last_tick = None;
            self.finished = true;
        }
    }

    /// One-shot completion signal, cleared on read
    pub fn take_finished(&mut self) -> bool {
        std::mem::take(&mut self.finished)
    }

    /// Fraction of the countdown already elapsed (0.0 to 1.0)
    pub fn progress_ratio(&self) -> f64 {
        let total = self.total.as_secs_f64();
        if total == 0.0 {
            return 1.0;
        }
        (total - self.remaining.as_secs_f64()) / total
    }

    /// Remaining time as "M:SS"
    pub fn formatted(&self) -> String {
        let secs = self.remaining.as_secs();
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}
