//! # Suspend-Aware Clock
//!
//! The single time source for gameplay pacing. Elapsed time is wall-clock
//! time since startup *minus every suspended interval*, so a 2-second food
//! spawn interval always means 2 seconds of active play, no matter how long
//! the game sat paused.
//!
//! While suspended, [`Clock::elapsed`] is frozen at the value captured at
//! the suspend instant; resuming folds the suspended interval into an
//! accumulator, so elapsed time is non-decreasing across any sequence of
//! suspend/resume cycles.
//!
//! Every operation has an `*_at(now)` form taking an explicit [`Instant`];
//! the plain forms use `Instant::now()`. Tests drive synthetic time through
//! the `_at` forms.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Clock {
    /// The startup instant.
    start: Instant,
    /// Total time spent suspended, folded in on each resume.
    suspended_total: Duration,
    /// The suspend instant, while suspended.
    suspend_at: Option<Instant>,
}

impl Clock {
    /// Start the clock: records the startup instant, zeroes the suspended
    /// accumulator, begins unsuspended.
    pub fn start() -> Self {
        Self::start_at(Instant::now())
    }

    pub fn start_at(now: Instant) -> Self {
        Self {
            start: now,
            suspended_total: Duration::ZERO,
            suspend_at: None,
        }
    }

    /// Freeze elapsed time at this instant. No-op when already suspended.
    pub fn suspend(&mut self) {
        self.suspend_at(Instant::now());
    }

    pub fn suspend_at(&mut self, now: Instant) {
        if self.suspend_at.is_none() {
            self.suspend_at = Some(now);
        }
    }

    /// Fold the suspended interval into the accumulator and unfreeze.
    /// No-op when not suspended.
    pub fn resume(&mut self) {
        self.resume_at(Instant::now());
    }

    pub fn resume_at(&mut self, now: Instant) {
        if let Some(suspended_since) = self.suspend_at.take() {
            self.suspended_total += now.saturating_duration_since(suspended_since);
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspend_at.is_some()
    }

    /// Active-play time since startup: `now − start − suspended_total`.
    /// While suspended, computed with the suspend instant in place of now.
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        let effective = self.suspend_at.unwrap_or(now);
        effective
            .saturating_duration_since(self.start)
            .saturating_sub(self.suspended_total)
    }
}
