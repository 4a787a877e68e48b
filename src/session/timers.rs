//! Cancellable timers driven by the owning session.
//!
//! Neither timer spawns a task: each one only stores a deadline, and the session awaits it
//! from its own event loop. Cancelling (or dropping the owner) leaves nothing behind.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Fires once, `delay` after the most recent [`InactivityTimer::reset`].
#[derive(Debug)]
pub struct InactivityTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl InactivityTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules (or re-schedules) the timer; any earlier schedule is forgotten.
    pub fn reset(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Completes when the latest schedule elapses; pends forever while idle.
    ///
    /// Cancel safe: dropping the future keeps the schedule.
    pub async fn fired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

/// Whole-second countdown.
#[derive(Debug, Default)]
pub struct Countdown {
    remaining: u32,
    next_tick: Option<Instant>,
}

impl Countdown {
    const TICK: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.next_tick = (seconds > 0).then(|| Instant::now() + Self::TICK);
    }

    pub fn cancel(&mut self) {
        self.next_tick = None;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Waits for the next tick and returns the seconds left; pends forever once stopped.
    ///
    /// Cancel safe.
    pub async fn tick(&mut self) -> u32 {
        let Some(at) = self.next_tick else {
            return std::future::pending().await;
        };
        sleep_until(at).await;
        self.remaining = self.remaining.saturating_sub(1);
        self.next_tick = (self.remaining > 0).then(|| at + Self::TICK);
        self.remaining
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/timers.rs"]
mod tests;
