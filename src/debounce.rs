//! Debounce utility: coalesce a burst of calls into one delayed delivery.
//!
//! No timer thread and no OS timer. The pending delivery is an owned
//! `(deadline, value)` pair, and the event loop polls it with the current
//! time. Dropping the value is cancellation, so a torn-down owner can
//! never observe a late fire.

use std::time::{Duration, Instant};

/// A debounced single-value slot. Each `schedule` restarts the quiet
/// period; `poll` delivers the most recent value once the period elapses.
/// Fire-and-forget only: nothing flows back to the scheduling caller.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    deadline: Instant,
    value: T,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a delivery of `value` at `now + delay`, replacing any
    /// not-yet-fired delivery. Only the last value in a burst survives.
    pub fn schedule(&mut self, now: Instant, value: T) {
        self.pending = Some(Pending {
            deadline: now + self.delay,
            value,
        });
    }

    /// Discard the outstanding delivery, if any. Idempotent; once
    /// cancelled, the previously scheduled value can never fire.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deliver the pending value if its quiet period has elapsed. At most
    /// one delivery per scheduled window.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }
}
