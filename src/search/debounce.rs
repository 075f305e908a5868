//! Cancellable one-shot debounce timer.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds at most one pending value that becomes ready after an idle delay.
///
/// Time is supplied by the caller, which keeps the timer deterministic and
/// lets an event loop drive it from whatever clock it owns. Scheduling a new
/// value replaces the pending one and restarts the delay.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    /// Values superseded before their deadline.
    superseded: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            superseded: 0,
        }
    }

    /// Schedule `value` to fire `delay` after `now`, cancelling any pending value.
    pub fn schedule(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            self.superseded += 1;
        }
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value fires, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn superseded(&self) -> u64 {
        self.superseded
    }
}
