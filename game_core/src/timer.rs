//! Single-slot scheduled deadline with a cancellation token
//!
//! A `Timer` holds at most one pending deadline. Scheduling again cancels the
//! pending one, so a stale [`TimerToken`] never matches the live deadline.

/// Identifies one scheduling of a [`Timer`]
///
/// Only callers that hand a deadline to someone else need to keep one; the
/// timer itself never asks for it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Default)]
pub struct Timer {
    deadline_ms: Option<f64>,
    generation: u64,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timer already due at `at_ms`
    pub fn scheduled_at(at_ms: f64) -> Self {
        let mut timer = Self::new();
        timer.schedule(at_ms);
        timer
    }

    /// Cancel any pending deadline and schedule a new one
    pub fn schedule(&mut self, at_ms: f64) -> TimerToken {
        self.cancel();
        self.deadline_ms = Some(at_ms);
        TimerToken(self.generation)
    }

    /// Returns true if a deadline was pending
    pub fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.deadline_ms.take().is_some()
    }

    /// Push the pending deadline back without issuing a new token
    pub fn postpone(&mut self, extra_ms: f64) {
        if let Some(deadline) = self.deadline_ms.as_mut() {
            *deadline += extra_ms;
        }
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline_ms
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn is_due(&self, now_ms: f64) -> bool {
        self.deadline_ms.is_some_and(|deadline| now_ms >= deadline)
    }

    /// Whether `token` came from the scheduling that is still pending
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.is_pending() && token.0 == self.generation
    }

    /// Consume the deadline if it has passed. Any outstanding token stops
    /// matching.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        self.cancel();
        true
    }
}
