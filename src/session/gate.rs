//! Input gate: whether the UI currently accepts a move.
//!
//! Time is passed in rather than read, so a closed gate is just a deadline
//! and cancelling it is an assignment.

use std::time::Instant;

/// Input enablement owned by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputGate {
    /// Moves are accepted.
    #[default]
    Open,
    /// Moves are ignored until the deadline passes.
    ClosedUntil(Instant),
    /// Moves are ignored until explicitly re-opened.
    Closed,
}

impl InputGate {
    /// Check if a move arriving at `now` should be dispatched.
    #[must_use]
    pub fn is_open(&self, now: Instant) -> bool {
        match *self {
            InputGate::Open => true,
            InputGate::ClosedUntil(deadline) => now >= deadline,
            InputGate::Closed => false,
        }
    }

    /// Reject input until `deadline`.
    pub fn close_until(&mut self, deadline: Instant) {
        *self = InputGate::ClosedUntil(deadline);
    }

    /// Reject input until `open()` is called.
    pub fn close(&mut self) {
        *self = InputGate::Closed;
    }

    /// Accept input again, cancelling any deadline.
    pub fn open(&mut self) {
        *self = InputGate::Open;
    }
}
