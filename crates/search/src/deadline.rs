//! Cooperative deadline handling for time-bounded search.
//!
//! A search runs under a hard wall-clock budget supplied by the caller.
//! The engine polls the deadline at the top of every recursive call and
//! aborts by returning [`SearchTimeout`], which unwinds the whole
//! recursion through `?` without any per-frame bookkeeping.

use std::time::Duration;

use thiserror::Error;

/// Raised when the time budget runs out mid-search.
///
/// Carries no payload: the state snapshots owned by the unwound frames
/// are dropped and the caller falls back to its last completed result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search aborted: time budget exhausted")]
pub struct SearchTimeout;

/// A read-only time budget: a caller-supplied query for the remaining
/// time plus a safety margin.
///
/// The query is the only state shared across search frames, and it is
/// never written. [`check`](Deadline::check) signals [`SearchTimeout`]
/// once the remaining time drops below the margin, which leaves the
/// margin itself for unwinding and returning to the caller.
pub struct Deadline<F> {
    time_left: F,
    margin: Duration,
}

impl Deadline<fn() -> Duration> {
    /// A deadline that never expires, for searches without a time budget.
    pub fn unbounded() -> Self {
        fn forever() -> Duration {
            Duration::MAX
        }
        Deadline {
            time_left: forever,
            margin: Duration::ZERO,
        }
    }
}

impl<F: Fn() -> Duration> Deadline<F> {
    /// Wraps a remaining-time query with the given safety margin.
    pub fn new(time_left: F, margin: Duration) -> Self {
        Deadline { time_left, margin }
    }

    /// Returns `Err(SearchTimeout)` once the remaining time is below the
    /// margin, `Ok(())` otherwise.
    #[inline]
    pub fn check(&self) -> Result<(), SearchTimeout> {
        if (self.time_left)() < self.margin {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }
}
