//! When to stop searching
//!
//! The searcher polls a [`StopCondition`] at every node. Interactive play
//! uses a [`Deadline`]; tests use [`NodeBudget`] or [`Never`] so results do
//! not depend on machine speed.

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Polled by the search; once it returns `true` the current depth is
/// abandoned.
pub trait StopCondition {
    fn should_stop(&self) -> bool;
}

/// Shared flag for stopping a search from another thread.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask any search holding this token to stop
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Re-arm the token for the next search
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Wall-clock budget, also honoring a [`CancelToken`]
#[derive(Debug, Clone)]
pub struct Deadline {
    start: Instant,
    limit: Duration,
    cancel: CancelToken,
}

impl Deadline {
    /// Budget of `limit` starting now
    pub fn new(limit: Duration, cancel: CancelToken) -> Self {
        Self {
            start: Instant::now(),
            limit,
            cancel,
        }
    }
}

impl StopCondition for Deadline {
    #[inline]
    fn should_stop(&self) -> bool {
        self.cancel.is_cancelled() || self.start.elapsed() >= self.limit
    }
}

/// Stops after a fixed number of polls
#[derive(Debug)]
pub struct NodeBudget {
    remaining: Cell<u64>,
}

impl NodeBudget {
    pub fn new(polls: u64) -> Self {
        Self {
            remaining: Cell::new(polls),
        }
    }
}

impl StopCondition for NodeBudget {
    fn should_stop(&self) -> bool {
        let left = self.remaining.get();
        if left == 0 {
            return true;
        }
        self.remaining.set(left - 1);
        false
    }
}

/// Never stops; the search runs to its depth limit
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl StopCondition for Never {
    #[inline]
    fn should_stop(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_shared_between_clones() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!token.is_cancelled());

        other.cancel();
        assert!(token.is_cancelled());

        token.reset();
        assert!(!other.is_cancelled());
    }

    #[test]
    fn test_deadline_zero_limit_stops() {
        let deadline = Deadline::new(Duration::ZERO, CancelToken::new());
        assert!(deadline.should_stop());
    }

    #[test]
    fn test_deadline_honors_cancel() {
        let token = CancelToken::new();
        let deadline = Deadline::new(Duration::from_secs(3600), token.clone());
        assert!(!deadline.should_stop());

        token.cancel();
        assert!(deadline.should_stop());
    }

    #[test]
    fn test_node_budget_counts_polls() {
        let budget = NodeBudget::new(2);
        assert!(!budget.should_stop());
        assert!(!budget.should_stop());
        assert!(budget.should_stop());
        assert!(budget.should_stop());
    }

    #[test]
    fn test_never() {
        assert!(!Never.should_stop());
    }
}
