use std::sync::atomic::{AtomicUsize, Ordering};

// Only counters live here; the points themselves travel through the channel,
// which provides its own synchronisation, so relaxed ordering is enough.

/// Lock-free accounting shared by the parallel workers: how many points have
/// been claimed against the target, and how many tries have been spent from
/// the attempt budget.
#[derive(Debug)]
pub(crate) struct SharedQuota {
    target: usize,
    attempt_budget: usize,
    produced: AtomicUsize,
    attempts: AtomicUsize,
}

impl SharedQuota {
    pub(crate) fn new(target: usize, attempt_budget: usize) -> Self {
        Self {
            target,
            attempt_budget,
            produced: AtomicUsize::new(0),
            attempts: AtomicUsize::new(0),
        }
    }

    pub(crate) fn is_filled(&self) -> bool {
        self.produced.load(Ordering::Relaxed) >= self.target
    }

    /// Spends one try. Returns `false` once the post-increment count exceeds
    /// the budget.
    pub(crate) fn begin_attempt(&self) -> bool {
        self.attempts.fetch_add(1, Ordering::Relaxed) < self.attempt_budget
    }

    /// Claims a slot for a point that was just produced. Returns `false` when
    /// another worker already took the last slot; the caller must drop the
    /// point.
    pub(crate) fn claim_slot(&self) -> bool {
        self.produced.fetch_add(1, Ordering::Relaxed) < self.target
    }

    /// Tries actually granted, excluding the overshoot of workers that found
    /// the budget already spent.
    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed).min(self.attempt_budget)
    }
}
