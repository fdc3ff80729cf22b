pub const SEQUENTIAL_ATTEMPT_MULTIPLIER: usize = 15;
pub const PARALLEL_ATTEMPT_MULTIPLIER: usize = 20;
pub const CHANNEL_CAPACITY_PER_WORKER: usize = 4;
pub const MIN_WORKERS: usize = 2;

/// Upper bound on the up-front allocation for a batch. Larger batches still
/// grow as points arrive.
pub(crate) const PREALLOCATION_LIMIT: usize = 1 << 20;

/// Tuning shared by both engines. The multipliers are empirical and kept
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub sequential_attempt_multiplier: usize,
    pub parallel_attempt_multiplier: usize,
    pub channel_capacity_per_worker: usize,
    pub min_workers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sequential_attempt_multiplier: SEQUENTIAL_ATTEMPT_MULTIPLIER,
            parallel_attempt_multiplier: PARALLEL_ATTEMPT_MULTIPLIER,
            channel_capacity_per_worker: CHANNEL_CAPACITY_PER_WORKER,
            min_workers: MIN_WORKERS,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn sequential_attempt_budget(&self, requested: usize) -> usize {
        requested.saturating_mul(self.sequential_attempt_multiplier)
    }

    #[must_use]
    pub fn parallel_attempt_budget(&self, requested: usize) -> usize {
        requested.saturating_mul(self.parallel_attempt_multiplier)
    }

    #[must_use]
    pub fn channel_capacity(&self, workers: usize) -> usize {
        workers.saturating_mul(self.channel_capacity_per_worker)
    }
}
