use std::num::NonZeroUsize;

/// Workers for a run: one per available execution unit, at least `min_workers`,
/// and never more than there are points to produce.
pub fn calculate_worker_count(available: NonZeroUsize, min_workers: usize, requested: usize) -> usize {
    available.get().max(min_workers).min(requested)
}

pub fn calculate_workers_for_request(min_workers: usize, requested: usize) -> usize {
    let available = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);

    calculate_worker_count(available, min_workers, requested)
}
