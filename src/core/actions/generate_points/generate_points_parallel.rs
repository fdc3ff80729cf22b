use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::Sender;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::actions::generate_points::engine_config::{EngineConfig, PREALLOCATION_LIMIT};
use crate::core::actions::generate_points::ports::point_factory::PointFactory;
use crate::core::actions::generate_points::shared_quota::SharedQuota;
use crate::core::data::batch::{Batch, GenerationMode};
use crate::core::data::point::Point;
use crate::core::util::calculate_worker_count::calculate_workers_for_request;

#[derive(Debug, Error)]
pub enum GeneratePointsError {
    #[error("failed to start point workers: {0}")]
    WorkerPool(#[from] ThreadPoolBuildError),
}

/// Generates up to `requested` points on a dedicated pool of worker threads.
///
/// Workers race toward the shared target under a shared attempt budget of
/// `requested * parallel_attempt_multiplier`. Each worker checks both on every
/// iteration, so the run always terminates. A point is only published after
/// its worker wins a slot below the target, so the batch can come back short
/// but never over-full.
///
/// Points arrive in channel order, which differs from run to run.
pub fn generate_points_parallel<F>(
    requested: usize,
    factory: Arc<F>,
    config: &EngineConfig,
) -> Result<Batch, GeneratePointsError>
where
    F: PointFactory + Send + Sync + 'static,
{
    let start = Instant::now();

    if requested == 0 {
        return Ok(Batch::new(
            GenerationMode::Parallel,
            Vec::new(),
            0,
            0,
            0,
            start.elapsed(),
        ));
    }

    let workers = calculate_workers_for_request(config.min_workers, requested);
    let attempt_budget = config.parallel_attempt_budget(requested);
    let quota = Arc::new(SharedQuota::new(requested, attempt_budget));

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("point-worker-{}", index))
        .build()?;

    let (sender, receiver) = crossbeam_channel::bounded(config.channel_capacity(workers));
    let base_seed: u64 = rand::random();

    for worker_id in 0..workers {
        let factory = Arc::clone(&factory);
        let quota = Arc::clone(&quota);
        let sender = sender.clone();
        let seed = base_seed.wrapping_add(worker_id as u64);

        pool.spawn(move || run_worker(worker_id, seed, factory.as_ref(), &quota, &sender));
    }

    // The workers now hold the only senders; the channel closes when the last
    // of them returns.
    drop(sender);

    let mut points = Vec::with_capacity(requested.min(PREALLOCATION_LIMIT));
    points.extend(receiver.iter());

    let batch = Batch::new(
        GenerationMode::Parallel,
        points,
        requested,
        quota.attempts(),
        workers,
        start.elapsed(),
    );

    if batch.is_short() {
        debug!(
            requested,
            produced = batch.produced_count(),
            attempt_budget,
            "attempt budget exhausted before quota"
        );
    }

    info!(
        mode = %batch.mode(),
        requested,
        produced = batch.produced_count(),
        attempts = batch.attempts(),
        workers,
        elapsed_ms = batch.elapsed().as_millis() as u64,
        "generated points"
    );

    Ok(batch)
}

fn run_worker<F: PointFactory>(
    worker_id: usize,
    seed: u64,
    factory: &F,
    quota: &SharedQuota,
    sender: &Sender<Point>,
) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut published = 0usize;

    loop {
        if quota.is_filled() {
            break;
        }

        if !quota.begin_attempt() {
            break;
        }

        let Ok(point) = factory.try_produce(&mut rng) else {
            continue;
        };

        // Another worker may have filled the quota since the check above.
        if !quota.claim_slot() {
            break;
        }

        if sender.send(point).is_err() {
            break;
        }

        published += 1;
    }

    debug!(worker_id, published, "point worker finished");
}
