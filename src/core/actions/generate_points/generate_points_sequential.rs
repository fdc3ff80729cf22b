use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::core::actions::generate_points::engine_config::{EngineConfig, PREALLOCATION_LIMIT};
use crate::core::actions::generate_points::ports::point_factory::PointFactory;
use crate::core::data::batch::{Batch, GenerationMode};

/// Generates up to `requested` points on the calling thread.
///
/// Every try counts against `requested * sequential_attempt_multiplier`,
/// successful or not. When that budget runs out first the batch comes back
/// short; that is a valid result, not an error.
pub fn generate_points_sequential<F: PointFactory>(
    requested: usize,
    factory: &F,
    config: &EngineConfig,
) -> Batch {
    let start = Instant::now();
    let mut rng = StdRng::from_os_rng();
    let attempt_budget = config.sequential_attempt_budget(requested);

    let mut points = Vec::with_capacity(requested.min(PREALLOCATION_LIMIT));
    let mut attempts = 0;

    while points.len() < requested && attempts < attempt_budget {
        attempts += 1;

        if let Ok(point) = factory.try_produce(&mut rng) {
            points.push(point);
        }
    }

    let batch = Batch::new(
        GenerationMode::Sequential,
        points,
        requested,
        attempts,
        1,
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
        attempts,
        elapsed_ms = batch.elapsed().as_millis() as u64,
        "generated points"
    );

    batch
}
