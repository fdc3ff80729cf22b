use std::sync::Arc;

use tracing::info;

use crate::controllers::normalize_count::normalize_count;
use crate::controllers::responses::ComputeResponse;
use crate::core::actions::generate_points::engine_config::EngineConfig;
use crate::core::actions::generate_points::generate_points_parallel::{
    GeneratePointsError, generate_points_parallel,
};
use crate::core::actions::generate_points::generate_points_sequential::generate_points_sequential;
use crate::core::data::batch::{Batch, GenerationMode};
use crate::core::sampling::point_factory::ConformalPointFactory;

/// Runs the engine for `mode` with the standard conformal point factory.
pub fn run_engine(
    mode: GenerationMode,
    count: usize,
    config: &EngineConfig,
) -> Result<Batch, GeneratePointsError> {
    let factory = ConformalPointFactory::default();

    match mode {
        GenerationMode::Sequential => Ok(generate_points_sequential(count, &factory, config)),
        GenerationMode::Parallel => generate_points_parallel(count, Arc::new(factory), config),
    }
}

pub fn compute(
    mode: GenerationMode,
    requested: i64,
    config: &EngineConfig,
) -> Result<ComputeResponse, GeneratePointsError> {
    let count = normalize_count(requested);
    info!(%mode, requested, normalized = count, "compute request");

    let batch = run_engine(mode, count, config)?;

    Ok(ComputeResponse::from_batch(batch, requested))
}
