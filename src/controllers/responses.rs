use serde::Serialize;

use crate::core::data::batch::{Batch, GenerationMode};
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

/// Wire shape of a compute request's result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResponse {
    pub mode: GenerationMode,
    pub duration_ms: u64,
    pub points: Vec<Point>,
    pub count: usize,
    /// The caller's count before normalisation.
    pub requested: i64,
}

impl ComputeResponse {
    #[must_use]
    pub fn from_batch(batch: Batch, requested: i64) -> Self {
        let mode = batch.mode();
        let duration_ms = u64::try_from(batch.elapsed().as_millis()).unwrap_or(u64::MAX);
        let count = batch.produced_count();

        Self {
            mode,
            duration_ms,
            points: batch.into_points(),
            count,
            requested,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPointResponse {
    pub w: Complex,
}
