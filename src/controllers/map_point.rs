use thiserror::Error;
use tracing::info;

use crate::controllers::responses::MapPointResponse;
use crate::core::data::complex::Complex;
use crate::core::mapping::conformal_map::map_z_to_w;
use crate::core::mapping::errors::MappingError;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MapPointError {
    #[error("mapping undefined for this point ({re}, {im}): {source}")]
    Undefined {
        re: f64,
        im: f64,
        source: MappingError,
    },
}

/// Maps a single `(re, im)` pair, bypassing sampling and exclusion.
pub fn map_point(re: f64, im: f64) -> Result<MapPointResponse, MapPointError> {
    info!(re, im, "map-point request");

    let w = map_z_to_w(Complex::new(re, im))
        .map_err(|source| MapPointError::Undefined { re, im, source })?;

    Ok(MapPointResponse { w })
}
