use crate::core::data::complex::{Complex, I, ONE};
use crate::core::mapping::errors::MappingError;

/// Below this `|iz + 1|` the map is treated as undefined.
pub const SINGULARITY_EPSILON: f64 = 1e-4;

/// Computes `w = i * (iz / (iz + 1))^(1/4)` using the principal fourth root.
///
/// The map has a pole at `z = i`. Points within [`SINGULARITY_EPSILON`] of it
/// are rejected up front, and any result that is not finite is rejected after
/// the fact, which also catches the infinite sentinel from a zero division.
pub fn map_z_to_w(z: Complex) -> Result<Complex, MappingError> {
    let iz = z * I;
    let denominator = iz + ONE;

    let modulus = denominator.modulus();
    if modulus < SINGULARITY_EPSILON {
        return Err(MappingError::NearSingularity { modulus });
    }

    let w = (iz / denominator).fourth_root() * I;

    if !w.is_finite() {
        return Err(MappingError::NonFinite);
    }

    Ok(w)
}
