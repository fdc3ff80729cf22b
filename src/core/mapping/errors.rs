use thiserror::Error;

/// Why the conformal map has no value at a point. Both cases are expected
/// outcomes of sampling, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MappingError {
    #[error("mapping undefined near singularity (|iz + 1| = {modulus:e})")]
    NearSingularity { modulus: f64 },
    #[error("mapping produced a non-finite value")]
    NonFinite,
}
