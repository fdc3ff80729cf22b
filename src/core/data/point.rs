use serde::Serialize;

use crate::core::data::complex::Complex;

/// A sample `z` that survived rejection, its image `w` under the conformal map,
/// and the display colour derived from `z`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub z: Complex,
    pub w: Complex,
    pub color: String,
}
