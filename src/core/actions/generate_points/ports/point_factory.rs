use std::error::Error;

use rand::Rng;

use crate::core::data::point::Point;

/// One "try to produce a point" step, driven by a caller-owned RNG.
///
/// Implementations hold no mutable state, so engines can share one factory
/// across workers as long as each worker brings its own RNG.
pub trait PointFactory {
    type Failure: Error;

    fn try_produce<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Point, Self::Failure>;
}
