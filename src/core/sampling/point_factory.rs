use rand::Rng;
use thiserror::Error;

use crate::core::actions::generate_points::ports::point_factory::PointFactory;
use crate::core::data::point::Point;
use crate::core::mapping::conformal_map::map_z_to_w;
use crate::core::mapping::errors::MappingError;
use crate::core::sampling::decorator::Decorator;
use crate::core::sampling::sampling_domain::SamplingDomain;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Rejection {
    #[error("sample fell inside the exclusion band")]
    Excluded,
    #[error(transparent)]
    Undefined(#[from] MappingError),
}

/// Sample, reject, map, decorate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConformalPointFactory {
    domain: SamplingDomain,
    decorator: Decorator,
}

impl ConformalPointFactory {
    #[must_use]
    pub fn new(domain: SamplingDomain, decorator: Decorator) -> Self {
        Self { domain, decorator }
    }

    #[must_use]
    pub fn domain(&self) -> SamplingDomain {
        self.domain
    }
}

impl PointFactory for ConformalPointFactory {
    type Failure = Rejection;

    fn try_produce<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Point, Self::Failure> {
        let z = self.domain.sample(rng);

        if self.domain.is_excluded(z) {
            return Err(Rejection::Excluded);
        }

        let w = map_z_to_w(z)?;
        let color = self.decorator.decorate(z, w);

        Ok(Point { z, w, color })
    }
}
