use rand::Rng;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;

pub const DEFAULT_REGION: ComplexRect = ComplexRect::from_ordered_bounds(
    Complex::new(-4.0, -2.0),
    Complex::new(4.0, 5.0),
);

pub const DEFAULT_EXCLUSION: ExclusionBand = ExclusionBand {
    half_width: 0.05,
    imag_min: -0.05,
    imag_max: 1.05,
};

/// Open vertical strip `|re| < half_width, imag_min < im < imag_max`.
///
/// The default strip covers the segment from 0 to i, whose far end is the
/// pole of the conformal map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionBand {
    pub half_width: f64,
    pub imag_min: f64,
    pub imag_max: f64,
}

impl ExclusionBand {
    #[must_use]
    pub fn contains(&self, z: Complex) -> bool {
        z.real.abs() < self.half_width && z.imag > self.imag_min && z.imag < self.imag_max
    }
}

/// Where candidate samples are drawn from, and which of them are thrown away
/// before mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingDomain {
    region: ComplexRect,
    exclusion: ExclusionBand,
}

impl Default for SamplingDomain {
    fn default() -> Self {
        Self::new(DEFAULT_REGION, DEFAULT_EXCLUSION)
    }
}

impl SamplingDomain {
    #[must_use]
    pub fn new(region: ComplexRect, exclusion: ExclusionBand) -> Self {
        Self { region, exclusion }
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn exclusion(&self) -> ExclusionBand {
        self.exclusion
    }

    /// Draws real and imaginary parts independently and uniformly from the
    /// half-open region `[min, max)`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        let min = self.region.min();

        Complex {
            real: min.real + rng.random::<f64>() * self.region.width(),
            imag: min.imag + rng.random::<f64>() * self.region.height(),
        }
    }

    #[must_use]
    pub fn is_excluded(&self, z: Complex) -> bool {
        self.exclusion.contains(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_region_is_valid() {
        let rebuilt = ComplexRect::new(DEFAULT_REGION.min(), DEFAULT_REGION.max());

        assert_eq!(rebuilt, Ok(DEFAULT_REGION));
    }

    #[test]
    fn test_samples_stay_inside_region() {
        let domain = SamplingDomain::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10_000 {
            let z = domain.sample(&mut rng);

            assert!(z.real >= -4.0 && z.real < 4.0, "real part out of range: {}", z.real);
            assert!(z.imag >= -2.0 && z.imag < 5.0, "imag part out of range: {}", z.imag);
        }
    }

    #[test]
    fn test_samples_cover_region() {
        let domain = SamplingDomain::default();
        let mut rng = StdRng::seed_from_u64(11);
        let samples: Vec<Complex> = (0..10_000).map(|_| domain.sample(&mut rng)).collect();

        assert!(samples.iter().any(|z| z.real < -3.5));
        assert!(samples.iter().any(|z| z.real > 3.5));
        assert!(samples.iter().any(|z| z.imag < -1.5));
        assert!(samples.iter().any(|z| z.imag > 4.5));
    }

    #[test]
    fn test_exclusion_band_interior() {
        let domain = SamplingDomain::default();

        assert!(domain.is_excluded(Complex::new(0.0, 0.0)));
        assert!(domain.is_excluded(Complex::new(0.0, 1.0)));
        assert!(domain.is_excluded(Complex::new(-0.049, 1.049)));
    }

    #[test]
    fn test_exclusion_band_boundary_is_open() {
        let domain = SamplingDomain::default();

        assert!(!domain.is_excluded(Complex::new(0.05, 0.5)));
        assert!(!domain.is_excluded(Complex::new(-0.05, 0.5)));
        assert!(!domain.is_excluded(Complex::new(0.0, -0.05)));
        assert!(!domain.is_excluded(Complex::new(0.0, 1.05)));
    }

    #[test]
    fn test_exclusion_band_exterior() {
        let domain = SamplingDomain::default();

        assert!(!domain.is_excluded(Complex::new(1.0, 0.5)));
        assert!(!domain.is_excluded(Complex::new(0.0, 2.0)));
        assert!(!domain.is_excluded(Complex::new(0.0, -1.0)));
    }
}
