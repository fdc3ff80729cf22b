use std::f64::consts::PI;
use std::hint::black_box;

use crate::core::data::complex::Complex;

pub const SYNTHETIC_WORK_ITERATIONS: u32 = 250;

pub const SATURATION_PERCENT: u32 = 100;
pub const LIGHTNESS_PERCENT: u32 = 60;
pub const ALPHA: f64 = 0.8;

/// Hue in degrees, `[0, 360]`, taken from the angle of `z`.
#[must_use]
pub fn hue_for(z: Complex) -> f64 {
    ((z.argument() + PI) / (2.0 * PI)) * 360.0
}

#[must_use]
pub fn color_for(z: Complex) -> String {
    format!(
        "hsla({:.2}, {}%, {}%, {})",
        hue_for(z),
        SATURATION_PERCENT,
        LIGHTNESS_PERCENT,
        ALPHA
    )
}

/// Fixed per-point floating point work seeded from `w`.
#[must_use]
pub fn synthetic_work(w: Complex, iterations: u32) -> f64 {
    (0..iterations).fold(0.0, |acc, i| {
        let f = 0.0001 * f64::from(i + 1);
        acc + (w.real * f).sin() + (w.imag * f).cos()
    })
}

/// Colours a mapped point and charges it a constant amount of CPU time, the
/// same for every engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decorator {
    work_iterations: u32,
}

impl Default for Decorator {
    fn default() -> Self {
        Self::new(SYNTHETIC_WORK_ITERATIONS)
    }
}

impl Decorator {
    #[must_use]
    pub fn new(work_iterations: u32) -> Self {
        Self { work_iterations }
    }

    #[must_use]
    pub fn work_iterations(&self) -> u32 {
        self.work_iterations
    }

    #[must_use]
    pub fn decorate(&self, z: Complex, w: Complex) -> String {
        let color = color_for(z);
        black_box(synthetic_work(black_box(w), self.work_iterations));
        color
    }
}
