use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;

pub const DEFAULT_PLOT_SIZE: u32 = 500;

// 500px views at 60px per unit (z) and 180px per unit (w).
const Z_PLANE_VIEW: ComplexRect = ComplexRect::from_ordered_bounds(
    Complex::new(-250.0 / 60.0, -150.0 / 60.0),
    Complex::new(250.0 / 60.0, 350.0 / 60.0),
);

const W_PLANE_VIEW: ComplexRect = ComplexRect::from_ordered_bounds(
    Complex::new(-250.0 / 180.0, -50.0 / 180.0),
    Complex::new(250.0 / 180.0, 450.0 / 180.0),
);

/// Which side of the map to draw: the samples or their images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    Z,
    W,
}

impl Plane {
    pub const ALL: &'static [Self] = &[Self::Z, Self::W];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Z => "z_plane",
            Self::W => "w_plane",
        }
    }

    #[must_use]
    pub const fn default_view(self) -> ComplexRect {
        match self {
            Self::Z => Z_PLANE_VIEW,
            Self::W => W_PLANE_VIEW,
        }
    }

    #[must_use]
    pub fn value_of(self, point: &Point) -> Complex {
        match self {
            Self::Z => point.z,
            Self::W => point.w,
        }
    }
}
