use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::plot_points::plane::Plane;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel::Pixel;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::sampling::decorator::{ALPHA, LIGHTNESS_PERCENT, SATURATION_PERCENT, hue_for};
use crate::core::util::complex_to_pixel::complex_to_pixel;
use crate::core::util::hsl_to_colour::hsl_to_colour;

pub const AXIS_COLOUR: Colour = Colour { r: 51, g: 51, b: 51 };

#[derive(Debug, Error)]
pub enum PlotPointsError {
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// The RGB equivalent of a point's HSLA colour drawn over black.
#[must_use]
pub fn point_colour(z: Complex) -> Colour {
    hsl_to_colour(
        hue_for(z),
        f64::from(SATURATION_PERCENT) / 100.0,
        f64::from(LIGHTNESS_PERCENT) / 100.0,
    )
    .scaled(ALPHA)
}

/// Scatters `points` onto one plane as single pixels over a black background
/// with grey axes. Points outside `view` are skipped. Later points overwrite
/// earlier ones.
pub fn plot_points(
    points: &[Point],
    plane: Plane,
    view: ComplexRect,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, PlotPointsError> {
    let projected: Vec<(Pixel, Colour)> = points
        .par_iter()
        .filter_map(|point| {
            let pixel = complex_to_pixel(plane.value_of(point), view, pixel_rect)?;
            Some((pixel, point_colour(point.z)))
        })
        .collect();

    let mut buffer = PixelBuffer::new(pixel_rect);
    draw_axes(&mut buffer, view)?;

    for (pixel, colour) in projected {
        buffer.set_pixel(pixel, colour)?;
    }

    Ok(buffer)
}

fn draw_axes(buffer: &mut PixelBuffer, view: ComplexRect) -> Result<(), PixelBufferError> {
    let pixel_rect = buffer.pixel_rect();
    let top_left = pixel_rect.top_left();
    let bottom_right = pixel_rect.bottom_right();

    if let Some(axis) = complex_to_pixel(Complex::new(0.0, view.min().imag), view, pixel_rect) {
        for y in top_left.y..=bottom_right.y {
            buffer.set_pixel(Pixel { x: axis.x, y }, AXIS_COLOUR)?;
        }
    }

    if let Some(axis) = complex_to_pixel(Complex::new(view.min().real, 0.0), view, pixel_rect) {
        for x in top_left.x..=bottom_right.x {
            buffer.set_pixel(Pixel { x, y: axis.y }, AXIS_COLOUR)?;
        }
    }

    Ok(())
}
