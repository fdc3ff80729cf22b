use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel::Pixel;
use crate::core::data::pixel_rect::PixelRect;

/// Nearest pixel to `value` when `view` is stretched over `pixel_rect`, or
/// `None` if `value` lies outside the view.
///
/// Row 0 shows the largest imaginary part, so the image reads like the
/// complex plane.
pub fn complex_to_pixel(value: Complex, view: ComplexRect, pixel_rect: PixelRect) -> Option<Pixel> {
    if !view.contains_point(value) {
        return None;
    }

    let relative_x = (value.real - view.min().real) / view.width();
    let relative_y = (view.max().imag - value.imag) / view.height();

    Some(Pixel {
        x: pixel_rect.top_left().x + (relative_x * (pixel_rect.width() - 1) as f64).round() as i32,
        y: pixel_rect.top_left().y + (relative_y * (pixel_rect.height() - 1) as f64).round() as i32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ComplexRect {
        ComplexRect::new(Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).unwrap()
    }

    fn pixel_rect() -> PixelRect {
        PixelRect::with_size(101, 101).unwrap()
    }

    #[test]
    fn test_top_left_is_min_real_max_imag() {
        assert_eq!(
            complex_to_pixel(Complex::new(-1.0, 1.0), view(), pixel_rect()),
            Some(Pixel { x: 0, y: 0 })
        );
    }

    #[test]
    fn test_bottom_right_is_max_real_min_imag() {
        assert_eq!(
            complex_to_pixel(Complex::new(1.0, -1.0), view(), pixel_rect()),
            Some(Pixel { x: 100, y: 100 })
        );
    }

    #[test]
    fn test_center() {
        assert_eq!(
            complex_to_pixel(Complex::new(0.0, 0.0), view(), pixel_rect()),
            Some(Pixel { x: 50, y: 50 })
        );
    }

    #[test]
    fn test_offset_pixel_rect() {
        let pixel_rect = PixelRect::new(Pixel { x: 10, y: 20 }, Pixel { x: 110, y: 120 }).unwrap();

        assert_eq!(
            complex_to_pixel(Complex::new(-1.0, 1.0), view(), pixel_rect),
            Some(Pixel { x: 10, y: 20 })
        );
    }

    #[test]
    fn test_outside_view_is_none() {
        assert_eq!(complex_to_pixel(Complex::new(1.5, 0.0), view(), pixel_rect()), None);
        assert_eq!(complex_to_pixel(Complex::new(0.0, -1.01), view(), pixel_rect()), None);
    }
}
