use thiserror::Error;

use crate::core::data::pixel::Pixel;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelRect {
    top_left: Pixel,
    bottom_right: Pixel,
}

impl PixelRect {
    pub fn new(top_left: Pixel, bottom_right: Pixel) -> Result<Self, PixelRectError> {
        let dx = (bottom_right.x as i64) - (top_left.x as i64);
        let dy = (bottom_right.y as i64) - (top_left.y as i64);

        let width = (dx + if dx >= 0 { 1 } else { -1 }) as i32;
        let height = (dy + if dy >= 0 { 1 } else { -1 }) as i32;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Rect anchored at the origin with the given dimensions.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        Self::new(
            Pixel { x: 0, y: 0 },
            Pixel {
                x: width as i32 - 1,
                y: height as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Pixel {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Pixel {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Pixel) -> bool {
        self.top_left.x <= pixel.x
            && self.top_left.y <= pixel.y
            && self.bottom_right.x >= pixel.x
            && self.bottom_right.y >= pixel.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}
