use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn extension(&self) -> &str {
        "ppm"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);
        write_ppm(&mut file, buffer)?;
        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

fn write_ppm(out: &mut impl Write, buffer: &PixelBuffer) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", width, height)?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel::Pixel;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_write_ppm_header_and_body() {
        let mut buffer = PixelBuffer::new(PixelRect::with_size(2, 2).unwrap());
        buffer.set_pixel(Pixel { x: 1, y: 0 }, Colour { r: 9, g: 8, b: 7 }).unwrap();
        let mut out = Vec::new();

        write_ppm(&mut out, &buffer).unwrap();

        let mut expected = b"P6\n2 2\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 9, 8, 7, 0, 0, 0, 0, 0, 0]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_writes_file() {
        let buffer = PixelBuffer::new(PixelRect::with_size(3, 2).unwrap());
        let filepath = std::env::temp_dir().join("conformal_sampler_ppm_presenter_test.ppm");

        PpmFilePresenter::new().present(&buffer, &filepath).unwrap();

        let written = std::fs::read(&filepath).unwrap();
        std::fs::remove_file(&filepath).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), "P6\n3 2\n255\n".len() + 18);
    }
}
