use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::frame::Frame;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes `frame` as a binary PPM image.
pub fn write_ppm(frame: &Frame, mut writer: impl Write) -> std::io::Result<()> {
    let grid = frame.grid();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&frame.to_rgb_bytes())?;
    writer.flush()
}

/// Saves each frame as `frame_NNN.ppm` inside an output directory.
#[derive(Debug, Clone)]
pub struct PpmFilePresenter {
    output_dir: PathBuf,
}

impl FramePresenterPort for PpmFilePresenter {
    fn present(&mut self, index: usize, frame: &Frame) -> Result<(), Box<dyn Error>> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.frame_path(index);
        write_ppm(frame, BufWriter::new(File::create(&path)?))?;
        tracing::debug!(path = %path.display(), "wrote frame");

        Ok(())
    }
}

impl PpmFilePresenter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("frame_{:03}.ppm", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_grid::PixelGrid;

    fn two_pixel_frame() -> Frame {
        Frame::from_pixels(
            PixelGrid::new(2, 1).unwrap(),
            vec![Colour { r: 255, g: 0, b: 0 }, Colour { r: 0, g: 0, b: 255 }],
        )
        .unwrap()
    }

    #[test]
    fn test_write_ppm_header_and_body() {
        let mut out = Vec::new();
        write_ppm(&two_pixel_frame(), &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_frame_path_is_zero_padded() {
        let presenter = PpmFilePresenter::new("output");

        assert_eq!(presenter.frame_path(7), Path::new("output").join("frame_007.ppm"));
        assert_eq!(presenter.frame_path(1234), Path::new("output").join("frame_1234.ppm"));
    }

    #[test]
    fn test_present_writes_file() {
        let dir = std::env::temp_dir().join(format!("mandelbrot_zoom_ppm_{}", std::process::id()));
        let mut presenter = PpmFilePresenter::new(&dir);

        presenter.present(3, &two_pixel_frame()).unwrap();

        let written = std::fs::read(presenter.frame_path(3)).unwrap();
        assert!(written.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(written.len(), b"P6\n2 1\n255\n".len() + 6);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
