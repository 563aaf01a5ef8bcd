use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::PixelGrid;

/// A rectangular window onto the complex plane.
///
/// Only the width is stored; the height follows from the aspect ratio of the
/// pixel grid the viewport is rendered into.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Viewport {
    pub centre: Complex,
    pub width: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(centre: Complex, width: f64) -> Self {
        Self { centre, width }
    }

    /// Distance in the plane between two neighbouring pixels.
    #[must_use]
    pub fn pixel_step(&self, grid: PixelGrid) -> f64 {
        self.width / grid.width() as f64
    }

    #[must_use]
    pub fn height(&self, grid: PixelGrid) -> f64 {
        self.width * grid.height() as f64 / grid.width() as f64
    }

    /// Plane coordinate of pixel (0, 0).
    #[must_use]
    pub fn top_left(&self, grid: PixelGrid) -> Complex {
        let d = self.pixel_step(grid);

        Complex {
            real: self.centre.real - (grid.width() as f64 / 2.0) * d,
            imag: self.centre.imag - (grid.height() as f64 / 2.0) * d,
        }
    }

    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.centre.real, self.centre.imag, self.width)
    }
}

impl From<(f64, f64, f64)> for Viewport {
    fn from((real, imag, width): (f64, f64, f64)) -> Self {
        Self {
            centre: Complex { real, imag },
            width,
        }
    }
}
