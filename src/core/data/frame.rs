use crate::core::data::colour::Colour;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    SizeMismatch { grid_size: usize, pixel_count: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                grid_size,
                pixel_count,
            } => {
                write!(
                    f,
                    "pixel grid size {} does not match pixel count {}",
                    grid_size, pixel_count
                )
            }
        }
    }
}

impl Error for FrameError {}

/// One finished image: row-major colours for every pixel of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    grid: PixelGrid,
    pixels: Vec<Colour>,
}

impl Frame {
    pub fn from_pixels(grid: PixelGrid, pixels: Vec<Colour>) -> Result<Self, FrameError> {
        if grid.size() != pixels.len() {
            return Err(FrameError::SizeMismatch {
                grid_size: grid.size(),
                pixel_count: pixels.len(),
            });
        }

        Ok(Self { grid, pixels })
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        self.grid.index_of(point).map(|index| self.pixels[index])
    }

    /// Packed `RGBRGB...` bytes, the layout PPM and most framebuffers expect.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|colour| colour.to_array()).collect()
    }

    #[must_use]
    pub fn into_pixels(self) -> Vec<Colour> {
        self.pixels
    }
}
