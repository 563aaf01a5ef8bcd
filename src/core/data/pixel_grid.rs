use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelGridError {
    InvalidSize { width: usize, height: usize },
}

impl fmt::Display for PixelGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel grid size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelGridError {}

/// Fixed pixel dimensions of a rendering session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize) -> Result<Self, PixelGridError> {
        if width == 0 || height == 0 {
            return Err(PixelGridError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major index of `point`, `None` when it falls outside the grid.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.contains_point(point)
            .then(|| point.y * self.width + point.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_grid_new_valid() {
        let grid = PixelGrid::new(160, 120).unwrap();

        assert_eq!(grid.width(), 160);
        assert_eq!(grid.height(), 120);
        assert_eq!(grid.size(), 19200);
    }

    #[test]
    fn test_pixel_grid_rejects_empty_dimensions() {
        assert_eq!(
            PixelGrid::new(0, 10),
            Err(PixelGridError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            PixelGrid::new(10, 0),
            Err(PixelGridError::InvalidSize { width: 10, height: 0 })
        );
        assert!(PixelGrid::new(1, 1).is_ok());
    }

    #[test]
    fn test_index_of_is_row_major() {
        let grid = PixelGrid::new(4, 3).unwrap();

        assert_eq!(grid.index_of(Point { x: 0, y: 0 }), Some(0));
        assert_eq!(grid.index_of(Point { x: 3, y: 0 }), Some(3));
        assert_eq!(grid.index_of(Point { x: 0, y: 1 }), Some(4));
        assert_eq!(grid.index_of(Point { x: 3, y: 2 }), Some(11));
        assert_eq!(grid.index_of(Point { x: 4, y: 0 }), None);
        assert_eq!(grid.index_of(Point { x: 0, y: 3 }), None);
    }

    #[test]
    fn test_error_display() {
        let err = PixelGridError::InvalidSize { width: 0, height: 5 };

        assert_eq!(format!("{}", err), "pixel grid size must be positive: 0x5");
    }
}
