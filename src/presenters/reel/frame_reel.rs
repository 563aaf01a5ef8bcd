//! In-memory store of finished frames that a display loop can cycle through.
//!
//! The reel owns no timer; it only reports how long each frame should stay on
//! screen and which frame comes next.

use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::data::frame::{Frame, FrameError};
use crate::core::data::pixel_grid::PixelGrid;
use std::error::Error;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameReelError {
    ZeroFrameRate,
    GridMismatch { expected: PixelGrid, actual: PixelGrid },
    Frame(FrameError),
}

impl fmt::Display for FrameReelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFrameRate => write!(f, "frame rate must be greater than zero"),
            Self::GridMismatch { expected, actual } => {
                write!(
                    f,
                    "frame is {}x{} but the reel holds {}x{} frames",
                    actual.width(),
                    actual.height(),
                    expected.width(),
                    expected.height()
                )
            }
            Self::Frame(err) => write!(f, "frame error: {}", err),
        }
    }
}

impl Error for FrameReelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Frame(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FrameError> for FrameReelError {
    fn from(err: FrameError) -> Self {
        Self::Frame(err)
    }
}

#[derive(Debug, Clone)]
pub struct FrameReel {
    grid: PixelGrid,
    frame_rate: u32,
    frames: Vec<Frame>,
    index: usize,
}

impl FrameReel {
    pub fn new(grid: PixelGrid, frame_rate: u32) -> Result<Self, FrameReelError> {
        if frame_rate == 0 {
            return Err(FrameReelError::ZeroFrameRate);
        }

        Ok(Self {
            grid,
            frame_rate,
            frames: Vec::new(),
            index: 0,
        })
    }

    /// Appends a frame and makes it the current one.
    pub fn add_frame(&mut self, frame: Frame) -> Result<(), FrameReelError> {
        if frame.grid() != self.grid {
            return Err(FrameReelError::GridMismatch {
                expected: self.grid,
                actual: frame.grid(),
            });
        }

        self.frames.push(frame);
        self.index = self.frames.len() - 1;
        Ok(())
    }

    /// Appends raw row-major pixels, which must cover the whole grid.
    pub fn add_pixels(&mut self, pixels: Vec<Colour>) -> Result<(), FrameReelError> {
        self.add_frame(Frame::from_pixels(self.grid, pixels)?)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Frame> {
        self.frames.get(self.index)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Advances to the next frame, wrapping back to the first.
    pub fn next_frame(&mut self) -> Option<&Frame> {
        if self.frames.is_empty() {
            return None;
        }

        self.index = (self.index + 1) % self.frames.len();
        self.frames.get(self.index)
    }

    /// How long each frame stays on screen.
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate))
    }

    #[must_use]
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FramePresenterPort for FrameReel {
    fn present(&mut self, _index: usize, frame: &Frame) -> Result<(), Box<dyn Error>> {
        self.add_frame(frame.clone())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(grid: PixelGrid, colour: Colour) -> Frame {
        Frame::from_pixels(grid, vec![colour; grid.size()]).unwrap()
    }

    fn red() -> Colour {
        Colour { r: 255, g: 0, b: 0 }
    }

    fn green() -> Colour {
        Colour { r: 0, g: 255, b: 0 }
    }

    fn blue() -> Colour {
        Colour { r: 0, g: 0, b: 255 }
    }

    fn rgb_reel() -> FrameReel {
        let grid = PixelGrid::new(4, 3).unwrap();
        let mut reel = FrameReel::new(grid, 20).unwrap();

        for colour in [red(), green(), blue()] {
            reel.add_frame(solid(grid, colour)).unwrap();
        }

        reel
    }

    #[test]
    fn test_zero_frame_rate_is_rejected() {
        let grid = PixelGrid::new(4, 3).unwrap();

        assert_eq!(FrameReel::new(grid, 0).unwrap_err(), FrameReelError::ZeroFrameRate);
    }

    #[test]
    fn test_added_frame_becomes_current() {
        let reel = rgb_reel();

        assert_eq!(reel.len(), 3);
        assert_eq!(reel.current_index(), 2);
        assert_eq!(reel.current().unwrap().pixels()[0], blue());
    }

    #[test]
    fn test_next_frame_wraps_around() {
        let mut reel = rgb_reel();

        assert_eq!(reel.next_frame().unwrap().pixels()[0], red());
        assert_eq!(reel.next_frame().unwrap().pixels()[0], green());
        assert_eq!(reel.next_frame().unwrap().pixels()[0], blue());
        assert_eq!(reel.next_frame().unwrap().pixels()[0], red());
    }

    #[test]
    fn test_empty_reel_has_no_frames_to_cycle() {
        let mut reel = FrameReel::new(PixelGrid::new(2, 2).unwrap(), 10).unwrap();

        assert!(reel.is_empty());
        assert!(reel.current().is_none());
        assert!(reel.next_frame().is_none());
    }

    #[test]
    fn test_frame_delay_follows_frame_rate() {
        let reel = FrameReel::new(PixelGrid::new(2, 2).unwrap(), 20).unwrap();

        assert_eq!(reel.frame_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_add_pixels_rejects_wrong_length() {
        let mut reel = FrameReel::new(PixelGrid::new(2, 2).unwrap(), 20).unwrap();
        let result = reel.add_pixels(vec![red(); 5]);

        assert_eq!(
            result,
            Err(FrameReelError::Frame(FrameError::SizeMismatch {
                grid_size: 4,
                pixel_count: 5
            }))
        );
        assert!(reel.is_empty());
    }

    #[test]
    fn test_add_frame_rejects_other_grid() {
        let mut reel = FrameReel::new(PixelGrid::new(2, 2).unwrap(), 20).unwrap();
        let other = PixelGrid::new(4, 1).unwrap();

        assert_eq!(
            reel.add_frame(solid(other, red())),
            Err(FrameReelError::GridMismatch {
                expected: PixelGrid::new(2, 2).unwrap(),
                actual: other,
            })
        );
    }

    #[test]
    fn test_reel_as_presenter_collects_frames() {
        let grid = PixelGrid::new(2, 2).unwrap();
        let mut reel = FrameReel::new(grid, 20).unwrap();

        reel.present(0, &solid(grid, green())).unwrap();

        assert_eq!(reel.frames(), &[solid(grid, green())]);
    }
}
