use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
use crate::core::data::viewport::Viewport;
use crate::core::flight::{EasePath, zoom_toward};
use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, MandelbrotConfigError};
use std::error::Error;
use std::fmt;

pub const DEFAULT_PIXEL_WIDTH: usize = 160;
pub const DEFAULT_PIXEL_HEIGHT: usize = 120;
pub const DEFAULT_FRAME_RATE: u32 = 20;
pub const DEFAULT_FRAME_COUNT: usize = 60;

/// Seahorse valley, deep enough to show spirals at the end of the default zoom.
pub const DEFAULT_TARGET: Complex = Complex::new(-0.743643887037151, 0.13182590420533);
pub const DEFAULT_BEGIN: Viewport = Viewport::new(Complex::new(-0.5, 0.0), 3.0);
pub const DEFAULT_END_WIDTH: f64 = 0.002;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationConfigError {
    InvalidPixelGrid(PixelGridError),
    ZeroFrameRate,
    InvalidViewportWidth,
    Mandelbrot(MandelbrotConfigError),
}

impl fmt::Display for AnimationConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPixelGrid(err) => write!(f, "invalid pixel grid: {}", err),
            Self::ZeroFrameRate => write!(f, "frame rate must be greater than zero"),
            Self::InvalidViewportWidth => {
                write!(f, "viewport widths must be finite and not negative")
            }
            Self::Mandelbrot(err) => write!(f, "invalid mandelbrot settings: {}", err),
        }
    }
}

impl Error for AnimationConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPixelGrid(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PixelGridError> for AnimationConfigError {
    fn from(err: PixelGridError) -> Self {
        Self::InvalidPixelGrid(err)
    }
}

impl From<MandelbrotConfigError> for AnimationConfigError {
    fn from(err: MandelbrotConfigError) -> Self {
        Self::Mandelbrot(err)
    }
}

/// Everything needed to render one zoom: frame size, timing, the flight from
/// `begin` towards `target`, and the escape-time settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    pub pixel_width: usize,
    pub pixel_height: usize,
    pub frame_rate: u32,
    pub frame_count: usize,
    pub begin: Viewport,
    pub target: Complex,
    pub end_width: f64,
    pub mandelbrot: MandelbrotConfig,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            pixel_width: DEFAULT_PIXEL_WIDTH,
            pixel_height: DEFAULT_PIXEL_HEIGHT,
            frame_rate: DEFAULT_FRAME_RATE,
            frame_count: DEFAULT_FRAME_COUNT,
            begin: DEFAULT_BEGIN,
            target: DEFAULT_TARGET,
            end_width: DEFAULT_END_WIDTH,
            mandelbrot: MandelbrotConfig::default(),
        }
    }
}

impl AnimationConfig {
    /// Checks the settings and returns the pixel grid frames are rendered into.
    pub fn validate(&self) -> Result<PixelGrid, AnimationConfigError> {
        let grid = PixelGrid::new(self.pixel_width, self.pixel_height)?;

        if self.frame_rate == 0 {
            return Err(AnimationConfigError::ZeroFrameRate);
        }

        let width_ok = |width: f64| width.is_finite() && width >= 0.0;
        if !width_ok(self.begin.width) || !width_ok(self.end_width) {
            return Err(AnimationConfigError::InvalidViewportWidth);
        }

        self.mandelbrot.validate()?;

        Ok(grid)
    }

    #[must_use]
    pub fn path(&self) -> EasePath {
        zoom_toward(self.begin, self.target, self.end_width, self.frame_count)
    }
}
