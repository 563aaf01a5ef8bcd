use crate::core::actions::build_palette::build_palette::build_palette;
use crate::core::data::palette::{ControlPoint, Palette};
use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_PALETTE_SIZE: usize = 100;

/// Violet fading through blue into white.
pub(crate) fn default_control_points() -> Vec<ControlPoint> {
    vec![
        ControlPoint::new(0, 300.0 / 360.0, 1.0, 0.0),
        ControlPoint::new(15, 250.0 / 360.0, 1.0, 0.5),
        ControlPoint::new(99, 300.0 / 360.0, 1.0, 1.0),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MandelbrotConfigError {
    ZeroMaxIterations,
    TooFewControlPoints { count: usize },
    UnsortedControlPoints { position: usize },
}

impl fmt::Display for MandelbrotConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::TooFewControlPoints { count } => {
                write!(f, "palette needs at least 2 control points, got {}", count)
            }
            Self::UnsortedControlPoints { position } => {
                write!(
                    f,
                    "palette control point {} has a smaller index than its predecessor",
                    position
                )
            }
        }
    }
}

impl Error for MandelbrotConfigError {}

/// Escape-time and colouring settings for a rendering session.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
    pub palette_size: usize,
    pub control_points: Vec<ControlPoint>,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            palette_size: DEFAULT_PALETTE_SIZE,
            control_points: default_control_points(),
        }
    }
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<(), MandelbrotConfigError> {
        if self.max_iterations == 0 {
            return Err(MandelbrotConfigError::ZeroMaxIterations);
        }

        if self.control_points.len() < 2 {
            return Err(MandelbrotConfigError::TooFewControlPoints {
                count: self.control_points.len(),
            });
        }

        if let Some(position) = self
            .control_points
            .windows(2)
            .position(|pair| pair[1].index < pair[0].index)
        {
            return Err(MandelbrotConfigError::UnsortedControlPoints {
                position: position + 1,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn build_palette(&self) -> Palette {
        build_palette(self.palette_size, &self.control_points)
    }
}
