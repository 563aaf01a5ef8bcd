use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::render_frame::palette_colour_map::PaletteColourMap;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::frame::{Frame, FrameError};
use crate::core::data::palette::Palette;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

fn map_to_colours<T, CMap: ColourMap<T>>(input: Vec<T>, mapper: &CMap) -> Vec<Colour> {
    input.into_iter().map(|value| mapper.map(value)).collect()
}

fn algorithm_for(
    centre: Complex,
    complex_width: f64,
    pixel_width: usize,
    pixel_height: usize,
    max_iteration: u32,
) -> Option<MandelbrotAlgorithm> {
    debug_assert!(max_iteration > 0, "max_iteration must be positive");
    debug_assert!(complex_width >= 0.0, "complex_width must not be negative");

    let grid = PixelGrid::new(pixel_width, pixel_height).ok()?;

    Some(MandelbrotAlgorithm::new(
        grid,
        Viewport::new(centre, complex_width),
        max_iteration,
    ))
}

/// Renders one view of the Mandelbrot set as row-major colours.
///
/// The output always holds `pixel_width * pixel_height` colours, x varying
/// fastest. An empty palette gives an all-black frame and a zero
/// `complex_width` a single-colour one.
#[must_use]
pub fn render(
    centre: Complex,
    complex_width: f64,
    pixel_width: usize,
    pixel_height: usize,
    max_iteration: u32,
    palette: &Palette,
) -> Vec<Colour> {
    let Some(algorithm) =
        algorithm_for(centre, complex_width, pixel_width, pixel_height, max_iteration)
    else {
        return Vec::new();
    };

    let iterations = generate_fractal_serial(&algorithm);
    map_to_colours(iterations, &PaletteColourMap::new(palette, algorithm.max_iterations()))
}

/// Same output as [`render`], with rows spread over the rayon thread pool.
#[must_use]
pub fn render_parallel(
    centre: Complex,
    complex_width: f64,
    pixel_width: usize,
    pixel_height: usize,
    max_iteration: u32,
    palette: &Palette,
) -> Vec<Colour> {
    let Some(algorithm) =
        algorithm_for(centre, complex_width, pixel_width, pixel_height, max_iteration)
    else {
        return Vec::new();
    };

    let iterations = generate_fractal_parallel_rayon(&algorithm);
    map_to_colours(iterations, &PaletteColourMap::new(palette, algorithm.max_iterations()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameRendererError {
    ZeroMaxIterations,
    Frame(FrameError),
}

impl fmt::Display for FrameRendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::Frame(err) => write!(f, "frame error: {}", err),
        }
    }
}

impl Error for FrameRendererError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroMaxIterations => None,
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<FrameError> for FrameRendererError {
    fn from(err: FrameError) -> Self {
        Self::Frame(err)
    }
}

/// Renders frames for one session: a fixed pixel grid, iteration cap and
/// shared palette.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    grid: PixelGrid,
    max_iterations: u32,
    palette: Arc<Palette>,
}

impl FrameRenderer {
    pub fn new(
        grid: PixelGrid,
        max_iterations: u32,
        palette: Arc<Palette>,
    ) -> Result<Self, FrameRendererError> {
        if max_iterations == 0 {
            return Err(FrameRendererError::ZeroMaxIterations);
        }

        Ok(Self {
            grid,
            max_iterations,
            palette,
        })
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn render_viewport(&self, viewport: Viewport) -> Result<Frame, FrameRendererError> {
        let start = Instant::now();
        let pixels = render_parallel(
            viewport.centre,
            viewport.width,
            self.grid.width(),
            self.grid.height(),
            self.max_iterations,
            &self.palette,
        );

        tracing::debug!(
            centre_real = viewport.centre.real,
            centre_imag = viewport.centre.imag,
            width = viewport.width,
            elapsed = ?start.elapsed(),
            "rendered frame"
        );

        Ok(Frame::from_pixels(self.grid, pixels)?)
    }
}
