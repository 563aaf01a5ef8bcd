use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Escape radius squared.
const BAILOUT: f64 = 4.0;

/// Counts how many steps of `z = z² + c` (from `z = 0`, `c = x + yi`) stay
/// inside the circle of radius 2, up to `max_iteration`.
///
/// Reaching `max_iteration` means the point is likely inside the set.
#[must_use]
pub fn escape_iteration(x: f64, y: f64, max_iteration: u32) -> u32 {
    let mut iteration = 0;
    let (mut r, mut i) = (0.0_f64, 0.0_f64);
    let (mut r2, mut i2) = (0.0_f64, 0.0_f64);

    while iteration < max_iteration && r2 + i2 < BAILOUT {
        // 2ri recovered from (r + i)² without a separate product
        i = (r + i) * (r + i) - r2 - i2 + y;
        r = r2 - i2 + x;
        r2 = r * r;
        i2 = i * i;
        iteration += 1;
    }

    iteration
}

/// Plane coordinates of successive pixels, accumulated step by step.
fn plane_axis(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count)
        .scan(start, |coord, _| {
            let current = *coord;
            *coord += step;
            Some(current)
        })
        .collect()
}

/// Escape-time evaluation of every pixel of a grid laid over a viewport.
#[derive(Debug, Clone)]
pub struct MandelbrotAlgorithm {
    grid: PixelGrid,
    reals: Vec<f64>,
    imags: Vec<f64>,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> Self::Success {
        escape_iteration(self.reals[pixel.x], self.imags[pixel.y], self.max_iterations)
    }

    fn pixel_grid(&self) -> PixelGrid {
        self.grid
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(grid: PixelGrid, viewport: Viewport, max_iterations: u32) -> Self {
        let step = viewport.pixel_step(grid);
        let top_left = viewport.top_left(grid);

        Self {
            grid,
            reals: plane_axis(top_left.real, step, grid.width()),
            imags: plane_axis(top_left.imag, step, grid.height()),
            max_iterations,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
