use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are computed independently and stitched back together, so the result
/// is identical to [`generate_fractal_serial`] and keeps row-major order.
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let grid = algorithm.pixel_grid();
    let row_width = grid.width();

    let rows: Vec<Vec<Alg::Success>> = (0..grid.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..row_width {
                row.push(algorithm.compute(Point { x, y }));
            }

            row
        })
        .collect();

    // Flatten rows into row-major order
    rows.into_iter().flatten().collect()
}
