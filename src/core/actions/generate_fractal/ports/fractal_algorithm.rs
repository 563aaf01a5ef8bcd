use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;

pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;

    fn pixel_grid(&self) -> PixelGrid;
}
