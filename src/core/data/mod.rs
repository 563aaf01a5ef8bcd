pub mod colour;
pub mod complex;
pub mod frame;
pub mod hsl;
pub mod palette;
pub mod pixel_grid;
pub mod point;
pub mod viewport;
