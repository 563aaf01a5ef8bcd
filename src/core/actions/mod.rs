pub mod build_palette;
pub mod generate_fractal;
pub mod render_frame;
