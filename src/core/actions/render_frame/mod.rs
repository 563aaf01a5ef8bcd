pub mod palette_colour_map;
pub mod ports;
pub mod render_frame;
