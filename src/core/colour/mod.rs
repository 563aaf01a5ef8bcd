pub mod hsl_to_rgb;

pub use hsl_to_rgb::hsl_to_rgb;
