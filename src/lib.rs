mod controllers;
mod core;
mod presenters;

pub use crate::controllers::animation::config::{AnimationConfig, AnimationConfigError};
pub use crate::controllers::animation::controller::{AnimationController, AnimationError, AnimationReport};
pub use crate::controllers::ports::frame_presenter::FramePresenterPort;

pub use crate::core::actions::build_palette::build_palette::build_palette;
pub use crate::core::actions::render_frame::render_frame::{
    FrameRenderer, FrameRendererError, render, render_parallel,
};
pub use crate::core::colour::hsl_to_rgb;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame::{Frame, FrameError};
pub use crate::core::data::hsl::Hsl;
pub use crate::core::data::palette::{ControlPoint, Palette};
pub use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::flight::{EasePath, ease_out_quartic, ease_path, zoom_toward};
pub use crate::core::fractals::mandelbrot::algorithm::escape_iteration;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, MandelbrotConfigError};

pub use crate::presenters::file::ppm::{PpmFilePresenter, write_ppm};
pub use crate::presenters::reel::frame_reel::{FrameReel, FrameReelError};
