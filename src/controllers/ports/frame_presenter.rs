use std::error::Error;

use crate::core::data::frame::Frame;

/// Receives finished frames in path order.
pub trait FramePresenterPort {
    fn present(&mut self, index: usize, frame: &Frame) -> Result<(), Box<dyn Error>>;
}
