pub mod ease_path;

pub use ease_path::{EasePath, ease_path, ease_out_quartic, zoom_toward};
