pub mod file;
pub mod reel;
