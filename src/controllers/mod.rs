pub mod animation;
pub mod ports;
