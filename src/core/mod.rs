pub mod actions;
pub mod colour;
pub mod data;
pub mod flight;
pub mod fractals;
