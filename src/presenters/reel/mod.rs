pub mod frame_reel;
