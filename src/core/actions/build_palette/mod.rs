pub mod build_palette;
