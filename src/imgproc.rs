pub mod dithering;
