//! Single-pass post-processing over a [`PixelBuffer`](crate::core::data::pixel_buffer::PixelBuffer).

pub mod adjust;
pub mod convolve;
pub mod resize;
