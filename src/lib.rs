pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::ComplexRect;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::errors::FractalError;
pub use crate::core::filters::adjust::{adjust_brightness, adjust_contrast, adjust_saturation};
pub use crate::core::filters::convolve::{Kernel, apply_edge_detect, convolve};
pub use crate::core::filters::resize::resize;
pub use crate::core::fractals::barnsley_fern::generate::{
    generate_barnsley_fern, generate_barnsley_fern_seeded,
};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::julia::generate::generate_julia;
pub use crate::core::fractals::koch::generate::generate_koch_curve;
pub use crate::core::fractals::mandelbrot::generate::generate_mandelbrot;
pub use crate::core::fractals::sierpinski::triangle::generate_sierpinski_triangle;
pub use crate::core::raster::line::draw_line;
pub use crate::core::raster::triangle::fill_triangle;

pub use controllers::gallery::{GalleryConfig, GalleryController, GalleryReport};
pub use controllers::process::{ProcessConfig, ProcessController};
pub use input::cli::{CliArgs, CliCommand, RunCliCommand, parse_args_from};
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::ppm::{PpmError, decode_ppm, encode_ppm, read_ppm, write_ppm};
