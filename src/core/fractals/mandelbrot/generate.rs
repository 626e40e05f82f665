use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::errors::FractalError;
use crate::core::fractals::escape_time::{render_escape_time, validate_dimensions};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Greyscale Mandelbrot set over `[xmin, xmax] × [ymin, ymax]`.
///
/// Width and height must be at least 2 and `max_iterations` non-zero.
pub fn generate_mandelbrot(
    width: i32,
    height: i32,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    max_iterations: u32,
) -> Result<PixelBuffer, FractalError> {
    generate_mandelbrot_cancelable(
        width,
        height,
        ComplexRect::from_bounds(xmin, xmax, ymin, ymax)?,
        max_iterations,
        &NeverCancel,
    )
}

pub fn generate_mandelbrot_cancelable<C: CancelToken>(
    width: i32,
    height: i32,
    region: ComplexRect,
    max_iterations: u32,
    cancel: &C,
) -> Result<PixelBuffer, FractalError> {
    let pixel_rect = validate_dimensions(width, height)?;
    let algorithm = MandelbrotAlgorithm::new(pixel_rect, region, max_iterations)?;

    render_escape_time("Mandelbrot", &algorithm, max_iterations, cancel)
}
