use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::errors::FractalError;
use crate::core::fractals::escape_time::{render_escape_time, validate_dimensions};
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;

/// Greyscale Julia set for constant `c` over `[xmin, xmax] × [ymin, ymax]`.
#[allow(clippy::too_many_arguments)]
pub fn generate_julia(
    width: i32,
    height: i32,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    max_iterations: u32,
    c: Complex,
) -> Result<PixelBuffer, FractalError> {
    generate_julia_cancelable(
        width,
        height,
        ComplexRect::from_bounds(xmin, xmax, ymin, ymax)?,
        max_iterations,
        c,
        &NeverCancel,
    )
}

pub fn generate_julia_cancelable<C: CancelToken>(
    width: i32,
    height: i32,
    region: ComplexRect,
    max_iterations: u32,
    c: Complex,
    cancel: &C,
) -> Result<PixelBuffer, FractalError> {
    let pixel_rect = validate_dimensions(width, height)?;
    let algorithm = JuliaAlgorithm::new(pixel_rect, region, max_iterations, c)?;

    render_escape_time("Julia", &algorithm, max_iterations, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    #[test]
    fn test_rejects_invalid_dimensions() {
        let result = generate_julia(0, 0, -2.0, 2.0, -2.0, 2.0, 10, Complex::ZERO);

        assert!(matches!(result, Err(FractalError::InvalidDimension { .. })));
    }

    #[test]
    fn test_zero_constant_renders_unit_disc() {
        let buffer = generate_julia(5, 5, -2.0, 2.0, -2.0, 2.0, 20, Complex::ZERO).unwrap();

        assert_eq!(buffer.get_pixel(Point::new(2, 2)), Some(Colour::WHITE));
        assert_eq!(buffer.get_pixel(Point::new(3, 2)), Some(Colour::WHITE));
        assert_eq!(buffer.get_pixel(Point::new(4, 2)), Some(Colour::BLACK));
        assert_eq!(buffer.get_pixel(Point::new(0, 0)), Some(Colour::BLACK));
    }
}
