use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::errors::FractalError;
use crate::core::fractals::escape_time::{compute_escape_time, validate_max_iterations};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Julia set for a fixed constant `c`; each pixel supplies the starting `z`.
#[derive(Debug, PartialEq)]
pub struct JuliaAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    max_iterations: u32,
    c: Complex,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(compute_escape_time(z, self.c, self.max_iterations))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl JuliaAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        max_iterations: u32,
        c: Complex,
    ) -> Result<Self, FractalError> {
        validate_max_iterations(max_iterations)?;

        Ok(Self {
            pixel_rect,
            complex_rect,
            max_iterations,
            c,
        })
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(max_iterations: u32, c: Complex) -> Result<JuliaAlgorithm, FractalError> {
        let pixel_rect = PixelRect::new(5, 5).unwrap();
        let complex_rect = ComplexRect::from_bounds(-2.0, 2.0, -2.0, 2.0).unwrap();

        JuliaAlgorithm::new(pixel_rect, complex_rect, max_iterations, c)
    }

    #[test]
    fn test_valid_constructor() {
        let algorithm = setup(256, Complex::new(-0.7, 0.27015)).unwrap();

        assert_eq!(algorithm.constant(), Complex::new(-0.7, 0.27015));
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert!(matches!(
            setup(0, Complex::ZERO),
            Err(FractalError::InvalidIterationBudget { iterations: 0, .. })
        ));
    }

    #[test]
    fn test_zero_constant_is_the_unit_disc() {
        // with c = 0 the iteration is z -> z², bounded exactly when |z| <= 1
        let algorithm = setup(32, Complex::ZERO).unwrap();

        assert_eq!(algorithm.compute(Point::new(2, 2)), Ok(32)); // 0
        assert_eq!(algorithm.compute(Point::new(3, 2)), Ok(32)); // 1
        assert_eq!(algorithm.compute(Point::new(4, 2)), Ok(0)); // 2
    }

    #[test]
    fn test_constant_is_shared_across_pixels() {
        let c = Complex::new(-0.7, 0.27015);
        let algorithm = setup(100, c).unwrap();

        // pixel (2, 2) maps to the origin, so the orbit is the orbit of c itself
        let expected = compute_escape_time(Complex::ZERO, c, 100);

        assert_eq!(algorithm.compute(Point::new(2, 2)), Ok(expected));
    }

    #[test]
    fn compute_returns_error_for_pixel_outside_pixel_rect() {
        let algorithm = setup(10, Complex::ZERO).unwrap();
        let point = Point::new(0, 11);

        assert_eq!(
            algorithm.compute(point),
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point,
                pixel_rect: algorithm.pixel_rect()
            })
        );
    }
}
