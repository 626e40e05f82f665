use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::errors::FractalError;
use crate::core::fractals::escape_time::{compute_escape_time, validate_max_iterations};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

#[derive(Debug, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        // z starts on the mapped coordinate, which is also the constant
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(compute_escape_time(c, c, self.max_iterations))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, FractalError> {
        validate_max_iterations(max_iterations)?;

        Ok(Self {
            pixel_rect,
            complex_rect,
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
