use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::GenerateFractalError;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

/// Precondition and runtime failures of the fractal generators and the
/// rasterizer. Clipped pixel writes are never reported here.
#[derive(Debug, Clone, PartialEq)]
pub enum FractalError {
    InvalidDimension {
        width: i32,
        height: i32,
        min: i32,
    },
    InvalidIterationBudget {
        iterations: u32,
        min: u32,
        max: u32,
    },
    InvalidRegion(ComplexRectError),
    DegenerateGeometry {
        a: Point,
        b: Point,
        c: Point,
    },
    PixelMapping(PixelToComplexCoordsError),
    PixelBuffer(PixelBufferError),
    Cancelled(Cancelled),
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height, min } => write!(
                f,
                "invalid dimensions {}x{}: width and height must be at least {}",
                width, height, min
            ),
            Self::InvalidIterationBudget {
                iterations,
                min,
                max,
            } => write!(
                f,
                "iteration budget {} must be between {} and {}",
                iterations, min, max
            ),
            Self::InvalidRegion(err) => write!(f, "invalid region: {}", err),
            Self::DegenerateGeometry { a, b, c } => write!(
                f,
                "degenerate triangle ({}, {}) ({}, {}) ({}, {}) has zero area",
                a.x, a.y, b.x, b.y, c.x, c.y
            ),
            Self::PixelMapping(err) => write!(f, "pixel mapping error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::Cancelled(c) => write!(f, "{}", c),
        }
    }
}

impl Error for FractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            Self::PixelMapping(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Cancelled(c) => Some(c),
            _ => None,
        }
    }
}

impl FractalError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

impl From<ComplexRectError> for FractalError {
    fn from(err: ComplexRectError) -> Self {
        Self::InvalidRegion(err)
    }
}

impl From<PixelRectError> for FractalError {
    fn from(err: PixelRectError) -> Self {
        match err {
            PixelRectError::InvalidSize { width, height } => Self::InvalidDimension {
                width,
                height,
                min: 1,
            },
        }
    }
}

impl From<Cancelled> for FractalError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for FractalError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::PixelMapping(e),
        }
    }
}

impl From<GeneratePixelBufferError> for FractalError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::PixelBuffer(e) => Self::PixelBuffer(e),
        }
    }
}
