//! Shared machinery for the escape-time fractals.

use log::{debug, info};
use std::time::Instant;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer_cancelable;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::errors::FractalError;
use crate::core::fractals::colour_maps::greyscale::GreyscaleColourMap;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

/// Squared escape radius.
pub const ESCAPE_THRESHOLD: f64 = 4.0;

/// Smallest width/height the linear plane mapping accepts.
pub const MIN_ESCAPE_TIME_DIMENSION: i32 = 2;

/// Iterates `z = z² + c` from `z0` and returns how many steps completed
/// before `|z|² > 4`, capped at `max_iterations`.
///
/// The escape test runs after each step and before that step is counted, so
/// a point that escapes on the very first step scores zero.
#[must_use]
pub fn compute_escape_time(z0: Complex, c: Complex, max_iterations: u32) -> u32 {
    let mut z = z0;

    for iteration in 0..max_iterations {
        z = z * z + c;
        if z.magnitude_squared() > ESCAPE_THRESHOLD {
            return iteration;
        }
    }

    max_iterations
}

pub(crate) fn validate_dimensions(width: i32, height: i32) -> Result<PixelRect, FractalError> {
    if width < MIN_ESCAPE_TIME_DIMENSION || height < MIN_ESCAPE_TIME_DIMENSION {
        return Err(FractalError::InvalidDimension {
            width,
            height,
            min: MIN_ESCAPE_TIME_DIMENSION,
        });
    }

    PixelRect::new(width, height).map_err(|_| FractalError::InvalidDimension {
        width,
        height,
        min: MIN_ESCAPE_TIME_DIMENSION,
    })
}

pub(crate) fn validate_max_iterations(max_iterations: u32) -> Result<(), FractalError> {
    if max_iterations == 0 {
        return Err(FractalError::InvalidIterationBudget {
            iterations: max_iterations,
            min: 1,
            max: u32::MAX,
        });
    }

    Ok(())
}

/// Runs `algorithm` over its canvas in parallel and maps iteration counts
/// to greyscale.
pub(crate) fn render_escape_time<Alg, C>(
    name: &str,
    algorithm: &Alg,
    max_iterations: u32,
    cancel: &C,
) -> Result<PixelBuffer, FractalError>
where
    Alg: FractalAlgorithm<Success = u32, Failure = PixelToComplexCoordsError> + Sync,
    C: CancelToken,
{
    let pixel_rect = algorithm.pixel_rect();
    debug!(
        "rendering {} at {}x{}, max iterations {}",
        name,
        pixel_rect.width(),
        pixel_rect.height(),
        max_iterations
    );

    let start = Instant::now();
    let iterations = generate_fractal_parallel_rayon_cancelable(algorithm, cancel)?;
    let colour_map = GreyscaleColourMap::new(max_iterations);
    let buffer = generate_pixel_buffer_cancelable(iterations, &colour_map, pixel_rect, cancel)?;

    info!("{} rendered in {:?}", name, start.elapsed());
    Ok(buffer)
}
