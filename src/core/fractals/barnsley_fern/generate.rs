use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, NeverCancel};
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::errors::FractalError;
use crate::core::fractals::barnsley_fern::chain::FernChain;

pub const FERN_CANVAS_SIZE: i32 = 800;
pub const POINTS_PER_ITERATION: u32 = 1000;
pub const MAX_FERN_ITERATIONS: u32 = u32::MAX / POINTS_PER_ITERATION;

/// Number of chain points sampled for `iterations`.
pub fn fern_point_count(iterations: u32) -> Result<usize, FractalError> {
    iterations
        .checked_mul(POINTS_PER_ITERATION)
        .filter(|&points| points > 0)
        .map(|points| points as usize)
        .ok_or(FractalError::InvalidIterationBudget {
            iterations,
            min: 1,
            max: MAX_FERN_ITERATIONS,
        })
}

/// Fern space to pixel space: the fern spans roughly 11 units across and
/// 12 up, with the stem at the bottom centre of the canvas.
#[must_use]
pub fn project(point: Complex, width: i32, height: i32) -> Point {
    let x = f64::from(width / 2) + point.real * f64::from(width) / 11.0;
    let y = f64::from(height) - point.imag * f64::from(height) / 12.0;

    Point::new(x as i32, y as i32)
}

/// Plots `iterations * 1000` points of the fern's chain in white on a
/// black 800x800 canvas, drawing from `rng`. Points projected off the
/// canvas are dropped.
pub fn generate_barnsley_fern<R: Rng>(
    iterations: u32,
    rng: &mut R,
) -> Result<PixelBuffer, FractalError> {
    generate_barnsley_fern_cancelable(iterations, rng, &NeverCancel)
}

/// Same as [`generate_barnsley_fern`] with a fresh `StdRng` seeded from
/// `seed`, so the output is reproducible.
pub fn generate_barnsley_fern_seeded(
    iterations: u32,
    seed: u64,
) -> Result<PixelBuffer, FractalError> {
    let mut rng = StdRng::seed_from_u64(seed);

    generate_barnsley_fern(iterations, &mut rng)
}

pub fn generate_barnsley_fern_cancelable<R: Rng, C: CancelToken>(
    iterations: u32,
    rng: &mut R,
    cancel: &C,
) -> Result<PixelBuffer, FractalError> {
    let point_count = fern_point_count(iterations)?;
    debug!(
        "rendering Barnsley fern: {} iterations, {} points",
        iterations, point_count
    );

    let start = Instant::now();
    let mut buffer = PixelBuffer::with_size(FERN_CANVAS_SIZE, FERN_CANVAS_SIZE)?;
    let mut plotted = 0usize;

    // the chain is sequential, so points are plotted as they are generated
    for (index, point) in FernChain::new(rng, point_count).enumerate() {
        if index % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
            cancel.check()?;
        }
        let pixel = project(point, FERN_CANVAS_SIZE, FERN_CANVAS_SIZE);
        if buffer.plot(pixel, Colour::WHITE) {
            plotted += 1;
        }
    }

    info!(
        "Barnsley fern rendered ({} of {} points on canvas) in {:?}",
        plotted,
        point_count,
        start.elapsed()
    );
    Ok(buffer)
}
