use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Why a cancelable render produced no results. A cancelled render ends the
/// gallery run early, while an algorithm failure only skips that fractal.
#[derive(Debug)]
pub enum GenerateFractalError<E> {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// The fractal algorithm reported a failure.
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateFractalError::Cancelled(c) => write!(f, "{}", c),
            GenerateFractalError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFractalError::Cancelled(c) => Some(c),
            GenerateFractalError::Algorithm(e) => Some(e),
        }
    }
}

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// For cancel-aware generation, use [`generate_fractal_parallel_rayon_cancelable`].
pub fn generate_fractal_parallel_rayon<Alg>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    generate_fractal_parallel_rayon_cancelable(algorithm, &NeverCancel).map_err(|e| match e {
        GenerateFractalError::Algorithm(alg_err) => alg_err,
        GenerateFractalError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Generates fractal data in parallel with cancellation support.
///
/// Rows are independent and processed in parallel. Each row polls `cancel`
/// at its start and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels after that.
/// Results come back in row-major order, matching
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
///
/// Returns [`GenerateFractalError::Cancelled`] if cancellation was requested,
/// which should be handled as expected control flow (not an error to display).
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let pixel_rect = algorithm.pixel_rect();
    let width = pixel_rect.width() as i32;
    let height = pixel_rect.height() as i32;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(width as usize);

            for (i, x) in (0..width).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
                    cancel.check().map_err(GenerateFractalError::Cancelled)?;
                }

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
