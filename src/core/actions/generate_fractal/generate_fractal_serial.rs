use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Single-threaded row-major evaluation of `algorithm` over its canvas.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let pixel_rect = algorithm.pixel_rect();
    let width = pixel_rect.width() as i32;
    let height = pixel_rect.height() as i32;

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
