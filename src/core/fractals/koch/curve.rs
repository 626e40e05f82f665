use std::convert::Infallible;

use crate::core::data::point::Point;
use crate::core::errors::FractalError;

/// Deepest subdivision accepted; the curve has `4^depth` segments.
pub const MAX_KOCH_DEPTH: u32 = 12;

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

pub fn validate_koch_depth(depth: u32) -> Result<(), FractalError> {
    if depth > MAX_KOCH_DEPTH {
        return Err(FractalError::InvalidIterationBudget {
            iterations: depth,
            min: 0,
            max: MAX_KOCH_DEPTH,
        });
    }

    Ok(())
}

/// The three interior points of the Koch motif on `from..to`: the one-third
/// point, the apex of the equilateral bump over the middle third, and the
/// two-thirds point.
///
/// Thirds use integer division; the apex is computed in `f64` and truncated,
/// so deep curves drift by a pixel or so from the ideal geometry.
#[must_use]
pub fn koch_motif(from: Point, to: Point) -> [Point; 3] {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let third = Point::new(from.x + dx / 3, from.y + dy / 3);
    let two_thirds = Point::new(from.x + 2 * dx / 3, from.y + 2 * dy / 3);

    let mid_x = f64::from(third.x + two_thirds.x) / 2.0;
    let mid_y = f64::from(third.y + two_thirds.y) / 2.0;
    let apex = Point::new(
        (mid_x + f64::from(two_thirds.y - third.y) * HALF_SQRT_3) as i32,
        (mid_y - f64::from(two_thirds.x - third.x) * HALF_SQRT_3) as i32,
    );

    [third, apex, two_thirds]
}

/// Visits the `4^depth` segments of the curve from `start` to `end` in
/// drawing order, stopping at the first error `visit` returns.
pub fn try_for_each_segment<E, F>(
    depth: u32,
    start: Point,
    end: Point,
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(Point, Point) -> Result<(), E>,
{
    if depth == 0 {
        return visit(start, end);
    }

    let [third, apex, two_thirds] = koch_motif(start, end);

    try_for_each_segment(depth - 1, start, third, visit)?;
    try_for_each_segment(depth - 1, third, apex, visit)?;
    try_for_each_segment(depth - 1, apex, two_thirds, visit)?;
    try_for_each_segment(depth - 1, two_thirds, end, visit)
}

/// All segments of the curve at `depth`, in drawing order.
pub fn koch_segments(
    depth: u32,
    start: Point,
    end: Point,
) -> Result<Vec<(Point, Point)>, FractalError> {
    validate_koch_depth(depth)?;

    let mut segments = Vec::with_capacity(4usize.pow(depth));
    let Ok(()) = try_for_each_segment(depth, start, end, &mut |from, to| {
        segments.push((from, to));
        Ok::<(), Infallible>(())
    });

    Ok(segments)
}
