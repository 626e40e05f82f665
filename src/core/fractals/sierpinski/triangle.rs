use log::{debug, info};
use std::convert::Infallible;
use std::time::Instant;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::errors::FractalError;
use crate::core::raster::line::draw_line;
use crate::core::raster::triangle::fill_triangle;

pub const SIERPINSKI_CANVAS_SIZE: i32 = 800;
pub const SIERPINSKI_VERTICES: [Point; 3] = [
    Point::new(400, 50),
    Point::new(50, 750),
    Point::new(750, 750),
];
/// Deepest recursion accepted; depth `d` fills `3^d` triangles.
pub const MAX_SIERPINSKI_DEPTH: u32 = 10;

pub fn validate_sierpinski_depth(depth: u32) -> Result<(), FractalError> {
    if depth > MAX_SIERPINSKI_DEPTH {
        return Err(FractalError::InvalidIterationBudget {
            iterations: depth,
            min: 0,
            max: MAX_SIERPINSKI_DEPTH,
        });
    }

    Ok(())
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}

/// Visits the `3^depth` corner triangles of the Sierpinski subdivision of
/// `[a, b, c]`, stopping at the first error `visit` returns.
pub fn try_for_each_triangle<E, F>(
    depth: u32,
    [a, b, c]: [Point; 3],
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut([Point; 3]) -> Result<(), E>,
{
    if depth == 0 {
        return visit([a, b, c]);
    }

    let ab = midpoint(a, b);
    let bc = midpoint(b, c);
    let ca = midpoint(c, a);

    try_for_each_triangle(depth - 1, [a, ab, ca], visit)?;
    try_for_each_triangle(depth - 1, [ab, b, bc], visit)?;
    try_for_each_triangle(depth - 1, [ca, bc, c], visit)
}

pub fn sierpinski_triangles(
    depth: u32,
    outer: [Point; 3],
) -> Result<Vec<[Point; 3]>, FractalError> {
    validate_sierpinski_depth(depth)?;

    let mut triangles = Vec::with_capacity(3usize.pow(depth));
    let Ok(()) = try_for_each_triangle(depth, outer, &mut |triangle| {
        triangles.push(triangle);
        Ok::<(), Infallible>(())
    });

    Ok(triangles)
}

/// Fills one leaf triangle. Leaves squashed flat by midpoint truncation
/// are drawn as their outline instead.
fn draw_leaf(buffer: &mut PixelBuffer, [a, b, c]: [Point; 3]) {
    if let Err(FractalError::DegenerateGeometry { .. }) =
        fill_triangle(buffer, a, b, c, Colour::WHITE)
    {
        draw_line(buffer, a, b, Colour::WHITE);
        draw_line(buffer, b, c, Colour::WHITE);
        draw_line(buffer, c, a, Colour::WHITE);
    }
}

/// White Sierpinski triangle on a black 800x800 canvas. Depth 0 is the
/// solid outer triangle.
pub fn generate_sierpinski_triangle(depth: u32) -> Result<PixelBuffer, FractalError> {
    generate_sierpinski_triangle_cancelable(depth, &NeverCancel)
}

pub fn generate_sierpinski_triangle_cancelable<C: CancelToken>(
    depth: u32,
    cancel: &C,
) -> Result<PixelBuffer, FractalError> {
    validate_sierpinski_depth(depth)?;
    debug!("rendering Sierpinski triangle at depth {}", depth);

    let start = Instant::now();
    let mut buffer = PixelBuffer::with_size(SIERPINSKI_CANVAS_SIZE, SIERPINSKI_CANVAS_SIZE)?;
    let mut filled = 0usize;

    cancel.check()?;
    try_for_each_triangle(depth, SIERPINSKI_VERTICES, &mut |triangle| {
        filled += 1;
        if filled % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
            cancel.check()?;
        }
        draw_leaf(&mut buffer, triangle);
        Ok::<(), Cancelled>(())
    })?;

    info!(
        "Sierpinski triangle rendered ({} triangles) in {:?}",
        filled,
        start.elapsed()
    );
    Ok(buffer)
}
