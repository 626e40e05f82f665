use log::{debug, info};
use std::time::Instant;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::errors::FractalError;
use crate::core::fractals::koch::curve::{try_for_each_segment, validate_koch_depth};
use crate::core::raster::line::draw_line;

pub const KOCH_CANVAS_SIZE: i32 = 800;
pub const KOCH_START: Point = Point::new(50, 400);
pub const KOCH_END: Point = Point::new(750, 400);

/// White Koch curve on a black 800x800 canvas. Depth 0 is a straight line.
pub fn generate_koch_curve(depth: u32) -> Result<PixelBuffer, FractalError> {
    generate_koch_curve_cancelable(depth, &NeverCancel)
}

pub fn generate_koch_curve_cancelable<C: CancelToken>(
    depth: u32,
    cancel: &C,
) -> Result<PixelBuffer, FractalError> {
    validate_koch_depth(depth)?;
    debug!("rendering Koch curve at depth {}", depth);

    let start = Instant::now();
    let mut buffer = PixelBuffer::with_size(KOCH_CANVAS_SIZE, KOCH_CANVAS_SIZE)?;
    let mut segments = 0usize;

    cancel.check()?;
    try_for_each_segment(depth, KOCH_START, KOCH_END, &mut |from, to| {
        segments += 1;
        if segments % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
            cancel.check()?;
        }
        draw_line(&mut buffer, from, to, Colour::WHITE);
        Ok::<(), Cancelled>(())
    })?;

    info!(
        "Koch curve rendered ({} segments) in {:?}",
        segments,
        start.elapsed()
    );
    Ok(buffer)
}
