use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// Bresenham line from `from` to `to`, both endpoints included. Each pixel is
/// clipped on its own, so lines may start or end off-canvas.
pub fn draw_line(buffer: &mut PixelBuffer, from: Point, to: Point, colour: Colour) {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut current = from;

    loop {
        buffer.plot(current, colour);

        if current == to {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            current.x += sx;
        }
        if e2 <= dx {
            err += dx;
            current.y += sy;
        }
    }
}
