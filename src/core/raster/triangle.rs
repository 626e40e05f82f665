use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::errors::FractalError;

/// Twice the signed area of `abc`; zero for collinear vertices.
#[must_use]
pub fn signed_double_area(a: Point, b: Point, c: Point) -> i64 {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    let (cx, cy) = (i64::from(c.x), i64::from(c.y));

    (by - cy) * (ax - cx) + (cx - bx) * (ay - cy)
}

/// Fills every pixel of the bounding box whose barycentric weights are all
/// non-negative, edges included. Weights are kept as integers scaled by the
/// triangle's double area so edge pixels are decided exactly.
pub fn fill_triangle(
    buffer: &mut PixelBuffer,
    a: Point,
    b: Point,
    c: Point,
    colour: Colour,
) -> Result<(), FractalError> {
    let denominator = signed_double_area(a, b, c);
    if denominator == 0 {
        return Err(FractalError::DegenerateGeometry { a, b, c });
    }
    let sign = denominator.signum();

    // nothing outside the canvas can be written, so scan only the overlap
    let max_x = buffer.width() as i32 - 1;
    let max_y = buffer.height() as i32 - 1;
    let x_start = a.x.min(b.x).min(c.x).max(0);
    let x_end = a.x.max(b.x).max(c.x).min(max_x);
    let y_start = a.y.min(b.y).min(c.y).max(0);
    let y_end = a.y.max(b.y).max(c.y).min(max_y);

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            let p = Point::new(x, y);
            let alpha = signed_double_area(p, b, c) * sign;
            let beta = signed_double_area(a, p, c) * sign;
            let gamma = denominator * sign - alpha - beta;

            if alpha >= 0 && beta >= 0 && gamma >= 0 {
                buffer.plot(p, colour);
            }
        }
    }

    Ok(())
}
