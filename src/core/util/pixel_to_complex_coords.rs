use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
    DegenerateRect { pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel rect",
                    point.x,
                    point.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
            Self::DegenerateRect { pixel_rect } => {
                write!(
                    f,
                    "a {}x{} pixel rect cannot span a complex region",
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Linear map from pixel space onto `complex_rect`: column 0 lands on the
/// minimum real bound, column `width - 1` on the maximum, likewise rows.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if pixel_rect.width() < 2 || pixel_rect.height() < 2 {
        return Err(PixelToComplexCoordsError::DegenerateRect { pixel_rect });
    }

    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let real = f64::from(pixel_position.x) * complex_rect.width()
        / f64::from(pixel_rect.width() - 1)
        + complex_rect.top_left().real;
    let imag = f64::from(pixel_position.y) * complex_rect.height()
        / f64::from(pixel_rect.height() - 1)
        + complex_rect.top_left().imag;

    Ok(Complex { real, imag })
}
