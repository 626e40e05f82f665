use log::debug;
use rayon::prelude::*;

use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer};

/// A 3x3 integer convolution kernel, indexed `[row][column]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    pub weights: [[i32; 3]; 3],
}

impl Kernel {
    pub const EDGE_DETECT: Self = Self {
        weights: [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]],
    };

    pub const IDENTITY: Self = Self {
        weights: [[0, 0, 0], [0, 1, 0], [0, 0, 0]],
    };

    #[must_use]
    pub const fn new(weights: [[i32; 3]; 3]) -> Self {
        Self { weights }
    }
}

/// Convolves every interior pixel with `kernel`, clamping each channel to
/// `[0, 255]`. The one-pixel border has no full neighbourhood and is left
/// black in the result.
#[must_use]
pub fn convolve(buffer: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let row_len = buffer.row_len();
    let source = buffer.buffer();

    let mut result = PixelBuffer::new(buffer.pixel_rect());
    if width < 3 || height < 3 {
        return result;
    }

    result
        .buffer_mut()
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .filter(|(y, _)| *y > 0 && *y < height - 1)
        .for_each(|(y, row)| {
            for x in 1..width - 1 {
                for channel in 0..CHANNELS {
                    let mut sum = 0i32;
                    for (ky, weights) in kernel.weights.iter().enumerate() {
                        let source_row = (y + ky - 1) * row_len;
                        for (kx, weight) in weights.iter().enumerate() {
                            let index = source_row + (x + kx - 1) * CHANNELS + channel;
                            sum += i32::from(source[index]) * weight;
                        }
                    }
                    row[x * CHANNELS + channel] = sum.clamp(0, 255) as u8;
                }
            }
        });

    result
}

/// Edge detection with the 8-neighbour Laplacian kernel.
#[must_use]
pub fn apply_edge_detect(buffer: &PixelBuffer) -> PixelBuffer {
    debug!("edge detecting {}x{}", buffer.width(), buffer.height());

    convolve(buffer, &Kernel::EDGE_DETECT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn filled(width: i32, height: i32, colour: Colour) -> PixelBuffer {
        let mut buffer = PixelBuffer::with_size(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                buffer.set_pixel(Point::new(x, y), colour).unwrap();
            }
        }
        buffer
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let buffer = filled(6, 5, Colour::grey(200));

        let edges = apply_edge_detect(&buffer);

        assert_eq!(edges.count_pixels(Colour::BLACK), 30);
    }

    #[test]
    fn test_isolated_pixel_lights_up_and_neighbours_clamp() {
        let mut buffer = PixelBuffer::with_size(5, 5).unwrap();
        buffer.set_pixel(Point::new(2, 2), Colour::grey(20)).unwrap();

        let edges = apply_edge_detect(&buffer);

        // centre: 8 * 20, neighbours: -20 clamps to 0
        assert_eq!(edges.get_pixel(Point::new(2, 2)), Some(Colour::grey(160)));
        assert_eq!(edges.get_pixel(Point::new(1, 1)), Some(Colour::BLACK));
        assert_eq!(edges.count_pixels(Colour::BLACK), 24);
    }

    #[test]
    fn test_border_is_black() {
        let buffer = filled(4, 4, Colour::WHITE);

        let result = convolve(&buffer, &Kernel::IDENTITY);

        for i in 0..4 {
            for p in [
                Point::new(i, 0),
                Point::new(i, 3),
                Point::new(0, i),
                Point::new(3, i),
            ] {
                assert_eq!(result.get_pixel(p), Some(Colour::BLACK));
            }
        }
        assert_eq!(result.get_pixel(Point::new(1, 1)), Some(Colour::WHITE));
        assert_eq!(result.get_pixel(Point::new(2, 2)), Some(Colour::WHITE));
    }

    #[test]
    fn test_identity_kernel_keeps_interior_channels() {
        let mut buffer = filled(3, 3, Colour::BLACK);
        let colour = Colour { r: 1, g: 2, b: 3 };
        buffer.set_pixel(Point::new(1, 1), colour).unwrap();

        let result = convolve(&buffer, &Kernel::new(Kernel::IDENTITY.weights));

        assert_eq!(result.get_pixel(Point::new(1, 1)), Some(colour));
    }

    #[test]
    fn test_tiny_images_are_all_border() {
        let buffer = filled(2, 7, Colour::WHITE);

        let edges = apply_edge_detect(&buffer);

        assert_eq!(edges.count_pixels(Colour::BLACK), 14);
    }
}
