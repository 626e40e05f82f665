use log::debug;
use rayon::prelude::*;

use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};

/// Nearest-neighbour resize: destination pixel `(x, y)` copies source pixel
/// `(x * old_width / new_width, y * old_height / new_height)`.
pub fn resize(
    buffer: &PixelBuffer,
    new_width: i32,
    new_height: i32,
) -> Result<PixelBuffer, PixelRectError> {
    let target = PixelRect::new(new_width, new_height)?;
    debug!(
        "resizing {}x{} to {}x{}",
        buffer.width(),
        buffer.height(),
        target.width(),
        target.height()
    );

    let old_width = u64::from(buffer.width());
    let old_height = u64::from(buffer.height());
    let new_width = u64::from(target.width());
    let new_height = u64::from(target.height());

    let source = buffer.buffer();
    let source_row_len = buffer.row_len();
    let mut resized = PixelBuffer::new(target);
    let row_len = resized.row_len();

    resized
        .buffer_mut()
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let source_y = (y as u64 * old_height / new_height) as usize;
            let source_row = &source[source_y * source_row_len..][..source_row_len];

            for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                let source_x = (x as u64 * old_width / new_width) as usize;
                pixel.copy_from_slice(&source_row[source_x * CHANNELS..][..CHANNELS]);
            }
        });

    Ok(resized)
}
