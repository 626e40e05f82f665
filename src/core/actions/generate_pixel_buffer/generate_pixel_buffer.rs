use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

/// Error type for pixel buffer generation.
///
/// Distinguishes between cancellation and a size mismatch between the
/// input values and the target canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePixelBufferError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// A pixel buffer construction error occurred.
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Generates a pixel buffer by mapping input values to colours.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    generate_pixel_buffer_cancelable(input, mapper, pixel_rect, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferError::PixelBuffer(err) => err,
        GeneratePixelBufferError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Generates a pixel buffer with cancellation support.
///
/// Streams RGB bytes into a buffer preallocated to `pixel_rect.size() * 3`,
/// polling `cancel` every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(pixel_rect.size() as usize * CHANNELS);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 {
            cancel.check().map_err(GeneratePixelBufferError::Cancelled)?;
        }

        let Colour { r, g, b } = mapper.map(value);
        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
