use log::debug;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};

pub const PPM_MAGIC: &str = "P6";
pub const PPM_MAX_VALUE: u32 = 255;

#[derive(Debug)]
pub enum PpmError {
    Io(io::Error),
    InvalidHeader(String),
    UnsupportedMaxValue(u32),
    Truncated { expected: usize, actual: usize },
    Buffer(PixelRectError),
}

impl fmt::Display for PpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::InvalidHeader(reason) => write!(f, "invalid PPM header: {}", reason),
            Self::UnsupportedMaxValue(max) => write!(
                f,
                "unsupported max value {} (only 8-bit images with max value {} are supported)",
                max, PPM_MAX_VALUE
            ),
            Self::Truncated { expected, actual } => write!(
                f,
                "truncated pixel data: expected {} bytes, found {}",
                expected, actual
            ),
            Self::Buffer(err) => write!(f, "invalid image size: {}", err),
        }
    }
}

impl Error for PpmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Buffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PpmError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PixelRectError> for PpmError {
    fn from(err: PixelRectError) -> Self {
        Self::Buffer(err)
    }
}

impl From<PixelBufferError> for PpmError {
    fn from(err: PixelBufferError) -> Self {
        match err {
            PixelBufferError::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => Self::Truncated {
                expected: pixel_rect_size,
                actual: buffer_size,
            },
            other => Self::InvalidHeader(other.to_string()),
        }
    }
}

/// Binary PPM: `P6\n{width} {height}\n255\n` followed by the raw RGB rows.
pub fn encode_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> io::Result<()> {
    write!(
        writer,
        "{}\n{} {}\n{}\n",
        PPM_MAGIC,
        buffer.width(),
        buffer.height(),
        PPM_MAX_VALUE
    )?;
    writer.write_all(buffer.buffer())
}

pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
    let filepath = filepath.as_ref();
    debug!(
        "writing {}x{} PPM to {}",
        buffer.width(),
        buffer.height(),
        filepath.display()
    );

    let mut writer = BufWriter::new(File::create(filepath)?);
    encode_ppm(buffer, &mut writer)?;
    writer.flush()
}

fn next_byte<R: BufRead>(reader: &mut R) -> io::Result<Option<u8>> {
    let byte = reader.fill_buf()?.first().copied();
    if byte.is_some() {
        reader.consume(1);
    }
    Ok(byte)
}

/// Next whitespace-delimited header token, skipping `#` comments. Consumes
/// exactly one delimiter byte after the token.
fn next_token<R: BufRead>(reader: &mut R, field: &str) -> Result<String, PpmError> {
    let first = loop {
        match next_byte(reader)? {
            None => return Err(PpmError::InvalidHeader(format!("missing {}", field))),
            Some(b'#') => {
                while let Some(byte) = next_byte(reader)? {
                    if byte == b'\n' {
                        break;
                    }
                }
            }
            Some(byte) if byte.is_ascii_whitespace() => {}
            Some(byte) => break byte,
        }
    };

    let mut token = vec![first];
    while let Some(byte) = next_byte(reader)? {
        if byte.is_ascii_whitespace() {
            break;
        }
        token.push(byte);
    }

    String::from_utf8(token).map_err(|_| PpmError::InvalidHeader(format!("{} is not text", field)))
}

fn parse_field<T: std::str::FromStr>(token: &str, field: &str) -> Result<T, PpmError> {
    token
        .parse()
        .map_err(|_| PpmError::InvalidHeader(format!("{} '{}' is not a number", field, token)))
}

pub fn decode_ppm<R: BufRead>(reader: &mut R) -> Result<PixelBuffer, PpmError> {
    let magic = next_token(reader, "magic number")?;
    if magic != PPM_MAGIC {
        return Err(PpmError::InvalidHeader(format!(
            "magic number '{}', expected '{}'",
            magic, PPM_MAGIC
        )));
    }

    let width: i32 = parse_field(&next_token(reader, "width")?, "width")?;
    let height: i32 = parse_field(&next_token(reader, "height")?, "height")?;
    let max_value: u32 = parse_field(&next_token(reader, "max value")?, "max value")?;

    if max_value != PPM_MAX_VALUE {
        return Err(PpmError::UnsupportedMaxValue(max_value));
    }

    let pixel_rect = PixelRect::new(width, height)?;
    let expected = pixel_rect.size() as usize * CHANNELS;

    let mut data = Vec::new();
    reader.by_ref().take(expected as u64).read_to_end(&mut data)?;
    if data.len() < expected {
        return Err(PpmError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    Ok(PixelBuffer::from_data(pixel_rect, data)?)
}

pub fn read_ppm(filepath: impl AsRef<Path>) -> Result<PixelBuffer, PpmError> {
    let filepath = filepath.as_ref();
    let mut reader = BufReader::new(File::open(filepath)?);
    let buffer = decode_ppm(&mut reader)?;

    debug!(
        "read {}x{} PPM from {}",
        buffer.width(),
        buffer.height(),
        filepath.display()
    );
    Ok(buffer)
}
