use log::{debug, info};
use std::error::Error;
use std::fmt;
use std::io;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::process::config::ProcessConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::filters::adjust::{adjust_brightness, adjust_contrast, adjust_saturation};
use crate::core::filters::convolve::apply_edge_detect;
use crate::core::filters::resize::resize;
use crate::storage::ppm::{PpmError, read_ppm};

#[derive(Debug)]
pub enum ProcessError {
    Read(PpmError),
    Resize(PixelRectError),
    Write(io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "could not read input: {}", err),
            Self::Resize(err) => write!(f, "could not resize: {}", err),
            Self::Write(err) => write!(f, "could not write output: {}", err),
        }
    }
}

impl Error for ProcessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) => Some(err),
            Self::Resize(err) => Some(err),
            Self::Write(err) => Some(err),
        }
    }
}

impl From<PpmError> for ProcessError {
    fn from(err: PpmError) -> Self {
        Self::Read(err)
    }
}

impl From<PixelRectError> for ProcessError {
    fn from(err: PixelRectError) -> Self {
        Self::Resize(err)
    }
}

pub struct ProcessController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> ProcessController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    /// Applies the configured steps to `buffer` in pipeline order.
    pub fn apply(
        &self,
        buffer: PixelBuffer,
        config: &ProcessConfig,
    ) -> Result<PixelBuffer, PixelRectError> {
        let mut buffer = match config.resize {
            Some((width, height)) => resize(&buffer, width, height)?,
            None => buffer,
        };

        if let Some(delta) = config.brightness {
            debug!("brightness {:+}", delta);
            adjust_brightness(&mut buffer, delta);
        }
        if let Some(factor) = config.contrast {
            debug!("contrast x{}", factor);
            adjust_contrast(&mut buffer, factor);
        }
        if let Some(factor) = config.saturation {
            debug!("saturation x{}", factor);
            adjust_saturation(&mut buffer, factor);
        }
        if config.edge_detect {
            buffer = apply_edge_detect(&buffer);
        }

        Ok(buffer)
    }

    /// Reads `config.input`, applies the pipeline and presents the result to
    /// `config.output`.
    pub fn run(&self, config: &ProcessConfig) -> Result<PixelBuffer, ProcessError> {
        info!("Processing {}...", config.input.display());
        let start = Instant::now();

        let input = read_ppm(&config.input)?;
        let output = self.apply(input, config)?;

        self.presenter
            .present(&output, &config.output)
            .map_err(ProcessError::Write)?;

        info!(
            "Saved {}x{} image to {} in {:?}",
            output.width(),
            output.height(),
            config.output.display(),
            start.elapsed()
        );
        Ok(output)
    }
}
