use std::error::Error;
use std::fmt;
use std::io;

use crate::controllers::gallery::GalleryController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::process::{ProcessController, ProcessError};
use crate::input::cli::args::CliCommand;

#[derive(Debug)]
pub enum CliError {
    /// The output directory could not be prepared.
    Gallery(io::Error),
    /// Some fractals failed or the run was cancelled; the rest were written.
    GalleryIncomplete { failed: usize, cancelled: bool },
    Process(ProcessError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gallery(err) => write!(f, "gallery failed: {}", err),
            Self::GalleryIncomplete { failed, cancelled } => {
                write!(f, "gallery incomplete: {} fractal(s) failed", failed)?;
                if *cancelled {
                    write!(f, ", run was cancelled")?;
                }
                Ok(())
            }
            Self::Process(err) => write!(f, "process failed: {}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Gallery(err) => Some(err),
            Self::Process(err) => Some(err),
            Self::GalleryIncomplete { .. } => None,
        }
    }
}

impl From<ProcessError> for CliError {
    fn from(err: ProcessError) -> Self {
        Self::Process(err)
    }
}

pub struct RunCliCommand<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> RunCliCommand<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn execute(self, command: CliCommand) -> Result<(), CliError> {
        match command {
            CliCommand::Gallery(config) => {
                let report = GalleryController::new(self.presenter)
                    .run(&config)
                    .map_err(CliError::Gallery)?;

                if report.is_success() {
                    Ok(())
                } else {
                    Err(CliError::GalleryIncomplete {
                        failed: report.failures.len(),
                        cancelled: report.cancelled,
                    })
                }
            }
            CliCommand::Process(config) => {
                ProcessController::new(self.presenter).run(&config)?;
                Ok(())
            }
        }
    }
}
