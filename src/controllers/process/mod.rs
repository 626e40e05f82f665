//! Runs the post-processing filters over an existing image file.

pub mod config;
mod controller;

pub use config::ProcessConfig;
pub use controller::{ProcessController, ProcessError};
