//! Renders a set of fractals to image files, one file per fractal.

pub mod config;
mod controller;

pub use config::GalleryConfig;
pub use controller::{GalleryController, GalleryError, GalleryReport};
