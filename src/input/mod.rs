//! Input adapters for the fractal toolkit.
//!
//! Adapters receive input from the outside world and translate it into
//! controller configuration.

pub mod cli;
