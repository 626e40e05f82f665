pub mod gallery;
pub mod ports;
pub mod process;
