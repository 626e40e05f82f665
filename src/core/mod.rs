pub mod actions;
pub mod data;
pub mod errors;
pub mod filters;
pub mod fractals;
pub mod raster;
pub mod util;
