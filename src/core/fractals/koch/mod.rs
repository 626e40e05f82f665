pub mod curve;
pub mod generate;
