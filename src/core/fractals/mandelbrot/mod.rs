pub mod algorithm;
pub mod generate;
