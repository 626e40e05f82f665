pub mod chain;
pub mod generate;
pub mod transform;
