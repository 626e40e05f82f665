pub mod line;
pub mod triangle;
