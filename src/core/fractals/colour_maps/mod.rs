pub mod greyscale;
