pub mod barnsley_fern;
pub mod colour_maps;
pub mod escape_time;
pub mod fractal_kinds;
pub mod julia;
pub mod koch;
pub mod mandelbrot;
pub mod sierpinski;
