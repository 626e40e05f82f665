use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// `round(255 * iterations / max_iterations)`, clamped so counts above the
/// maximum still read as full white.
#[must_use]
pub fn intensity(iterations: u32, max_iterations: u32) -> u8 {
    if max_iterations == 0 {
        return 0;
    }

    let ratio = f64::from(iterations.min(max_iterations)) / f64::from(max_iterations);
    (255.0 * ratio).round() as u8
}

/// Points that never escape are white, the fastest escapes black.
#[derive(Debug)]
pub struct GreyscaleColourMap {
    max_iterations: u32,
}

impl GreyscaleColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<u32> for GreyscaleColourMap {
    fn map(&self, iterations: u32) -> Colour {
        Colour::grey(intensity(iterations, self.max_iterations))
    }

    fn display_name(&self) -> &str {
        "Greyscale"
    }
}
