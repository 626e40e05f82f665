use std::path::PathBuf;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::fractals::fractal_kinds::FractalKinds;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_WIDTH: i32 = 800;
pub const DEFAULT_HEIGHT: i32 = 800;
pub const DEFAULT_XMIN: f64 = -2.0;
pub const DEFAULT_XMAX: f64 = 2.0;
pub const DEFAULT_YMIN: f64 = -2.0;
pub const DEFAULT_YMAX: f64 = 2.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27015);
pub const DEFAULT_KOCH_DEPTH: u32 = 10;
pub const DEFAULT_FERN_ITERATIONS: u32 = 100;
pub const DEFAULT_SIERPINSKI_DEPTH: u32 = 5;

/// One gallery run. Width, height, window and iteration budget apply to the
/// escape-time fractals; the others render on their own fixed canvases.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub output_dir: PathBuf,
    pub width: i32,
    pub height: i32,
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub max_iterations: u32,
    pub julia_constant: Complex,
    pub koch_depth: u32,
    pub fern_iterations: u32,
    pub sierpinski_depth: u32,
    /// Fern RNG seed; `None` draws from the thread-local generator.
    pub seed: Option<u64>,
    pub kinds: Vec<FractalKinds>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            xmin: DEFAULT_XMIN,
            xmax: DEFAULT_XMAX,
            ymin: DEFAULT_YMIN,
            ymax: DEFAULT_YMAX,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            julia_constant: DEFAULT_JULIA_CONSTANT,
            koch_depth: DEFAULT_KOCH_DEPTH,
            fern_iterations: DEFAULT_FERN_ITERATIONS,
            sierpinski_depth: DEFAULT_SIERPINSKI_DEPTH,
            seed: None,
            kinds: FractalKinds::ALL.to_vec(),
        }
    }
}

impl GalleryConfig {
    /// The escape-time viewing window.
    pub fn region(&self) -> Result<ComplexRect, ComplexRectError> {
        ComplexRect::from_bounds(self.xmin, self.xmax, self.ymin, self.ymax)
    }
}
