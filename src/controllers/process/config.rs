use std::path::PathBuf;

pub const REFERENCE_RESIZE: (i32, i32) = (400, 400);
pub const REFERENCE_BRIGHTNESS: i32 = 50;
pub const REFERENCE_CONTRAST: f64 = 1.5;
pub const REFERENCE_SATURATION: f64 = 1.5;

/// Filter steps to apply, in the fixed order resize, brightness, contrast,
/// saturation, edge detection. `None` skips a step.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub resize: Option<(i32, i32)>,
    pub brightness: Option<i32>,
    pub contrast: Option<f64>,
    pub saturation: Option<f64>,
    pub edge_detect: bool,
}

impl ProcessConfig {
    /// No filters: the image is copied through the codec unchanged.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            resize: None,
            brightness: None,
            contrast: None,
            saturation: None,
            edge_detect: false,
        }
    }

    /// Every step enabled: resize to 400x400, brightness +50, contrast and
    /// saturation 1.5, then edge detection.
    pub fn reference(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            resize: Some(REFERENCE_RESIZE),
            brightness: Some(REFERENCE_BRIGHTNESS),
            contrast: Some(REFERENCE_CONTRAST),
            saturation: Some(REFERENCE_SATURATION),
            edge_detect: true,
            ..Self::new(input, output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_steps() {
        let config = ProcessConfig::new("in.ppm", "out.ppm");

        assert_eq!(config.input, PathBuf::from("in.ppm"));
        assert_eq!(config.resize, None);
        assert!(!config.edge_detect);
    }

    #[test]
    fn test_reference_enables_every_step() {
        let config = ProcessConfig::reference("in.ppm", "out.ppm");

        assert_eq!(config.resize, Some((400, 400)));
        assert_eq!(config.brightness, Some(50));
        assert_eq!(config.contrast, Some(1.5));
        assert_eq!(config.saturation, Some(1.5));
        assert!(config.edge_detect);
        assert_eq!(config.output, PathBuf::from("out.ppm"));
    }
}
