use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::ppm::write_ppm;

/// Presents buffers as binary PPM files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        write_ppm(buffer, filepath)
    }

    fn file_extension(&self) -> &str {
        "ppm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ppm::read_ppm;

    #[test]
    fn test_present_writes_readable_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        let buffer = PixelBuffer::with_size(4, 3).unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        assert_eq!(read_ppm(&path).unwrap(), buffer);
    }

    #[test]
    fn test_present_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.ppm");
        let buffer = PixelBuffer::with_size(1, 1).unwrap();

        assert!(PpmFilePresenter::new().present(&buffer, &path).is_err());
    }

    #[test]
    fn test_extension() {
        assert_eq!(PpmFilePresenter::default().file_extension(), "ppm");
    }
}
