use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use crate::controllers::gallery::config::GalleryConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::errors::FractalError;
use crate::core::fractals::barnsley_fern::generate::generate_barnsley_fern_cancelable;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::generate::generate_julia_cancelable;
use crate::core::fractals::koch::generate::generate_koch_curve_cancelable;
use crate::core::fractals::mandelbrot::generate::generate_mandelbrot_cancelable;
use crate::core::fractals::sierpinski::triangle::generate_sierpinski_triangle_cancelable;

/// Why one fractal of the gallery was not written.
#[derive(Debug)]
pub enum GalleryError {
    Render(FractalError),
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Write { path, source } => {
                write!(f, "could not write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for GalleryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<FractalError> for GalleryError {
    fn from(err: FractalError) -> Self {
        Self::Render(err)
    }
}

#[derive(Debug, Default)]
pub struct GalleryReport {
    pub written: Vec<(FractalKinds, PathBuf)>,
    pub failures: Vec<(FractalKinds, GalleryError)>,
    /// Set when the run stopped early on cancellation.
    pub cancelled: bool,
}

impl GalleryReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && !self.cancelled
    }
}

pub struct GalleryController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> GalleryController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    /// `<output_dir>/<stem>.<presenter extension>`
    #[must_use]
    pub fn output_path(&self, kind: FractalKinds, config: &GalleryConfig) -> PathBuf {
        config
            .output_dir
            .join(kind.file_stem())
            .with_extension(self.presenter.file_extension())
    }

    pub fn render(
        &self,
        kind: FractalKinds,
        config: &GalleryConfig,
    ) -> Result<PixelBuffer, FractalError> {
        self.render_cancelable(kind, config, &NeverCancel)
    }

    pub fn render_cancelable<C: CancelToken>(
        &self,
        kind: FractalKinds,
        config: &GalleryConfig,
        cancel: &C,
    ) -> Result<PixelBuffer, FractalError> {
        match kind {
            FractalKinds::Mandelbrot => generate_mandelbrot_cancelable(
                config.width,
                config.height,
                config.region()?,
                config.max_iterations,
                cancel,
            ),
            FractalKinds::Julia => generate_julia_cancelable(
                config.width,
                config.height,
                config.region()?,
                config.max_iterations,
                config.julia_constant,
                cancel,
            ),
            FractalKinds::KochCurve => generate_koch_curve_cancelable(config.koch_depth, cancel),
            FractalKinds::BarnsleyFern => match config.seed {
                Some(seed) => generate_barnsley_fern_cancelable(
                    config.fern_iterations,
                    &mut StdRng::seed_from_u64(seed),
                    cancel,
                ),
                None => generate_barnsley_fern_cancelable(
                    config.fern_iterations,
                    &mut rand::rng(),
                    cancel,
                ),
            },
            FractalKinds::SierpinskiTriangle => {
                generate_sierpinski_triangle_cancelable(config.sierpinski_depth, cancel)
            }
        }
    }

    fn render_and_present<C: CancelToken>(
        &self,
        kind: FractalKinds,
        config: &GalleryConfig,
        cancel: &C,
    ) -> Result<PathBuf, GalleryError> {
        let buffer = self.render_cancelable(kind, config, cancel)?;
        let path = self.output_path(kind, config);

        self.presenter
            .present(&buffer, &path)
            .map_err(|source| GalleryError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }

    /// Renders every fractal in `config.kinds` and writes it out. A failing
    /// fractal is logged and recorded in the report; the rest still run.
    /// Only failing to create the output directory aborts the run.
    pub fn run(&self, config: &GalleryConfig) -> io::Result<GalleryReport> {
        self.run_cancelable(config, &NeverCancel)
    }

    pub fn run_cancelable<C: CancelToken>(
        &self,
        config: &GalleryConfig,
        cancel: &C,
    ) -> io::Result<GalleryReport> {
        std::fs::create_dir_all(&config.output_dir)?;

        let start = Instant::now();
        let mut report = GalleryReport::default();

        for &kind in &config.kinds {
            info!("Rendering {}...", kind);

            match self.render_and_present(kind, config, cancel) {
                Ok(path) => {
                    info!("Saved to {}", path.display());
                    report.written.push((kind, path));
                }
                Err(GalleryError::Render(err)) if err.is_cancelled() => {
                    info!("Gallery cancelled while rendering {}", kind);
                    report.cancelled = true;
                    break;
                }
                Err(err) => {
                    warn!("Skipping {}: {}", kind, err);
                    report.failures.push((kind, err));
                }
            }
        }

        info!(
            "Gallery finished in {:?}: {} written, {} failed",
            start.elapsed(),
            report.written.len(),
            report.failures.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::CancelFlag;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use std::cell::RefCell;
    use std::path::Path;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(PathBuf, u32, u32)>>,
        fail: bool,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::other("disk full"));
            }
            self.presented.borrow_mut().push((
                filepath.as_ref().to_path_buf(),
                buffer.width(),
                buffer.height(),
            ));
            Ok(())
        }

        fn file_extension(&self) -> &str {
            "test"
        }
    }

    fn small_config(dir: &Path) -> GalleryConfig {
        GalleryConfig {
            output_dir: dir.to_path_buf(),
            width: 16,
            height: 12,
            max_iterations: 20,
            koch_depth: 2,
            fern_iterations: 1,
            sierpinski_depth: 1,
            seed: Some(3),
            ..GalleryConfig::default()
        }
    }

    #[test]
    fn test_output_path_uses_stem_and_extension() {
        let controller = GalleryController::new(RecordingPresenter::default());
        let config = GalleryConfig::default();

        assert_eq!(
            controller.output_path(FractalKinds::KochCurve, &config),
            PathBuf::from("output/koch_curve.test")
        );
    }

    #[test]
    fn test_run_presents_every_kind() {
        let dir = tempfile::tempdir().unwrap();
        let controller = GalleryController::new(RecordingPresenter::default());

        let report = controller.run(&small_config(dir.path())).unwrap();

        assert!(report.is_success());
        assert_eq!(report.written.len(), 5);

        let presented = controller.presenter.presented.borrow();
        assert_eq!(presented[0], (dir.path().join("mandelbrot.test"), 16, 12));
        assert_eq!(presented[1], (dir.path().join("julia.test"), 16, 12));
        assert_eq!(presented[2], (dir.path().join("koch_curve.test"), 800, 800));
        assert_eq!(presented[3].0, dir.path().join("barnsley_fern.test"));
        assert_eq!(presented[4].0, dir.path().join("sierpinski_triangle.test"));
    }

    #[test]
    fn test_invalid_fractal_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let controller = GalleryController::new(RecordingPresenter::default());
        let config = GalleryConfig {
            width: 1,
            kinds: vec![FractalKinds::Mandelbrot, FractalKinds::KochCurve],
            ..small_config(dir.path())
        };

        let report = controller.run(&config).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.written.len(), 1);
        assert_eq!(report.written[0].0, FractalKinds::KochCurve);
        assert!(matches!(
            report.failures[0],
            (
                FractalKinds::Mandelbrot,
                GalleryError::Render(FractalError::InvalidDimension { .. })
            )
        ));
    }

    #[test]
    fn test_write_failures_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let controller = GalleryController::new(RecordingPresenter {
            fail: true,
            ..RecordingPresenter::default()
        });
        let config = GalleryConfig {
            kinds: vec![FractalKinds::SierpinskiTriangle],
            ..small_config(dir.path())
        };

        let report = controller.run(&config).unwrap();

        assert!(matches!(report.failures[0].1, GalleryError::Write { .. }));
    }

    #[test]
    fn test_cancellation_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let controller = GalleryController::new(RecordingPresenter::default());

        let report = controller
            .run_cancelable(&small_config(dir.path()), &|| true)
            .unwrap();

        assert!(report.cancelled);
        assert!(report.written.is_empty());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_cancel_flag_set_mid_run_stops_before_next_fractal() {
        struct CancelAfterFirst(CancelFlag);

        impl FilePresenterPort for CancelAfterFirst {
            fn present(&self, _: &PixelBuffer, _: impl AsRef<Path>) -> io::Result<()> {
                self.0.cancel();
                Ok(())
            }

            fn file_extension(&self) -> &str {
                "test"
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let flag = CancelFlag::new();
        let controller = GalleryController::new(CancelAfterFirst(flag.clone()));

        let report = controller
            .run_cancelable(&small_config(dir.path()), &flag)
            .unwrap();

        assert!(report.cancelled);
        assert_eq!(report.written.len(), 1);
        assert_eq!(report.written[0].0, FractalKinds::Mandelbrot);
    }

    #[test]
    fn test_seeded_fern_renders_identically() {
        let dir = tempfile::tempdir().unwrap();
        let controller = GalleryController::new(RecordingPresenter::default());
        let config = small_config(dir.path());

        let first = controller.render(FractalKinds::BarnsleyFern, &config).unwrap();
        let second = controller.render(FractalKinds::BarnsleyFern, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_mandelbrot_uses_configured_window() {
        let dir = tempfile::tempdir().unwrap();
        let controller = GalleryController::new(RecordingPresenter::default());
        let config = GalleryConfig {
            width: 5,
            height: 5,
            ..small_config(dir.path())
        };

        let buffer = controller.render(FractalKinds::Mandelbrot, &config).unwrap();

        // centre pixel maps to the origin
        assert_eq!(buffer.get_pixel(Point::new(2, 2)), Some(Colour::WHITE));
    }
}
