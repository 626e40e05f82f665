use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// How many pixels (or IFS points) are processed between cancellation polls.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

/// A render stopped because its token asked it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Polled by long-running generators. Tokens are shared with rayon workers,
/// so they must be `Send + Sync`.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    /// `Err(Cancelled)` once cancellation has been requested, for use with `?`.
    fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Any `Fn() -> bool` is a token, e.g. `&|| deadline_passed()`.
impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cloneable flag for cancelling a render from another thread. Clones share
/// the same state; once set it stays set.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl CancelToken for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
