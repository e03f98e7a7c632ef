//! Cooperative cancellation.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

/// A shared one-way flag between a caller and a running build.
///
/// The builder samples the flag between vertex expansions and between
/// generator applications; setting it from another thread stops the
/// expansion loop at the next sample point. Writes are monotonic
/// (false → true), so acquire/release ordering is all that is needed.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
