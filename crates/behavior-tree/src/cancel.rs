//! Cooperative cancellation for unbounded loops.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag that stops [`Repeater::forever`](crate::Repeater::forever) and
/// [`RepeatUntilFail`](crate::RepeatUntilFail) loops.
///
/// Clones share the same flag, so one clone can be handed to the tree while
/// another stays with whoever decides to stop it (another thread, or a leaf
/// that holds a clone).
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Loops observe it before their next iteration.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Clears the flag so the token can drive another evaluation.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }
}
