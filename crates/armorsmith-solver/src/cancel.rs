//! Cooperative cancellation via a shared AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation request.
///
/// Clones observe the same flag, so a UI thread can hold one clone while a
/// search polls another. Searches only look at the flag between solves;
/// a solve in progress always runs to completion.
///
/// # Example
///
/// ```
/// use armorsmith_solver::CancelFlag;
///
/// let flag = CancelFlag::new();
/// let handle = flag.clone();
///
/// handle.cancel();
/// assert!(flag.is_cancelled());
///
/// flag.reset();
/// assert!(!handle.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Clears a previous request.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
