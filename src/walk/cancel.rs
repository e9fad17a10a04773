//! Cooperative cancellation for traversals.
//!
//! Workers poll the token at every filesystem entry. A cancelled worker
//! abandons its current unit without delivering a partial result.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{DirsiftError, Result};

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that every traversal holding this token stops.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// `Err(Cancelled)` once [`CancelToken::cancel`] has been called, for use
    /// with `?` at entry boundaries.
    ///
    /// # Errors
    /// Returns [`DirsiftError::Cancelled`] if cancellation was requested.
    #[inline]
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(DirsiftError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_token_is_not_cancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
    }

    #[test]
    fn clones_share_cancellation() {
        let token = CancelToken::new();
        let worker_copy = token.clone();

        token.cancel();

        assert!(worker_copy.is_cancelled());
        assert!(matches!(worker_copy.check(), Err(DirsiftError::Cancelled)));
    }
}
