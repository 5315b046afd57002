//! Cooperative cancellation for store calls.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use crate::core::store::StoreError;

/// Calling context checked by every [`crate::core::store::QuoteStore`] operation.
///
/// Clones share the cancellation flag, so a clone handed to another task can
/// cancel the original. Cancellation is only observed at operation entry.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that is never cancelled unless [`CallContext::cancel`] is called.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires once `timeout` has elapsed.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::default()
        }
    }

    /// Marks this context and all of its clones as cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// True once cancelled or past the deadline.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Fails with [`StoreError::Cancelled`] when the context is done.
    pub fn check(&self) -> Result<(), StoreError> {
        if self.is_cancelled() {
            Err(StoreError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::CallContext;
    use crate::core::store::StoreError;

    #[test]
    fn background_context_is_live() {
        assert!(CallContext::background().check().is_ok());
    }

    #[test]
    fn cancel_is_visible_through_clones() {
        let ctx = CallContext::background();
        let clone = ctx.clone();
        clone.cancel();
        assert_eq!(ctx.check(), Err(StoreError::Cancelled));
    }

    #[test]
    fn elapsed_deadline_counts_as_cancelled() {
        let ctx = CallContext::with_deadline(Instant::now() - Duration::from_millis(1));
        assert!(ctx.is_cancelled());

        let ctx = CallContext::with_timeout(Duration::from_secs(60));
        assert!(!ctx.is_cancelled());
    }
}
