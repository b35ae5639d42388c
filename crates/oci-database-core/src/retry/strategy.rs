//! The retry executor contract.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

/// Classifies failures for the retry executor.
///
/// Implemented by the error type of the wrapped operation. Only errors for
/// which [`is_retryable`](Retryable::is_retryable) returns `true` are
/// attempted again; everything else is returned to the caller immediately.
pub trait Retryable {
    /// Whether another attempt may succeed where this one failed.
    fn is_retryable(&self) -> bool;

    /// Server-provided delay hint, if any.
    ///
    /// When present it replaces the computed backoff delay for the next
    /// attempt (still subject to the strategy's cap).
    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

/// A strategy for retrying failed operations with backoff.
///
/// Implementations decide when to retry, how long to wait between attempts
/// and when to give up. Attempts always run sequentially inside the same
/// call; there are no parallel attempts.
///
/// # Examples
///
/// ```rust
/// use oci_database_core::retry::{BackoffStrategy, RetryConfig, Retryable};
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// #[derive(Debug)]
/// struct Busy;
///
/// impl Retryable for Busy {
///     fn is_retryable(&self) -> bool {
///         true
///     }
/// }
///
/// # async fn example() -> Result<(), Busy> {
/// let retry = RetryConfig::builder()
///     .max_attempts(3)
///     .base_sleep_time(Duration::from_millis(10))
///     .build();
///
/// let attempts = Arc::new(AtomicU32::new(0));
/// let value = retry.execute(|| {
///     let attempts = Arc::clone(&attempts);
///     async move {
///         if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
///             Err(Busy)
///         } else {
///             Ok(7)
///         }
///     }
/// }).await?;
/// assert_eq!(value, 7);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait BackoffStrategy: Send + Sync {
    /// Execute an operation with retry logic.
    ///
    /// The operation is called until it succeeds, fails with an error that
    /// is not retryable, or the strategy's budget is exhausted. The last
    /// error is returned unchanged.
    async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Retryable + Send;

    /// Determine if an error should be retried.
    ///
    /// The default defers to [`Retryable::is_retryable`].
    fn should_retry<E: Retryable>(&self, error: &E, attempt: u32) -> bool {
        let _ = attempt;
        error.is_retryable()
    }

    /// Calculate the delay before the next attempt.
    ///
    /// `attempt` is 0-indexed: `next_delay(0)` is the wait after the first
    /// failure. `None` means no delay.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Maximum number of retries after the initial attempt.
    fn max_retries(&self) -> u32;
}
