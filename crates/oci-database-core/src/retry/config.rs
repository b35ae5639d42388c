//! Exponential backoff policy with an attempt cap and a time budget.

use super::strategy::{BackoffStrategy, Retryable};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Retry policy applied to service calls.
///
/// Delays grow exponentially from `base_sleep_time` by
/// `exponential_growth_factor` per attempt, are randomized by `jitter`
/// and capped at `max_sleep_between_attempts`:
///
/// ```text
/// base  = base_sleep_time * factor ^ attempt
/// delay = min(base + base * jitter * random(-1, +1), max_sleep_between_attempts)
/// ```
///
/// A call is attempted at most `max_attempts` times in total, and no retry
/// is started once `max_elapsed_time` would be exceeded by the next sleep.
///
/// # Examples
///
/// ```rust
/// use oci_database_core::retry::RetryConfig;
/// use std::time::Duration;
///
/// // Service defaults: 8 attempts within 10 minutes
/// let retry = RetryConfig::default();
/// assert_eq!(retry.max_attempts(), 8);
///
/// let retry = RetryConfig::builder()
///     .max_attempts(5)
///     .max_elapsed_time(Duration::from_secs(60))
///     .base_sleep_time(Duration::from_millis(500))
///     .max_sleep_between_attempts(Duration::from_secs(10))
///     .build();
/// assert_eq!(retry.max_attempts(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    max_attempts: u32,
    max_elapsed_time: Duration,
    base_sleep_time: Duration,
    exponential_growth_factor: f64,
    max_sleep_between_attempts: Duration,
    jitter: f64,
}

impl RetryConfig {
    /// Create a new builder. Unset values fall back to the service defaults.
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::default()
    }

    /// A policy that performs exactly one attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Total number of attempts, including the first one.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Overall time budget for all attempts and sleeps.
    pub fn max_elapsed_time(&self) -> Duration {
        self.max_elapsed_time
    }

    /// Delay before the first retry, before growth and jitter.
    pub fn base_sleep_time(&self) -> Duration {
        self.base_sleep_time
    }

    /// Multiplier applied per attempt.
    pub fn exponential_growth_factor(&self) -> f64 {
        self.exponential_growth_factor
    }

    /// Upper bound on a single sleep.
    pub fn max_sleep_between_attempts(&self) -> Duration {
        self.max_sleep_between_attempts
    }

    /// Jitter fraction in `[0.0, 1.0]`.
    pub fn jitter(&self) -> f64 {
        self.jitter
    }
}

impl Default for RetryConfig {
    /// Service defaults:
    /// - `max_attempts`: 8
    /// - `max_elapsed_time`: 600s
    /// - `base_sleep_time`: 1s
    /// - `exponential_growth_factor`: 2.0
    /// - `max_sleep_between_attempts`: 30s
    /// - `jitter`: 0.25
    fn default() -> Self {
        Self {
            max_attempts: 8,
            max_elapsed_time: Duration::from_secs(600),
            base_sleep_time: Duration::from_secs(1),
            exponential_growth_factor: 2.0,
            max_sleep_between_attempts: Duration::from_secs(30),
            jitter: 0.25,
        }
    }
}

#[async_trait]
impl BackoffStrategy for RetryConfig {
    async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Retryable + Send,
    {
        let started = Instant::now();
        let mut attempt = 0;
        loop {
            let err = match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => err,
            };

            if !self.should_retry(&err, attempt) || attempt >= self.max_retries() {
                return Err(err);
            }

            let delay = match err.retry_after() {
                Some(hint) => hint.min(self.max_sleep_between_attempts),
                None => self.next_delay(attempt).unwrap_or_default(),
            };

            if started.elapsed() + delay > self.max_elapsed_time {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    attempt = attempt + 1,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Retry time budget exhausted"
                );
                return Err(err);
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(
                attempt = attempt + 1,
                delay_ms = delay.as_millis() as u64,
                "Retrying after retryable failure"
            );

            drop(err);
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let base = self.base_sleep_time.as_secs_f64() * self.exponential_growth_factor.powi(exponent);

        let jittered = if self.jitter > 0.0 {
            base + base * self.jitter * (rand::random::<f64>() - 0.5) * 2.0
        } else {
            base
        };

        let capped = jittered
            .min(self.max_sleep_between_attempts.as_secs_f64())
            .max(0.0);
        Some(Duration::from_secs_f64(capped))
    }

    fn max_retries(&self) -> u32 {
        self.max_attempts.saturating_sub(1)
    }
}

/// Builder for [`RetryConfig`].
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    max_attempts: Option<u32>,
    max_elapsed_time: Option<Duration>,
    base_sleep_time: Option<Duration>,
    exponential_growth_factor: Option<f64>,
    max_sleep_between_attempts: Option<Duration>,
    jitter: Option<f64>,
}

impl RetryConfigBuilder {
    /// Total attempts including the first. Values below 1 are raised to 1.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    /// Overall time budget.
    pub fn max_elapsed_time(mut self, budget: Duration) -> Self {
        self.max_elapsed_time = Some(budget);
        self
    }

    /// Delay before the first retry.
    pub fn base_sleep_time(mut self, delay: Duration) -> Self {
        self.base_sleep_time = Some(delay);
        self
    }

    /// Growth factor per attempt. Values below 1.0 are raised to 1.0.
    pub fn exponential_growth_factor(mut self, factor: f64) -> Self {
        self.exponential_growth_factor = Some(factor.max(1.0));
        self
    }

    /// Cap on a single sleep.
    pub fn max_sleep_between_attempts(mut self, cap: Duration) -> Self {
        self.max_sleep_between_attempts = Some(cap);
        self
    }

    /// Jitter fraction, clamped to `[0.0, 1.0]`.
    pub fn jitter(mut self, jitter: f64) -> Self {
        self.jitter = Some(jitter.clamp(0.0, 1.0));
        self
    }

    /// Build the policy.
    pub fn build(self) -> RetryConfig {
        let defaults = RetryConfig::default();
        RetryConfig {
            max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
            max_elapsed_time: self.max_elapsed_time.unwrap_or(defaults.max_elapsed_time),
            base_sleep_time: self.base_sleep_time.unwrap_or(defaults.base_sleep_time),
            exponential_growth_factor: self
                .exponential_growth_factor
                .unwrap_or(defaults.exponential_growth_factor),
            max_sleep_between_attempts: self
                .max_sleep_between_attempts
                .unwrap_or(defaults.max_sleep_between_attempts),
            jitter: self.jitter.unwrap_or(defaults.jitter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, PartialEq)]
    enum TestError {
        Transient,
        Fatal,
        Throttled(Duration),
    }

    impl Retryable for TestError {
        fn is_retryable(&self) -> bool {
            !matches!(self, TestError::Fatal)
        }

        fn retry_after(&self) -> Option<Duration> {
            match self {
                TestError::Throttled(delay) => Some(*delay),
                _ => None,
            }
        }
    }

    fn fast(max_attempts: u32) -> RetryConfig {
        RetryConfig::builder()
            .max_attempts(max_attempts)
            .base_sleep_time(Duration::from_millis(1))
            .max_sleep_between_attempts(Duration::from_millis(5))
            .jitter(0.0)
            .build()
    }

    #[test]
    fn test_exponential_delay_calculation() {
        let retry = RetryConfig::builder()
            .base_sleep_time(Duration::from_millis(100))
            .max_sleep_between_attempts(Duration::from_secs(10))
            .exponential_growth_factor(2.0)
            .jitter(0.0)
            .build();

        assert_eq!(retry.next_delay(0).unwrap(), Duration::from_millis(100));
        assert_eq!(retry.next_delay(1).unwrap(), Duration::from_millis(200));
        assert_eq!(retry.next_delay(2).unwrap(), Duration::from_millis(400));
        assert_eq!(retry.next_delay(3).unwrap(), Duration::from_millis(800));
    }

    #[test]
    fn test_delay_capped() {
        let retry = RetryConfig::builder()
            .base_sleep_time(Duration::from_secs(1))
            .max_sleep_between_attempts(Duration::from_secs(5))
            .exponential_growth_factor(10.0)
            .jitter(0.0)
            .build();

        for attempt in 3..40 {
            assert_eq!(retry.next_delay(attempt).unwrap(), Duration::from_secs(5));
        }
    }

    #[test]
    fn test_jitter_range() {
        let retry = RetryConfig::builder()
            .base_sleep_time(Duration::from_secs(1))
            .max_sleep_between_attempts(Duration::from_secs(60))
            .jitter(0.5)
            .build();

        for _ in 0..50 {
            let millis = retry.next_delay(0).unwrap().as_millis();
            assert!((500..=1500).contains(&millis), "delay {millis}ms out of range");
        }
    }

    #[test]
    fn test_builder_defaults() {
        let retry = RetryConfig::builder().build();
        assert_eq!(retry, RetryConfig::default());
        assert_eq!(retry.max_attempts(), 8);
        assert_eq!(retry.max_retries(), 7);
        assert_eq!(retry.max_elapsed_time(), Duration::from_secs(600));
    }

    #[test]
    fn test_builder_clamps() {
        let retry = RetryConfig::builder()
            .max_attempts(0)
            .jitter(3.0)
            .exponential_growth_factor(0.5)
            .build();

        assert_eq!(retry.max_attempts(), 1);
        assert_eq!(retry.jitter(), 1.0);
        assert_eq!(retry.exponential_growth_factor(), 1.0);
    }

    #[tokio::test]
    async fn test_success_on_third_attempt() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let result = fast(5)
            .execute(|| {
                let counter = Arc::clone(&counter);
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(TestError::Transient)
                    } else {
                        Ok(42)
                    }
                }
            })
            .await;

        assert_eq!(result, Ok(42));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_attempts_capped() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let result = fast(3)
            .execute(|| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(TestError::Transient)
                }
            })
            .await;

        assert_eq!(result, Err(TestError::Transient));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_error_returns_immediately() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let result = fast(5)
            .execute(|| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(TestError::Fatal)
                }
            })
            .await;

        assert_eq!(result, Err(TestError::Fatal));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_retry_is_single_attempt() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let _ = tokio_test::block_on(RetryConfig::no_retry().execute(|| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(TestError::Transient)
            }
        }));

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    proptest::proptest! {
        #[test]
        fn prop_delay_never_exceeds_cap(
            attempt in 0u32..200,
            base_ms in 1u64..5_000,
            cap_ms in 1u64..60_000,
            jitter in 0.0f64..1.0,
        ) {
            let retry = RetryConfig::builder()
                .base_sleep_time(Duration::from_millis(base_ms))
                .max_sleep_between_attempts(Duration::from_millis(cap_ms))
                .jitter(jitter)
                .build();

            let delay = retry.next_delay(attempt).unwrap();
            proptest::prop_assert!(delay <= Duration::from_millis(cap_ms));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_budget_stops_retries() {
        let retry = RetryConfig::builder()
            .max_attempts(100)
            .max_elapsed_time(Duration::from_secs(5))
            .base_sleep_time(Duration::from_secs(2))
            .exponential_growth_factor(1.0)
            .jitter(0.0)
            .build();

        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let result = retry
            .execute(|| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(TestError::Transient)
                }
            })
            .await;

        assert!(result.is_err());
        // sleeps at 0s->2s->4s, the third sleep would end at 6s
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_hint_is_capped() {
        let retry = RetryConfig::builder()
            .max_attempts(2)
            .max_sleep_between_attempts(Duration::from_secs(3))
            .build();

        let started = Instant::now();
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&attempts);

        let _ = retry
            .execute(|| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(TestError::Throttled(Duration::from_secs(120)))
                }
            })
            .await;

        assert_eq!(attempts.load(Ordering::SeqCst), 2);
        assert!(started.elapsed() >= Duration::from_secs(3));
        assert!(started.elapsed() < Duration::from_secs(120));
    }
}
