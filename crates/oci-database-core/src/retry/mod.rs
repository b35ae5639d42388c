//! Retry executor and backoff policy.
//!
//! # Key Types
//!
//! - [`BackoffStrategy`] - wraps an async call in retry semantics
//! - [`RetryConfig`] - exponential backoff with jitter, attempt cap and time budget
//! - [`Retryable`] - predicate implemented by the caller's error type
//!
//! # Examples
//!
//! ```rust
//! use oci_database_core::retry::{BackoffStrategy, RetryConfig, Retryable};
//! use std::time::Duration;
//!
//! #[derive(Debug)]
//! struct Transient;
//!
//! impl Retryable for Transient {
//!     fn is_retryable(&self) -> bool {
//!         true
//!     }
//! }
//!
//! # async fn example() -> Result<(), Transient> {
//! let retry = RetryConfig::builder()
//!     .max_attempts(4)
//!     .base_sleep_time(Duration::from_millis(50))
//!     .build();
//!
//! let result = retry.execute(|| async { Ok::<_, Transient>("done") }).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod strategy;

pub use config::{RetryConfig, RetryConfigBuilder};
pub use strategy::{BackoffStrategy, Retryable};
