#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core abstractions for the `oci-database` client.
//!
//! This crate holds the retry executor used by every service operation:
//!
//! - [`retry::BackoffStrategy`] wraps a zero-argument async call and
//!   re-attempts it while the error allows it
//! - [`retry::RetryConfig`] is the service's exponential backoff policy
//!   with an attempt cap and an overall time budget
//! - [`retry::Retryable`] lets the error type of the caller decide which
//!   failures are worth another attempt
//!
//! The crate knows nothing about HTTP. The service client implements
//! [`retry::Retryable`] for its own error enum.
//!
//! # Examples
//!
//! ```rust
//! use oci_database_core::prelude::*;
//! use std::time::Duration;
//!
//! #[derive(Debug)]
//! struct Flaky;
//!
//! impl Retryable for Flaky {
//!     fn is_retryable(&self) -> bool {
//!         true
//!     }
//! }
//!
//! # async fn example() -> Result<(), Flaky> {
//! let retry = RetryConfig::builder()
//!     .max_attempts(3)
//!     .base_sleep_time(Duration::from_millis(100))
//!     .build();
//!
//! let value = retry.execute(|| async { Ok::<_, Flaky>(42) }).await?;
//! assert_eq!(value, 42);
//! # Ok(())
//! # }
//! ```

pub mod retry;

/// Convenient re-exports of commonly used items.
/// Common imports for retry users
pub mod prelude {
    pub use crate::retry::{BackoffStrategy, RetryConfig, RetryConfigBuilder, Retryable};
}
