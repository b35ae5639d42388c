//! # oci-database
//!
//! Async Rust client for the cloud Database service REST API (version
//! `20160918`), covering:
//! - Autonomous databases, container databases and Exadata infrastructure
//! - DB systems, DB homes, databases, DB nodes and patches
//! - Backups, backup destinations and external backup jobs
//! - Data Guard associations
//! - Exadata Cloud@Customer infrastructure, VM cluster networks and VM clusters
//! - Maintenance runs
//!
//! Every operation validates its parameters before any I/O, carries an
//! `opc-retry-token` when it changes server state, and can be wrapped in the
//! service's retry policy.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oci_database::{DatabaseClient, options::ReadOptions};
//! use oci_database::resources::ListDbSystemsOptions;
//! use oci_database::signer::SessionTokenSigner;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DatabaseClient::builder()
//!         .region("us-phoenix-1")
//!         .signer(Arc::new(SessionTokenSigner::new("token", "us-phoenix-1")))
//!         .build()?;
//!
//!     let db_systems = client
//!         .db_systems()
//!         .list("ocid1.compartment.oc1..example", ListDbSystemsOptions::default())
//!         .await?;
//!
//!     for db_system in db_systems.data() {
//!         println!("{} {:?}", db_system.display_name, db_system.lifecycle_state);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{DatabaseClient, DatabaseClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::ApiResponse;
pub use oci_database_core::retry::RetryConfig;
pub use options::RetrySetting;

// Module declarations
pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod http;
pub mod observability;
pub mod options;
pub mod pagination;
pub mod regions;
pub mod resources;
pub mod signer;
pub mod types;
mod validation;


/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use oci_database::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ApiResponse, ClientConfig, DatabaseClient, Error, Result, RetryConfig, RetrySetting,
        download::{DownloadSink, FileSink},
        options::{ConditionalOptions, CreateOptions, ListOptions, PageOptions, ReadOptions},
        signer::{RegionAware, Signer},
        types::{SortBy, SortOrder, WireEnum},
    };
}

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service API version, appended to every endpoint
pub const API_VERSION: &str = "20160918";

/// Install a `tracing` subscriber honouring `RUST_LOG`.
///
/// Defaults to `oci_database=info` when `RUST_LOG` is unset. Calling it
/// twice is harmless; the second call is ignored.
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("oci_database=info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_api_version() {
        assert_eq!(API_VERSION, "20160918");
    }
}
