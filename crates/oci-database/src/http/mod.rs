//! HTTP transport abstraction and middleware
//!
//! Resource methods describe each call as an [`ApiRequest`]; an
//! [`HttpProvider`] sends it and hands back a [`Response`] that the client
//! turns into an [`ApiResponse`] or an error.

pub use oci_provider::{OciHttpProvider, OciHttpProviderBuilder};
pub use provider::{HttpProvider, request_url};
pub use request::{ApiRequest, IF_MATCH, OPC_REQUEST_ID, OPC_RETRY_TOKEN, SigningStrategy};
pub use response::{ApiResponse, ByteStream, Response, StreamingResponse};

pub mod middleware;
mod oci_provider;
mod provider;
mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
