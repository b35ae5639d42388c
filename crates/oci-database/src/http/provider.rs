//! HTTP provider trait for abstracting the transport
//!
//! The client never talks to `reqwest` directly. Every operation goes
//! through an [`HttpProvider`], which lets tests substitute an in-process
//! transport and lets callers plug in their own stack.

use super::{ApiRequest, Response, StreamingResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use url::Url;

/// Transport used by [`DatabaseClient`](crate::DatabaseClient).
#[async_trait]
pub trait HttpProvider: Send + Sync + fmt::Debug {
    /// Send a request and read the full response body.
    ///
    /// Non-2xx statuses are returned as a [`Response`]; the client maps them
    /// to errors. Only transport failures surface as `Err`.
    async fn call_api(&self, endpoint: &Url, request: &ApiRequest) -> Result<Response>;

    /// Send a request and return the body as a stream of chunks.
    async fn call_api_streaming(
        &self,
        endpoint: &Url,
        request: &ApiRequest,
    ) -> Result<StreamingResponse>;

    /// Get the provider name for debugging/logging.
    fn provider_name(&self) -> &'static str;
}

/// Join the versioned endpoint, the request path and its query string.
pub fn request_url(endpoint: &Url, request: &ApiRequest) -> Result<Url> {
    let base = endpoint.as_str().trim_end_matches('/');
    let mut url = Url::parse(&format!("{base}{}", request.path())).map_err(|e| {
        Error::InvalidUrl(format!(
            "Failed to construct URL from path '{}': {e}",
            request.path()
        ))
    })?;

    if !request.query_pairs().is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in request.query_pairs() {
            pairs.append_pair(name, value);
        }
    }

    Ok(url)
}
