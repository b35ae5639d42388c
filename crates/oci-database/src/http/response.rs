//! HTTP response handling

use crate::error::{Error, Result};
use bytes::Bytes;
use futures::Stream;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::pin::Pin;
use std::time::Duration;

/// Boxed stream of body chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Raw HTTP response with the body fully read.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    /// Retries performed before this response was obtained
    pub retries_taken: u32,
    /// Time spent on the final attempt
    pub elapsed: Duration,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            retries_taken: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Check if the response indicates success.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turn a non-2xx response into the matching [`Error`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::from_response(
                self.status.as_u16(),
                &String::from_utf8_lossy(&self.body),
                &self.headers,
            ))
        }
    }

    /// Deserialize a successful body.
    pub fn parse_result<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.is_success() {
            return Err(Error::from_response(
                self.status.as_u16(),
                &String::from_utf8_lossy(&self.body),
                &self.headers,
            ));
        }
        serde_json::from_slice(&self.body).map_err(|e| {
            Error::ResponseValidation(format!("{e} (status {})", self.status.as_u16()))
        })
    }

    /// Deserialize the body into an [`ApiResponse`] keeping the metadata.
    pub fn into_api_response<T: DeserializeOwned>(self) -> Result<ApiResponse<T>> {
        let data = self.parse_result()?;
        Ok(ApiResponse::new(
            data,
            self.status,
            self.headers,
            self.retries_taken,
        ))
    }

    /// Discard the body of a successful response.
    pub fn into_empty_response(self) -> Result<ApiResponse<()>> {
        let response = self.error_for_status()?;
        Ok(ApiResponse::new(
            (),
            response.status,
            response.headers,
            response.retries_taken,
        ))
    }

    /// Keep the raw body of a successful response.
    pub fn into_bytes_response(self) -> Result<ApiResponse<Bytes>> {
        let response = self.error_for_status()?;
        Ok(ApiResponse::new(
            response.body,
            response.status,
            response.headers,
            response.retries_taken,
        ))
    }
}

/// Response whose body has not been read yet.
pub struct StreamingResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: ByteStream,
}

impl StreamingResponse {
    /// Create a new streaming response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: ByteStream) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Fail with the service error for non-2xx responses, reading the
    /// error body from the stream.
    pub async fn error_for_status(self) -> Result<Self> {
        use futures::TryStreamExt;

        if self.status.is_success() {
            return Ok(self);
        }
        let chunks: Vec<Bytes> = self.body.try_collect().await?;
        let body = chunks.concat();
        Err(Error::from_response(
            self.status.as_u16(),
            &String::from_utf8_lossy(&body),
            &self.headers,
        ))
    }

    /// Split into metadata and the body stream.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, ByteStream) {
        (self.status, self.headers, self.body)
    }
}

impl fmt::Debug for StreamingResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamingResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Result of a service operation: the decoded body plus HTTP metadata.
///
/// # Example
///
/// ```rust,no_run
/// # use oci_database::{DatabaseClient, options::ReadOptions};
/// # async fn example(client: DatabaseClient) -> oci_database::Result<()> {
/// let response = client
///     .db_systems()
///     .get("ocid1.dbsystem.oc1..example", ReadOptions::default())
///     .await?;
///
/// println!("etag: {:?}", response.etag());
/// println!("request: {:?}", response.opc_request_id());
/// let db_system = response.into_data();
/// # let _ = db_system;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    data: T,
    status: StatusCode,
    headers: HeaderMap,
    retries_taken: u32,
}

impl<T> ApiResponse<T> {
    /// Create a new response wrapper.
    pub fn new(data: T, status: StatusCode, headers: HeaderMap, retries_taken: u32) -> Self {
        Self {
            data,
            status,
            headers,
            retries_taken,
        }
    }

    /// Decoded body.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Take the decoded body.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Status code as a number.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a specific header value as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Request ID assigned by the service.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.header("opc-request-id")
    }

    /// Entity tag, usable as `if_match` on a later update.
    pub fn etag(&self) -> Option<&str> {
        self.header("etag")
    }

    /// Token for the next page of a list operation.
    pub fn next_page(&self) -> Option<&str> {
        self.header("opc-next-page")
    }

    /// Work request tracking an asynchronous operation.
    pub fn work_request_id(&self) -> Option<&str> {
        self.header("opc-work-request-id")
    }

    /// Number of retries performed (0 when the first attempt succeeded).
    pub fn retries_taken(&self) -> u32 {
        self.retries_taken
    }

    /// Transform the body, keeping the metadata.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            status: self.status,
            headers: self.headers,
            retries_taken: self.retries_taken,
        }
    }
}
