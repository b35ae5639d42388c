//! Structured logging of service calls
//!
//! Every HTTP exchange is logged through this module so that field names
//! stay consistent across the transport, the middleware and downloads.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Request fields attached to every log line of a call.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// Operation name, e.g. `ListDbHomes`
    pub operation: &'static str,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request path relative to the endpoint
    pub path: String,
    /// Request body size in bytes (optional)
    pub body_size: Option<usize>,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(operation: &'static str, method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            operation,
            method: method.into(),
            path: path.into(),
            body_size: None,
        }
    }

    /// Describe an [`ApiRequest`](crate::http::ApiRequest).
    pub fn from_request(request: &crate::http::ApiRequest) -> Self {
        let metadata = Self::new(
            request.operation(),
            request.method().as_str(),
            request.path(),
        );
        match request.body() {
            Some(body) => metadata.with_body_size(body.len()),
            None => metadata,
        }
    }

    /// Set the request body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            operation = self.operation,
            method = %self.method,
            path = %self.path,
            body_size = self.body_size,
            "Sending service request"
        );
    }
}

/// Response fields for the completion log line.
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes (optional)
    pub body_size: Option<usize>,
    /// Time elapsed for the request
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, elapsed: Duration) -> Self {
        Self {
            status,
            body_size: None,
            elapsed,
        }
    }

    /// Set the response body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log the outcome, at `debug` for success and `warn` otherwise.
    pub fn log(&self, request: &RequestMetadata) {
        if (200..300).contains(&self.status) {
            debug!(
                operation = request.operation,
                method = %request.method,
                path = %request.path,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "Service request succeeded"
            );
        } else {
            warn!(
                operation = request.operation,
                method = %request.method,
                path = %request.path,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                "Service request returned an error status"
            );
        }
    }
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Progress of a download written to a sink.
pub struct DownloadContext {
    operation: &'static str,
    /// Chunks written so far
    pub chunk_count: u32,
    /// Bytes written so far
    pub bytes_written: u64,
    timer: RequestTimer,
}

impl DownloadContext {
    /// Start tracking a download
    pub fn start(operation: &'static str) -> Self {
        debug!(operation, "Opening download stream");
        Self {
            operation,
            chunk_count: 0,
            bytes_written: 0,
            timer: RequestTimer::start(),
        }
    }

    /// Record a chunk handed to the sink
    pub fn record_chunk(&mut self, len: usize) {
        self.chunk_count += 1;
        self.bytes_written += len as u64;
    }

    /// Log download completed
    pub fn log_complete(&self) {
        info!(
            operation = self.operation,
            chunk_count = self.chunk_count,
            bytes = self.bytes_written,
            elapsed_ms = self.timer.elapsed().as_millis(),
            "Download completed"
        );
    }

    /// Log download error
    pub fn log_error(&self, error: &str) {
        warn!(
            operation = self.operation,
            chunk_count = self.chunk_count,
            bytes = self.bytes_written,
            error = %error,
            "Download failed"
        );
    }
}

/// Log a rejected parameter
pub fn log_validation_error(field: &str, reason: &str) {
    debug!(
        field = %field,
        reason = %reason,
        "Request validation failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ApiRequest;
    use http::Method;

    #[test]
    fn test_request_metadata_from_request() {
        let request = ApiRequest::new("CreateBackup", Method::POST, "/backups")
            .json_body(&serde_json::json!({"databaseId": "d"}))
            .unwrap();
        let metadata = RequestMetadata::from_request(&request);

        assert_eq!(metadata.operation, "CreateBackup");
        assert_eq!(metadata.method, "POST");
        assert_eq!(metadata.path, "/backups");
        assert_eq!(metadata.body_size, Some(request.body().unwrap().len()));
    }

    #[test]
    fn test_response_metadata_creation() {
        let elapsed = Duration::from_millis(500);
        let metadata = ResponseMetadata::new(200, elapsed).with_body_size(42);
        assert_eq!(metadata.status, 200);
        assert_eq!(metadata.elapsed, elapsed);
        assert_eq!(metadata.body_size, Some(42));
    }

    #[test]
    fn test_request_timer() {
        let timer = RequestTimer::start();
        std::thread::sleep(Duration::from_millis(10));
        assert!(timer.elapsed().as_millis() >= 10);
    }

    #[test]
    fn test_download_context_counts_chunks() {
        let mut ctx = DownloadContext::start("GenerateAutonomousDatabaseWallet");
        ctx.record_chunk(1024);
        ctx.record_chunk(512);
        assert_eq!(ctx.chunk_count, 2);
        assert_eq!(ctx.bytes_written, 1536);
    }
}
