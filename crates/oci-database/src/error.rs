//! Error types for the Database service client
//!
//! Client-side validation failures are raised before any network I/O and
//! are never retried. Service failures are mapped from the HTTP status and
//! the service's JSON error body (`{"code": ..., "message": ...}`).

use oci_database_core::retry::Retryable;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Database service client.
#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter was blank.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A parameter value was rejected before sending.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// An enumerated value outside the allowed set.
    #[error("Invalid value '{value}' for {field}, allowed values are: {allowed}")]
    InvalidEnumValue {
        /// Enumerated field or type name
        field: &'static str,
        /// The rejected value
        value: String,
        /// Comma separated allowed values
        allowed: String,
    },

    /// Neither an endpoint nor a region could be determined.
    #[error(
        "Missing region: set a region on the builder or configuration, use a region-aware signer, or give an explicit endpoint"
    )]
    MissingRegion,

    /// Bad request (400).
    #[error("Bad request ({code}): {message}")]
    BadRequest {
        /// Service error code
        code: String,
        /// Service error message
        message: String,
        /// Request ID for support
        opc_request_id: Option<String>,
    },

    /// Authentication failed (401).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Service error message
        message: String,
        /// Request ID for support
        opc_request_id: Option<String>,
    },

    /// Resource missing or caller lacks permission (404).
    #[error("Not authorized or not found ({code}): {message}")]
    NotAuthorizedOrNotFound {
        /// Service error code
        code: String,
        /// Service error message
        message: String,
        /// Request ID for support
        opc_request_id: Option<String>,
    },

    /// Conflict (409), for example a resource in the wrong lifecycle state.
    #[error("Conflict ({code}): {message}")]
    Conflict {
        /// Service error code
        code: String,
        /// Service error message
        message: String,
        /// Request ID for support
        opc_request_id: Option<String>,
    },

    /// The `if-match` precondition did not hold (412).
    #[error("Precondition failed: {message}")]
    PreconditionFailed {
        /// Service error message
        message: String,
        /// Request ID for support
        opc_request_id: Option<String>,
    },

    /// Too many requests (429).
    #[error("Too many requests")]
    RateLimit {
        /// Delay suggested by the service
        retry_after: Option<Duration>,
        /// Request ID for support
        opc_request_id: Option<String>,
    },

    /// Internal server error (500+).
    #[error("Internal server error (status {status}): {message}")]
    InternalServerError {
        /// HTTP status code
        status: u16,
        /// Service error message
        message: String,
        /// Request ID for support
        opc_request_id: Option<String>,
    },

    /// Service error for status codes not covered above.
    #[error("Service error (status {status}, {code}): {message}")]
    ServiceError {
        /// HTTP status code
        status: u16,
        /// Service error code
        code: String,
        /// Service error message
        message: String,
        /// Request ID for support
        opc_request_id: Option<String>,
    },

    /// Failed to interpret a response body.
    #[error("Failed to parse service response: {0}")]
    ResponseValidation(String),

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Error while reading a streamed response body.
    #[error("Streaming error: {0}")]
    Streaming(String),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Request signing failed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or unreadable configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a service error from an HTTP response status, body and headers.
    pub fn from_response(status: u16, body: &str, headers: &http::HeaderMap) -> Self {
        let opc_request_id = headers
            .get("opc-request-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let (code, message) = match serde_json::from_str::<ServiceErrorBody>(body) {
            Ok(parsed) => (parsed.code, parsed.message),
            Err(_) => (status_code_name(status).to_string(), body.to_string()),
        };

        match status {
            400 => Error::BadRequest {
                code,
                message,
                opc_request_id,
            },
            401 => Error::Authentication {
                message,
                opc_request_id,
            },
            404 => Error::NotAuthorizedOrNotFound {
                code,
                message,
                opc_request_id,
            },
            409 => Error::Conflict {
                code,
                message,
                opc_request_id,
            },
            412 => Error::PreconditionFailed {
                message,
                opc_request_id,
            },
            429 => Error::RateLimit {
                retry_after: headers
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .map(Duration::from_secs),
                opc_request_id,
            },
            s if s >= 500 => Error::InternalServerError {
                status: s,
                message,
                opc_request_id,
            },
            _ => Error::ServiceError {
                status,
                code,
                message,
                opc_request_id,
            },
        }
    }

    /// Check if this error is retryable.
    ///
    /// Throttling, server errors, connection failures, timeouts and the
    /// `IncorrectState` conflict are retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimit { .. } => true,
            Error::InternalServerError { .. } => true,
            Error::Connection(_) => true,
            Error::Timeout(_) => true,
            Error::Conflict { code, .. } => code == "IncorrectState",
            Error::ServiceError { status, .. } => *status == 408,
            _ => false,
        }
    }

    /// Whether the error was raised by client-side validation, before any I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter(_)
                | Error::InvalidParameter { .. }
                | Error::InvalidEnumValue { .. }
                | Error::InvalidHeaderName(_)
                | Error::InvalidHeaderValue(_)
        )
    }

    /// Get the retry delay suggested by the service, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        if let Error::RateLimit { retry_after, .. } = self {
            *retry_after
        } else {
            None
        }
    }

    /// Request ID reported by the service for this failure.
    pub fn opc_request_id(&self) -> Option<&str> {
        match self {
            Error::BadRequest { opc_request_id, .. }
            | Error::Authentication { opc_request_id, .. }
            | Error::NotAuthorizedOrNotFound { opc_request_id, .. }
            | Error::Conflict { opc_request_id, .. }
            | Error::PreconditionFailed { opc_request_id, .. }
            | Error::RateLimit { opc_request_id, .. }
            | Error::InternalServerError { opc_request_id, .. }
            | Error::ServiceError { opc_request_id, .. } => opc_request_id.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a service failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadRequest { .. } => Some(400),
            Error::Authentication { .. } => Some(401),
            Error::NotAuthorizedOrNotFound { .. } => Some(404),
            Error::Conflict { .. } => Some(409),
            Error::PreconditionFailed { .. } => Some(412),
            Error::RateLimit { .. } => Some(429),
            Error::InternalServerError { status, .. } | Error::ServiceError { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl Retryable for Error {
    fn is_retryable(&self) -> bool {
        Error::is_retryable(self)
    }

    fn retry_after(&self) -> Option<Duration> {
        Error::retry_after(self)
    }
}

#[derive(Debug, serde::Deserialize)]
struct ServiceErrorBody {
    code: String,
    message: String,
}

fn status_code_name(status: u16) -> &'static str {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown")
}
