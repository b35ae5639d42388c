//! Service request description

use crate::error::{Error, Result};
use crate::types::{WireEnum, common::invalid_enum_value};
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use serde::Serialize;

/// Header carrying the idempotency token of mutating calls.
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";
/// Header carrying the caller's request identifier.
pub const OPC_REQUEST_ID: &str = "opc-request-id";
/// Optimistic concurrency header.
pub const IF_MATCH: &str = "if-match";

/// Whether the signer sees the request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SigningStrategy {
    /// Sign headers and body.
    #[default]
    Standard,
    /// Sign headers only.
    ExcludeBody,
}

/// A single service call, independent of the transport that sends it.
///
/// Resource methods build one of these per operation; the provider joins
/// the path onto the client endpoint, signs, and sends it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    operation: &'static str,
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    headers: HeaderMap,
    body: Option<Bytes>,
    signing_strategy: SigningStrategy,
}

impl ApiRequest {
    /// Create a request for `operation` with JSON accept and content types.
    pub fn new(operation: &'static str, method: Method, path: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Self {
            operation,
            method,
            path: path.into(),
            query: Vec::new(),
            headers,
            body: None,
            signing_strategy: SigningStrategy::Standard,
        }
    }

    /// Operation name, e.g. `GetDbSystem`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the versioned endpoint, starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Look up a query parameter.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Look up a header as a string.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Serialized JSON body, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Signing strategy for this operation.
    pub fn signing_strategy(&self) -> SigningStrategy {
        self.signing_strategy
    }

    /// Whether the method changes server state.
    pub fn is_mutating(&self) -> bool {
        matches!(self.method, Method::POST | Method::PUT | Method::DELETE)
    }

    /// The idempotency token, once set.
    pub fn retry_token(&self) -> Option<&str> {
        self.header_value(OPC_RETRY_TOKEN)
    }

    /// Append a query parameter.
    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Append a query parameter when present.
    pub fn query_opt<V: ToString>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Append a required string query parameter, rejecting blank values.
    pub fn required_query(self, name: &'static str, value: &str) -> Result<Self> {
        crate::validation::require_non_blank(name, value)?;
        Ok(self.query(name, value))
    }

    /// Append an enumerated query parameter when present.
    ///
    /// The forward-compatibility fallback of response enums is not a valid
    /// filter and is rejected with [`Error::InvalidEnumValue`].
    pub fn query_enum<E: WireEnum>(self, name: &'static str, value: Option<E>) -> Result<Self> {
        match value {
            Some(value) if !value.is_known() => Err(invalid_enum_value::<E>(value.as_str())),
            Some(value) => Ok(self.query(name, value.as_str())),
            None => Ok(self),
        }
    }

    /// Set a header, failing on invalid names or values.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = name
            .parse::<HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(name.to_string()))?;
        let value = value
            .parse::<HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value.to_string()))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Set a header when present.
    pub fn header_opt(self, name: &str, value: Option<&str>) -> Result<Self> {
        match value {
            Some(value) => self.header(name, value),
            None => Ok(self),
        }
    }

    /// Serialize `body` as the JSON request body.
    pub fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Override the accept type.
    pub fn accept(mut self, value: &'static str) -> Self {
        self.headers
            .insert(header::ACCEPT, HeaderValue::from_static(value));
        self
    }

    /// Override the signing strategy.
    pub fn signing_strategy_override(mut self, strategy: SigningStrategy) -> Self {
        self.signing_strategy = strategy;
        self
    }

    /// Generate an `opc-retry-token` for mutating calls that lack one.
    ///
    /// Called once per operation, before any attempt is made, so every
    /// retry of the call carries the same token.
    pub(crate) fn ensure_retry_token(&mut self) {
        if self.is_mutating() && !self.headers.contains_key(OPC_RETRY_TOKEN) {
            let token = uuid::Uuid::new_v4().simple().to_string();
            if let Ok(value) = HeaderValue::from_str(&token) {
                self.headers.insert(OPC_RETRY_TOKEN, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DbSystemLifecycleState, SortOrder};

    #[test]
    fn test_new_request_defaults() {
        let request = ApiRequest::new("GetBackup", Method::GET, "/backups/x");
        assert_eq!(request.operation(), "GetBackup");
        assert_eq!(request.header_value("accept"), Some("application/json"));
        assert_eq!(request.header_value("content-type"), Some("application/json"));
        assert!(request.body().is_none());
        assert!(!request.is_mutating());
        assert_eq!(request.signing_strategy(), SigningStrategy::Standard);
    }

    #[test]
    fn test_query_building() {
        let request = ApiRequest::new("ListBackups", Method::GET, "/backups")
            .query("compartmentId", "c1")
            .query_opt("limit", Some(10))
            .query_opt::<String>("page", None)
            .query_enum("sortOrder", Some(SortOrder::Desc))
            .unwrap();

        assert_eq!(
            request.query_pairs(),
            &[
                ("compartmentId", "c1".to_string()),
                ("limit", "10".to_string()),
                ("sortOrder", "DESC".to_string()),
            ]
        );
        assert_eq!(request.query_value("limit"), Some("10"));
        assert_eq!(request.query_value("page"), None);
    }

    #[test]
    fn test_query_enum_rejects_unknown_value() {
        let result = ApiRequest::new("ListDbSystems", Method::GET, "/dbSystems")
            .query_enum("lifecycleState", Some(DbSystemLifecycleState::UnknownValue));
        assert!(matches!(result, Err(Error::InvalidEnumValue { .. })));
    }

    #[test]
    fn test_required_query_rejects_blank() {
        let result = ApiRequest::new("ListDbSystems", Method::GET, "/dbSystems")
            .required_query("compartmentId", "");
        assert!(matches!(result, Err(Error::MissingParameter("compartmentId"))));
    }

    #[test]
    fn test_invalid_header_value() {
        let result = ApiRequest::new("GetDbNode", Method::GET, "/dbNodes/x")
            .header(IF_MATCH, "bad\nvalue");
        assert!(matches!(result, Err(Error::InvalidHeaderValue(_))));
    }

    #[test]
    fn test_retry_token_generated_once() {
        let mut request = ApiRequest::new("CreateBackup", Method::POST, "/backups");
        assert!(request.retry_token().is_none());

        request.ensure_retry_token();
        let first = request.retry_token().unwrap().to_string();
        assert_eq!(first.len(), 32);

        request.ensure_retry_token();
        assert_eq!(request.retry_token(), Some(first.as_str()));
    }

    #[test]
    fn test_retry_token_kept_when_supplied() {
        let mut request = ApiRequest::new("DeleteBackup", Method::DELETE, "/backups/x")
            .header(OPC_RETRY_TOKEN, "caller-token")
            .unwrap();
        request.ensure_retry_token();
        assert_eq!(request.retry_token(), Some("caller-token"));
    }

    #[test]
    fn test_no_retry_token_for_reads() {
        let mut request = ApiRequest::new("GetBackup", Method::GET, "/backups/x");
        request.ensure_retry_token();
        assert!(request.retry_token().is_none());
    }

    #[test]
    fn test_json_body() {
        let request = ApiRequest::new("CreateBackup", Method::POST, "/backups")
            .json_body(&serde_json::json!({"displayName": "nightly"}))
            .unwrap();
        assert_eq!(
            request.body().unwrap().as_ref(),
            br#"{"displayName":"nightly"}"#
        );
    }
}
