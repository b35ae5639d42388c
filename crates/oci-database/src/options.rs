//! Optional parameters shared by many operations.
//!
//! Every operation takes an options struct as its last argument. Reads take
//! [`ReadOptions`], creations [`CreateOptions`], and updates, deletes and
//! actions [`ConditionalOptions`]. List operations have their own structs
//! next to the resource that defines them, each embedding the common fields.
//!
//! ```rust
//! use oci_database::options::{ConditionalOptions, RetrySetting};
//!
//! let options = ConditionalOptions {
//!     if_match: Some("etag-from-get".to_string()),
//!     retry: RetrySetting::Disabled,
//!     ..Default::default()
//! };
//! # let _ = options;
//! ```

use crate::error::Result;
use crate::http::{ApiRequest, IF_MATCH, OPC_REQUEST_ID, OPC_RETRY_TOKEN};
use oci_database_core::retry::RetryConfig;

/// Which retry policy applies to a single call.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RetrySetting {
    /// Use the client's default policy; a single attempt when it has none.
    #[default]
    ClientDefault,
    /// Exactly one attempt, even when the client has a default policy.
    Disabled,
    /// Use this policy for the call.
    Custom(RetryConfig),
}

impl RetrySetting {
    /// Resolve against the client default.
    pub(crate) fn resolve<'a>(&'a self, client_default: Option<&'a RetryConfig>) -> Option<&'a RetryConfig> {
        match self {
            RetrySetting::ClientDefault => client_default,
            RetrySetting::Disabled => None,
            RetrySetting::Custom(config) => Some(config),
        }
    }
}

impl From<RetryConfig> for RetrySetting {
    fn from(config: RetryConfig) -> Self {
        RetrySetting::Custom(config)
    }
}

/// Options accepted by every operation.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Caller's request identifier, echoed in `opc-request-id`
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

impl ReadOptions {
    pub(crate) fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        request.header_opt(OPC_REQUEST_ID, self.opc_request_id.as_deref())
    }
}

/// Options of operations that create a resource or trigger a download.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Caller's request identifier, echoed in `opc-request-id`
    pub opc_request_id: Option<String>,
    /// Idempotency token; one is generated when absent
    pub opc_retry_token: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

impl CreateOptions {
    pub(crate) fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        request
            .header_opt(OPC_REQUEST_ID, self.opc_request_id.as_deref())?
            .header_opt(OPC_RETRY_TOKEN, self.opc_retry_token.as_deref())
    }
}

/// Options of operations guarded by an entity tag.
#[derive(Debug, Clone, Default)]
pub struct ConditionalOptions {
    /// Only proceed when the resource's current etag matches
    pub if_match: Option<String>,
    /// Caller's request identifier, echoed in `opc-request-id`
    pub opc_request_id: Option<String>,
    /// Idempotency token; one is generated when absent
    pub opc_retry_token: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

impl ConditionalOptions {
    /// Options that only carry an `if-match` etag.
    pub fn if_match(etag: impl Into<String>) -> Self {
        Self {
            if_match: Some(etag.into()),
            ..Default::default()
        }
    }

    pub(crate) fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        request
            .header_opt(IF_MATCH, self.if_match.as_deref())?
            .header_opt(OPC_REQUEST_ID, self.opc_request_id.as_deref())?
            .header_opt(OPC_RETRY_TOKEN, self.opc_retry_token.as_deref())
    }
}

/// Paging fields shared by list operations.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Maximum number of items per page
    pub limit: Option<u32>,
    /// Page token from a previous response's `opc-next-page`
    pub page: Option<String>,
}

impl PageOptions {
    pub(crate) fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        crate::validation::check_limit(self.limit)?;
        Ok(request
            .query_opt("limit", self.limit)
            .query_opt("page", self.page.as_deref()))
    }
}

/// Options of list operations that only page.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Paging
    pub paging: PageOptions,
    /// Caller's request identifier, echoed in `opc-request-id`
    pub opc_request_id: Option<String>,
    /// Retry policy for this call
    pub retry: RetrySetting,
}

impl ListOptions {
    pub(crate) fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        apply_list(request, &self.paging, self.opc_request_id.as_deref())
    }
}

/// Paging and request id, common to every list options struct.
pub(crate) fn apply_list(
    request: ApiRequest,
    paging: &PageOptions,
    opc_request_id: Option<&str>,
) -> Result<ApiRequest> {
    paging
        .apply(request)?
        .header_opt(OPC_REQUEST_ID, opc_request_id)
}

/// List options that can be driven by [`crate::pagination::list_all`].
pub trait Paginated: Clone {
    /// Point the options at the page identified by `token`.
    fn set_page(&mut self, token: Option<String>);
}

impl Paginated for ListOptions {
    fn set_page(&mut self, token: Option<String>) {
        self.paging.page = token;
    }
}

/// Implements [`Paginated`] for list options with a `paging` field.
macro_rules! paginated {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $crate::options::Paginated for $name {
                fn set_page(&mut self, token: Option<String>) {
                    self.paging.page = token;
                }
            }
        )+
    };
}

pub(crate) use paginated;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use http::Method;

    #[test]
    fn test_retry_setting_resolution() {
        let client_default = RetryConfig::default();
        let custom = RetryConfig::builder().max_attempts(2).build();

        assert_eq!(
            RetrySetting::ClientDefault.resolve(Some(&client_default)),
            Some(&client_default)
        );
        assert_eq!(RetrySetting::ClientDefault.resolve(None), None);
        assert_eq!(RetrySetting::Disabled.resolve(Some(&client_default)), None);

        let setting = RetrySetting::from(custom.clone());
        assert_eq!(setting.resolve(Some(&client_default)), Some(&custom));
    }

    #[test]
    fn test_conditional_options_headers() {
        let options = ConditionalOptions {
            if_match: Some("etag-1".into()),
            opc_request_id: Some("req-1".into()),
            opc_retry_token: Some("token-1".into()),
            ..Default::default()
        };
        let request = options
            .apply(ApiRequest::new("UpdateDbHome", Method::PUT, "/dbHomes/h"))
            .unwrap();

        assert_eq!(request.header_value("if-match"), Some("etag-1"));
        assert_eq!(request.header_value("opc-request-id"), Some("req-1"));
        assert_eq!(request.retry_token(), Some("token-1"));
    }

    #[test]
    fn test_read_options_without_values_adds_nothing() {
        let request = ReadOptions::default()
            .apply(ApiRequest::new("GetDbHome", Method::GET, "/dbHomes/h"))
            .unwrap();
        assert!(request.header_value("opc-request-id").is_none());
        assert!(request.header_value("if-match").is_none());
    }

    #[test]
    fn test_page_options() {
        let options = ListOptions {
            paging: PageOptions {
                limit: Some(25),
                page: Some("p2".into()),
            },
            ..Default::default()
        };
        let request = options
            .apply(ApiRequest::new("ListBackups", Method::GET, "/backups"))
            .unwrap();
        assert_eq!(request.query_value("limit"), Some("25"));
        assert_eq!(request.query_value("page"), Some("p2"));

        let zero = ListOptions {
            paging: PageOptions {
                limit: Some(0),
                page: None,
            },
            ..Default::default()
        };
        assert!(matches!(
            zero.apply(ApiRequest::new("ListBackups", Method::GET, "/backups")),
            Err(Error::InvalidParameter { name: "limit", .. })
        ));
    }

    #[test]
    fn test_set_page() {
        let mut options = ListOptions::default();
        options.set_page(Some("next".into()));
        assert_eq!(options.paging.page.as_deref(), Some("next"));
    }
}
