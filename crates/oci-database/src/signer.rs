//! Request signing seam
//!
//! The client does not implement any request-signature algorithm. A
//! [`Signer`] receives every outgoing request just before it is sent and may
//! add whatever headers its scheme needs. Signers that know the region they
//! were issued for expose it through [`RegionAware`], which the client uses
//! as the last fallback when resolving its endpoint.

use crate::error::{Error, Result};
use crate::http::SigningStrategy;
use http::{HeaderMap, HeaderValue, Method, header};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use url::Url;

/// The parts of an outgoing request a signer may read or extend.
#[derive(Debug)]
pub struct SigningContext<'a> {
    /// HTTP method
    pub method: &'a Method,
    /// Fully resolved URL, including the query string
    pub url: &'a Url,
    /// Headers to send; signers add their own here
    pub headers: &'a mut HeaderMap,
    /// Body bytes, `None` when absent or excluded by [`SigningStrategy::ExcludeBody`]
    pub body: Option<&'a [u8]>,
}

impl<'a> SigningContext<'a> {
    /// Build a context, hiding the body when the strategy excludes it.
    pub fn new(
        method: &'a Method,
        url: &'a Url,
        headers: &'a mut HeaderMap,
        body: Option<&'a [u8]>,
        strategy: SigningStrategy,
    ) -> Self {
        let body = match strategy {
            SigningStrategy::Standard => body,
            SigningStrategy::ExcludeBody => None,
        };
        Self {
            method,
            url,
            headers,
            body,
        }
    }
}

/// A signer that knows its home region.
pub trait RegionAware {
    /// Region identifier, e.g. `us-ashburn-1`.
    fn region(&self) -> Option<&str>;
}

/// Signs outgoing requests.
pub trait Signer: Send + Sync + fmt::Debug {
    /// Add authentication headers to the request.
    fn sign(&self, request: &mut SigningContext<'_>) -> Result<()>;

    /// Region capability, when the signer has one.
    fn as_region_aware(&self) -> Option<&dyn RegionAware> {
        None
    }
}

fn bearer_header(token: &SecretString) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|e| Error::Signing(format!("token is not a valid header value: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Adds a static `Authorization: Bearer` header.
pub struct BearerTokenSigner {
    token: SecretString,
}

impl BearerTokenSigner {
    /// Sign with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

impl fmt::Debug for BearerTokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenSigner")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Signer for BearerTokenSigner {
    fn sign(&self, request: &mut SigningContext<'_>) -> Result<()> {
        request
            .headers
            .insert(header::AUTHORIZATION, bearer_header(&self.token)?);
        Ok(())
    }
}

/// Session token issued for a specific region.
pub struct SessionTokenSigner {
    token: SecretString,
    region: String,
}

impl SessionTokenSigner {
    /// Sign with a session token scoped to `region`.
    pub fn new(token: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            region: region.into(),
        }
    }
}

impl fmt::Debug for SessionTokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokenSigner")
            .field("token", &"[REDACTED]")
            .field("region", &self.region)
            .finish()
    }
}

impl RegionAware for SessionTokenSigner {
    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }
}

impl Signer for SessionTokenSigner {
    fn sign(&self, request: &mut SigningContext<'_>) -> Result<()> {
        request
            .headers
            .insert(header::AUTHORIZATION, bearer_header(&self.token)?);
        Ok(())
    }

    fn as_region_aware(&self) -> Option<&dyn RegionAware> {
        Some(self)
    }
}
