//! `reqwest` based transport
//!
//! Joins the endpoint with the request path, applies default headers,
//! signs, runs the middleware stack and maps transport failures.

use super::{
    ApiRequest, HttpProvider, Response, StreamingResponse,
    middleware::{Middleware, MiddlewareStack, RateLimitMiddleware, TracingMiddleware},
    provider::request_url,
};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::observability::RequestTimer;
use crate::signer::{Signer, SigningContext};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use http::HeaderMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("oci-database-rust/", env!("CARGO_PKG_VERSION"));

/// HTTP provider backed by `reqwest`.
///
/// # Example
///
/// ```rust,no_run
/// use oci_database::http::OciHttpProvider;
/// use oci_database::signer::BearerTokenSigner;
/// use std::sync::Arc;
///
/// let provider = OciHttpProvider::builder()
///     .signer(Arc::new(BearerTokenSigner::new("token")))
///     .timeout(std::time::Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct OciHttpProvider {
    inner: Arc<ProviderInner>,
}

struct ProviderInner {
    http_client: reqwest::Client,
    signer: Option<Arc<dyn Signer>>,
    default_headers: HeaderMap,
    timeout: Duration,
    middleware: MiddlewareStack,
}

impl std::fmt::Debug for ProviderInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderInner")
            .field("signer", &self.signer)
            .field("timeout", &self.timeout)
            .field("middleware", &self.middleware.len())
            .finish_non_exhaustive()
    }
}

impl OciHttpProvider {
    /// Create a new builder for configuring the provider.
    pub fn builder() -> OciHttpProviderBuilder {
        OciHttpProviderBuilder::default()
    }

    /// Build a provider from a client configuration.
    pub fn from_config(config: &ClientConfig, signer: Option<Arc<dyn Signer>>) -> Result<Self> {
        let mut builder = Self::builder().config(config.clone());
        if let Some(signer) = signer {
            builder = builder.signer(signer);
        }
        builder.build()
    }

    /// Resolve the URL and headers and sign them.
    fn prepare(&self, endpoint: &Url, request: &ApiRequest) -> Result<(Url, HeaderMap)> {
        let url = request_url(endpoint, request)?;

        let mut headers = self.inner.default_headers.clone();
        for (name, value) in request.headers() {
            headers.insert(name.clone(), value.clone());
        }

        if let Some(signer) = &self.inner.signer {
            let mut ctx = SigningContext::new(
                request.method(),
                &url,
                &mut headers,
                request.body().map(|b| b.as_ref()),
                request.signing_strategy(),
            );
            signer.sign(&mut ctx)?;
        }

        Ok((url, headers))
    }

    async fn send(&self, endpoint: &Url, request: &ApiRequest) -> Result<reqwest::Response> {
        self.inner.middleware.process_request(request).await?;
        let (url, headers) = self.prepare(endpoint, request)?;

        let mut builder = self
            .inner
            .http_client
            .request(request.method().clone(), url)
            .headers(headers);
        if let Some(body) = request.body() {
            builder = builder.body(body.clone());
        }

        builder.send().await.map_err(|e| self.map_transport_error(e))
    }

    fn map_transport_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Timeout(self.inner.timeout)
        } else if error.is_connect() || error.is_request() {
            Error::Connection(error.to_string())
        } else {
            Error::HttpClient(error.to_string())
        }
    }
}

#[async_trait]
impl HttpProvider for OciHttpProvider {
    async fn call_api(&self, endpoint: &Url, request: &ApiRequest) -> Result<Response> {
        let timer = RequestTimer::start();
        let resp = self.send(endpoint, request).await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let mut response = Response::new(status, headers, body);
        response.elapsed = timer.elapsed();

        self.inner
            .middleware
            .process_response(request, &response)
            .await?;
        Ok(response)
    }

    async fn call_api_streaming(
        &self,
        endpoint: &Url,
        request: &ApiRequest,
    ) -> Result<StreamingResponse> {
        let resp = self.send(endpoint, request).await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let stream = resp
            .bytes_stream()
            .map_err(|e| Error::Streaming(e.to_string()))
            .boxed();

        Ok(StreamingResponse::new(status, headers, stream))
    }

    fn provider_name(&self) -> &'static str {
        "oci"
    }
}

/// Builder for creating an `OciHttpProvider` with custom configuration.
#[derive(Default)]
pub struct OciHttpProviderBuilder {
    config: ClientConfig,
    signer: Option<Arc<dyn Signer>>,
    extra_middleware: Vec<Box<dyn Middleware>>,
}

impl OciHttpProviderBuilder {
    /// Take timeouts, proxy, pool, headers and rate limit from `config`.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sign requests with `signer`.
    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Append a middleware after the built-in ones.
    pub fn middleware(mut self, middleware: Box<dyn Middleware>) -> Self {
        self.extra_middleware.push(middleware);
        self
    }

    /// Build the provider with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the proxy is invalid or the HTTP client cannot
    /// be created.
    pub fn build(self) -> Result<OciHttpProvider> {
        let config = self.config;
        let pool = &config.connection_pool;

        let mut client_builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(pool.max_idle_per_host)
            .pool_idle_timeout(pool.idle_timeout)
            .tcp_keepalive(pool.tcp_keepalive);

        if let Some(proxy) = &config.proxy {
            client_builder = client_builder.proxy(proxy.to_reqwest()?);
        }

        let http_client = client_builder
            .build()
            .map_err(|e| Error::HttpClient(format!("Failed to build HTTP client: {e}")))?;

        let mut middleware = MiddlewareStack::new();
        if config.log_requests {
            middleware.push(Box::new(TracingMiddleware));
        }
        if let Some(rate_limit) = &config.rate_limit {
            middleware.push(Box::new(RateLimitMiddleware::new(
                rate_limit.requests_per_second,
                rate_limit.burst_size,
            )));
        }
        for extra in self.extra_middleware {
            middleware.push(extra);
        }

        Ok(OciHttpProvider {
            inner: Arc::new(ProviderInner {
                http_client,
                signer: self.signer,
                default_headers: config.default_headers,
                timeout: config.timeout,
                middleware,
            }),
        })
    }
}
