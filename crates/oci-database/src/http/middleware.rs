//! HTTP middleware for request/response processing

use super::{ApiRequest, Response};
use crate::error::Result;
use crate::observability::{RequestMetadata, ResponseMetadata};
use async_trait::async_trait;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Hook run around every call made by [`OciHttpProvider`](super::OciHttpProvider).
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Called before the request is sent.
    async fn process_request(&self, request: &ApiRequest) -> Result<()> {
        let _ = request;
        Ok(())
    }

    /// Called after a response has been read.
    async fn process_response(&self, request: &ApiRequest, response: &Response) -> Result<()> {
        let _ = (request, response);
        Ok(())
    }
}

/// Middleware that adds logging/tracing.
pub struct TracingMiddleware;

#[async_trait]
impl Middleware for TracingMiddleware {
    async fn process_request(&self, request: &ApiRequest) -> Result<()> {
        RequestMetadata::from_request(request).log_request();
        Ok(())
    }

    async fn process_response(&self, request: &ApiRequest, response: &Response) -> Result<()> {
        ResponseMetadata::new(response.status().as_u16(), response.elapsed)
            .with_body_size(response.body().len())
            .log(&RequestMetadata::from_request(request));
        Ok(())
    }
}

/// Middleware that adds client-side rate limiting.
pub struct RateLimitMiddleware {
    governor: Arc<governor::DefaultDirectRateLimiter>,
}

impl RateLimitMiddleware {
    /// Create a new rate limit middleware.
    ///
    /// Rates below 1 request per second are raised to 1; a zero burst is
    /// raised to 1.
    pub fn new(requests_per_second: f64, burst_size: u32) -> Self {
        use governor::{Quota, RateLimiter};

        let rate = NonZeroU32::new(requests_per_second.max(1.0) as u32).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(rate).allow_burst(burst);

        Self {
            governor: Arc::new(RateLimiter::direct(quota)),
        }
    }
}

#[async_trait]
impl Middleware for RateLimitMiddleware {
    async fn process_request(&self, _request: &ApiRequest) -> Result<()> {
        self.governor.until_ready().await;
        Ok(())
    }
}

/// Composite middleware that chains multiple middleware.
#[derive(Default)]
pub struct MiddlewareStack {
    middlewares: Vec<Box<dyn Middleware>>,
}

impl MiddlewareStack {
    /// Create a new middleware stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a middleware to the stack.
    pub fn push(&mut self, middleware: Box<dyn Middleware>) {
        self.middlewares.push(middleware);
    }

    /// Number of middleware in the stack.
    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }
}

#[async_trait]
impl Middleware for MiddlewareStack {
    async fn process_request(&self, request: &ApiRequest) -> Result<()> {
        for middleware in &self.middlewares {
            middleware.process_request(request).await?;
        }
        Ok(())
    }

    async fn process_response(&self, request: &ApiRequest, response: &Response) -> Result<()> {
        // Responses unwind in reverse order
        for middleware in self.middlewares.iter().rev() {
            middleware.process_response(request, response).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, Method, StatusCode};
    use std::sync::Mutex;

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Middleware for Recorder {
        async fn process_request(&self, request: &ApiRequest) -> Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:request:{}", self.name, request.operation()));
            Ok(())
        }

        async fn process_response(&self, _request: &ApiRequest, response: &Response) -> Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:response:{}", self.name, response.status().as_u16()));
            Ok(())
        }
    }

    #[test]
    fn test_middleware_stack_creation() {
        let mut stack = MiddlewareStack::new();
        assert!(stack.is_empty());

        stack.push(Box::new(TracingMiddleware));
        stack.push(Box::new(RateLimitMiddleware::new(10.0, 20)));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_rate_limit_middleware_invalid_rate() {
        let _zero = RateLimitMiddleware::new(0.0, 0);
        let _negative = RateLimitMiddleware::new(-5.0, 1);
    }

    #[tokio::test]
    async fn test_stack_ordering() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut stack = MiddlewareStack::new();
        stack.push(Box::new(Recorder {
            name: "outer",
            log: Arc::clone(&log),
        }));
        stack.push(Box::new(Recorder {
            name: "inner",
            log: Arc::clone(&log),
        }));

        let request = ApiRequest::new("GetDbNode", Method::GET, "/dbNodes/n1");
        let response = Response::new(StatusCode::OK, HeaderMap::new(), "{}");

        stack.process_request(&request).await.unwrap();
        stack.process_response(&request, &response).await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "outer:request:GetDbNode",
                "inner:request:GetDbNode",
                "inner:response:200",
                "outer:response:200",
            ]
        );
    }

    #[tokio::test]
    async fn test_rate_limit_allows_burst() {
        let middleware = RateLimitMiddleware::new(50.0, 5);
        let request = ApiRequest::new("GetBackup", Method::GET, "/backups/b");
        for _ in 0..5 {
            middleware.process_request(&request).await.unwrap();
        }
    }
}
