//! HTTP transport abstraction
//!
//! The client never owns connection handling. It hands fully-built requests
//! to an [`HttpTransport`], which is responsible for TLS, pooling and
//! timeouts. `reqwest::Client` is the production transport.

use reqwest::{Client, Request, Response};

/// Sends a built request and returns the raw response.
///
/// Implementations must be safe to share between concurrent callers; the
/// client issues every call through the same transport.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one request. Errors are surfaced to callers unchanged.
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error>;
}

#[async_trait::async_trait]
impl HttpTransport for Client {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        Client::execute(self, request).await
    }
}
