//! HTTP client port for cross-crate HTTP abstraction.
//!
//! The tracking protocol is a single-endpoint JSON POST, so the request
//! descriptor models only what that exchange needs. The concrete client is
//! injected by the application layer (or a test stub), keeping the library
//! crates decoupled from any specific HTTP client library.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::PortError;

/// A single POST exchange with the tracking service.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Full URL of the endpoint.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// JSON document bytes.
    pub body: Vec<u8>,
    /// Attach ambient credentials (cookies) to the request.
    pub with_credentials: bool,
    /// Timeout in seconds (0 = no timeout).
    pub timeout_secs: u64,
}

impl HttpRequest {
    /// Create a POST request carrying `body`.
    pub fn post(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            body,
            with_credentials: false,
            timeout_secs: 0,
        }
    }

    /// Add a header to the request.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set whether ambient credentials are attached.
    pub fn credentials(mut self, with_credentials: bool) -> Self {
        self.with_credentials = with_credentials;
        self
    }

    /// Set the request timeout in seconds (0 = no timeout).
    pub fn timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Response descriptor: the wire contract only inspects status and body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// The tracking service treats exactly 200 as success.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Port trait for performing HTTP requests.
///
/// Implementations should handle TLS, redirects, and timeouts internally.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    fn execute(
        &self,
        req: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, PortError>> + Send + '_>>;
}
