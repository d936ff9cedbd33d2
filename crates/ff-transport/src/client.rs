//! Single-endpoint GraphQL client over the injected HTTP port.

use std::sync::Arc;

use ff_types::ports::http::{HttpClient, HttpRequest};
use serde_json::Value;

use crate::endpoint::endpoint_url;
use crate::error::TransportError;

/// Content type for every exchange with the service.
const CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// GraphQL client bound to one server endpoint and credential policy.
#[derive(Clone)]
pub struct GraphqlClient {
    http: Arc<dyn HttpClient>,
    endpoint: String,
    with_credentials: bool,
    timeout_secs: u64,
}

impl GraphqlClient {
    /// Binds a client to `server`. The endpoint URL is computed once here.
    /// `with_credentials` controls whether requests carry ambient cookies.
    pub fn new(http: Arc<dyn HttpClient>, server: &str, with_credentials: bool) -> Self {
        Self {
            http,
            endpoint: endpoint_url(server),
            with_credentials,
            timeout_secs: ff_config::tunables::http_timeout_secs(),
        }
    }

    /// POST one GraphQL document and classify the outcome. Success is
    /// status 200 with a well-formed body carrying no `errors` array.
    pub async fn post(&self, body: &Value) -> Result<Value, TransportError> {
        let request = HttpRequest::post(self.endpoint.as_str(), body.to_string().into_bytes())
            .with_header("Content-Type", CONTENT_TYPE)
            .credentials(self.with_credentials)
            .timeout(self.timeout_secs);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        if !response.is_success() {
            return Err(TransportError::Status(response.status));
        }

        let parsed: Value = serde_json::from_slice(&response.body)
            .map_err(|err| TransportError::Parse(err.to_string()))?;

        if let Some(message) = first_error_message(&parsed) {
            return Err(TransportError::Api(message));
        }

        Ok(parsed)
    }

    /// Fire-and-forget variant: the outcome is logged, never propagated.
    /// Used by heartbeats, where a single missed update is not fatal.
    pub async fn post_forget(&self, body: &Value) {
        if let Err(err) = self.post(body).await {
            tracing::warn!(error = %err, "tracking request dropped");
        }
    }
}

/// First `errors[].message` of an application-level error response.
fn first_error_message(body: &Value) -> Option<String> {
    let first = body.get("errors")?.as_array()?.first()?;
    Some(
        first
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_owned(),
    )
}
