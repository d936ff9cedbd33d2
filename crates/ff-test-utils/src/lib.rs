//! ff-test-utils: scripted port implementations for tests.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ff_types::ports::env::VisitEnvironment;
use ff_types::ports::http::{HttpClient, HttpRequest, HttpResponse};
use ff_types::PortError;
use parking_lot::Mutex;
use serde_json::Value;

/// Scripted HTTP port: pops one canned reply per request and records every
/// request it saw. With an empty script it answers `200 {}`, which the wire
/// layer classifies as success — heartbeats keep flowing by default.
#[derive(Clone, Default)]
pub struct MockHttpClient {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    replies: VecDeque<Result<HttpResponse, PortError>>,
    requests: Vec<HttpRequest>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 reply carrying the given JSON body.
    pub fn push_json(&self, body: Value) {
        self.push_reply(Ok(HttpResponse {
            status: 200,
            body: body.to_string().into_bytes(),
        }));
    }

    /// Queue a reply with an arbitrary status and empty body.
    pub fn push_status(&self, status: u16) {
        self.push_reply(Ok(HttpResponse {
            status,
            body: Vec::new(),
        }));
    }

    /// Queue a reply with an arbitrary status and raw body.
    pub fn push_body(&self, status: u16, body: &str) {
        self.push_reply(Ok(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }));
    }

    /// Queue a network-level failure.
    pub fn push_network_error(&self, message: &str) {
        self.push_reply(Err(PortError::Io(message.to_owned())));
    }

    fn push_reply(&self, reply: Result<HttpResponse, PortError>) {
        self.inner.lock().replies.push_back(reply);
    }

    /// Number of requests executed so far.
    pub fn request_count(&self) -> usize {
        self.inner.lock().requests.len()
    }

    /// Every request body seen so far, parsed as JSON (Null when unparsable).
    pub fn request_bodies(&self) -> Vec<Value> {
        self.inner
            .lock()
            .requests
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap_or(Value::Null))
            .collect()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.inner.lock().requests.last().cloned()
    }
}

impl HttpClient for MockHttpClient {
    fn execute(
        &self,
        req: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, PortError>> + Send + '_>> {
        let inner = self.inner.clone();
        Box::pin(async move {
            let mut state = inner.lock();
            state.requests.push(req);
            state.replies.pop_front().unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 200,
                    body: b"{}".to_vec(),
                })
            })
        })
    }
}

/// Fixed-value environment probe. The hidden flag is shared so tests can
/// background the "tab" mid-run.
pub struct StaticEnvironment {
    hostname: String,
    user_agent: String,
    hidden: Arc<AtomicBool>,
    values: HashMap<String, Value>,
}

impl StaticEnvironment {
    /// Probe for `hostname` with a browser-like user agent, foreground tab,
    /// and no page values.
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_owned(),
            user_agent: "Mozilla/5.0".to_owned(),
            hidden: Arc::new(AtomicBool::new(false)),
            values: HashMap::new(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_owned();
        self
    }

    pub fn with_value(mut self, key: &str, value: Value) -> Self {
        self.values.insert(key.to_owned(), value);
        self
    }

    /// Shared flag controlling `tab_hidden`.
    pub fn hidden_flag(&self) -> Arc<AtomicBool> {
        self.hidden.clone()
    }
}

impl VisitEnvironment for StaticEnvironment {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn tab_hidden(&self) -> bool {
        self.hidden.load(Ordering::Relaxed)
    }

    fn page_value(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}
