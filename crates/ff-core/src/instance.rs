//! Instance composition: one server + option set, gated once at creation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ff_config::Options;
use ff_transport::{wire, GraphqlClient, TransportError};
use ff_types::ports::env::VisitEnvironment;
use ff_types::ports::http::HttpClient;
use ff_types::Attributes;

use crate::action::ActionHandle;
use crate::session::{self, RecordHandle};
use crate::{attrs, filter};

/// A configured tracker bound to one server and option set.
///
/// Cloning shares the underlying state: a `record` call on any clone
/// supersedes the running session of every other clone.
#[derive(Clone)]
pub struct Tracker {
    // None = the construction-time gate downgraded this tracker to the
    // no-op form; every operation returns inert handles.
    inner: Option<Arc<Inner>>,
}

struct Inner {
    client: GraphqlClient,
    env: Arc<dyn VisitEnvironment>,
    options: Options,
    generation: Arc<AtomicU64>,
}

impl Inner {
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Builds a tracker for `server`, applying the visitor-filter gate exactly
/// once: localhost origins (when `ignore_localhost`) and bot user agents
/// get a no-op tracker that never performs network activity. The decision
/// is final for the tracker's lifetime.
pub fn create(
    server: &str,
    options: Options,
    http: Arc<dyn HttpClient>,
    env: Arc<dyn VisitEnvironment>,
) -> Tracker {
    if options.ignore_localhost && filter::is_localhost(&env.hostname()) {
        tracing::info!("localhost origin, tracking disabled");
        return Tracker { inner: None };
    }
    if filter::is_bot(&env.user_agent()) {
        tracing::info!("bot user agent, tracking disabled");
        return Tracker { inner: None };
    }

    let client = GraphqlClient::new(http, server, options.ignore_own_visits);
    Tracker {
        inner: Some(Arc::new(Inner {
            client,
            env,
            options,
            generation: Arc::new(AtomicU64::new(0)),
        })),
    }
}

impl Tracker {
    /// Whether the construction-time gate downgraded this tracker.
    pub fn is_noop(&self) -> bool {
        self.inner.is_none()
    }

    /// Registers a visit record under `domain_id` and keeps it alive with
    /// heartbeats until the returned handle is stopped or a newer `record`
    /// call supersedes it.
    ///
    /// With `attrs` omitted the tracker collects the default attribute set
    /// from its environment, honoring the `detailed` option. A creation
    /// failure of any kind means no heartbeat is ever armed for this call.
    pub async fn record(
        &self,
        domain_id: &str,
        attrs: Option<Attributes>,
    ) -> Result<RecordHandle, TransportError> {
        let inner = match &self.inner {
            Some(inner) => inner,
            None => return Ok(RecordHandle::inert()),
        };

        let attrs =
            attrs.unwrap_or_else(|| attrs::attributes(inner.env.as_ref(), inner.options.detailed));

        // Minted before the creation request: a repeat call supersedes the
        // previous session even while its own creation is still in flight.
        let generation = inner.next_generation();

        let response = match inner.client.post(&wire::create_record(domain_id, &attrs)).await {
            Ok(response) => response,
            Err(err) => {
                #[cfg(feature = "metrics")]
                {
                    metrics::counter!("visit_record_total", "result" => "error").increment(1);
                }
                return Err(err);
            }
        };

        let record_id = wire::created_id(&response, "createRecord")
            .ok_or_else(|| TransportError::Parse("missing createRecord payload id".to_owned()))?;

        if filter::is_self_visit(&record_id) {
            tracing::warn!("self visit, record will not be updated");
            #[cfg(feature = "metrics")]
            {
                metrics::counter!("visit_record_total", "result" => "self_visit").increment(1);
            }
            return Ok(RecordHandle::suppressed(record_id));
        }

        let handle = RecordHandle::active(record_id);
        if inner.generation.load(Ordering::Relaxed) == generation {
            session::arm_heartbeat(
                inner.client.clone(),
                inner.env.clone(),
                inner.generation.clone(),
                generation,
                &handle,
            );
        } else {
            tracing::debug!("record superseded before its heartbeat started");
        }

        #[cfg(feature = "metrics")]
        {
            metrics::counter!("visit_record_total", "result" => "created").increment(1);
        }
        Ok(handle)
    }

    /// Re-arms heartbeats for an already-created record id, superseding any
    /// running session. No creation round trip is made.
    pub fn update_record(&self, record_id: &str) -> RecordHandle {
        let inner = match &self.inner {
            Some(inner) => inner,
            None => return RecordHandle::inert(),
        };

        if filter::is_self_visit(record_id) {
            tracing::warn!("self visit, record will not be updated");
            return RecordHandle::suppressed(record_id.to_owned());
        }

        let generation = inner.next_generation();
        let handle = RecordHandle::active(record_id.to_owned());
        session::arm_heartbeat(
            inner.client.clone(),
            inner.env.clone(),
            inner.generation.clone(),
            generation,
            &handle,
        );
        handle
    }

    /// Emits a named action under `event_id`. Actions have no heartbeat;
    /// the handle only carries the server-assigned id.
    pub async fn action(
        &self,
        event_id: &str,
        attrs: Attributes,
    ) -> Result<ActionHandle, TransportError> {
        let inner = match &self.inner {
            Some(inner) => inner,
            None => return Ok(ActionHandle::inert()),
        };

        let response = match inner.client.post(&wire::create_action(event_id, &attrs)).await {
            Ok(response) => response,
            Err(err) => {
                #[cfg(feature = "metrics")]
                {
                    metrics::counter!("visit_action_total", "result" => "error").increment(1);
                }
                return Err(err);
            }
        };

        let action_id = wire::created_id(&response, "createAction")
            .ok_or_else(|| TransportError::Parse("missing createAction payload id".to_owned()))?;

        if filter::is_self_visit(&action_id) {
            tracing::warn!("self visit, action will not be updated");
            return Ok(ActionHandle::inert());
        }

        #[cfg(feature = "metrics")]
        {
            metrics::counter!("visit_action_total", "result" => "created").increment(1);
        }
        Ok(ActionHandle::created(action_id))
    }

    /// Updates an existing action in place. Self-visit ids are warn-logged
    /// no-ops, matching the record path.
    pub async fn update_action(
        &self,
        action_id: &str,
        attrs: Attributes,
    ) -> Result<(), TransportError> {
        let inner = match &self.inner {
            Some(inner) => inner,
            None => return Ok(()),
        };

        if filter::is_self_visit(action_id) {
            tracing::warn!("self visit, action will not be updated");
            return Ok(());
        }

        inner
            .client
            .post(&wire::update_action(action_id, &attrs))
            .await
            .map(|_| ())
    }
}
