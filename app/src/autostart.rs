//! Explicit auto-start: configuration probed from the process environment,
//! invoked by the `run` command rather than running as a load-time side
//! effect. An unconfigured environment is an advisory, never an error.

use std::sync::Arc;

use ff_config::Options;
use ff_core::RecordHandle;
use ff_types::ports::env::VisitEnvironment;
use ff_types::ports::http::HttpClient;

pub struct AutostartConfig {
    pub server: String,
    pub domain_id: String,
    pub options: Options,
}

/// Reads `FF_SERVER`, `FF_DOMAIN_ID` and the optional `FF_OPTIONS` JSON
/// document. Returns `None` (with an advisory log) when the agent is not
/// configured.
pub fn detect() -> Option<AutostartConfig> {
    let (server, domain_id) = match (std::env::var("FF_SERVER"), std::env::var("FF_DOMAIN_ID")) {
        (Ok(server), Ok(domain_id)) if !server.is_empty() && !domain_id.is_empty() => {
            (server, domain_id)
        }
        _ => {
            tracing::info!("FF_SERVER/FF_DOMAIN_ID not set, autostart skipped");
            return None;
        }
    };

    let options = match std::env::var("FF_OPTIONS") {
        Ok(doc) => Options::resolve_str(&doc),
        Err(_) => Options::default(),
    };

    Some(AutostartConfig {
        server,
        domain_id,
        options,
    })
}

/// Detects configuration and starts one visit record. Creation failures are
/// logged, not propagated: tracking must never take the host process down.
pub async fn auto_detect_and_start(
    http: Arc<dyn HttpClient>,
    env: Arc<dyn VisitEnvironment>,
) -> Option<RecordHandle> {
    let config = detect()?;
    let tracker = ff_core::create(&config.server, config.options, http, env);
    match tracker.record(&config.domain_id, None).await {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::error!(error = %err, "visit record creation failed");
            None
        }
    }
}
