//! Per-instance tracking options.
//!
//! Resolution never rejects input: missing keys take their defaults,
//! unknown keys are ignored, and a malformed document falls back to the
//! defaults with an advisory log.

use serde::{Deserialize, Serialize};

/// Options bound to one tracker instance. Resolved once at construction
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Collect device/browser details in addition to location and referrer.
    pub detailed: bool,
    /// Skip all network activity for localhost page origins.
    pub ignore_localhost: bool,
    /// Send requests with ambient credentials so the service can recognize
    /// operator self-visits and return the self-visit sentinel.
    pub ignore_own_visits: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            detailed: false,
            ignore_localhost: true,
            ignore_own_visits: true,
        }
    }
}

impl Options {
    /// Resolve options from a partial JSON document.
    pub fn resolve(doc: &serde_json::Value) -> Self {
        match serde_json::from_value(doc.clone()) {
            Ok(options) => options,
            Err(err) => {
                tracing::warn!(error = %err, "malformed options document, using defaults");
                Options::default()
            }
        }
    }

    /// Resolve options from a JSON string, e.g. the `FF_OPTIONS` variable.
    pub fn resolve_str(doc: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(doc) {
            Ok(value) => Self::resolve(&value),
            Err(err) => {
                tracing::warn!(error = %err, "options document is not JSON, using defaults");
                Options::default()
            }
        }
    }
}
