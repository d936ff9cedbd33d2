//! Environment-driven tunables. Unparsable or missing values fall back to
//! the documented defaults.

/// Default delay between two heartbeat updates for an active record.
pub const DEFAULT_HEARTBEAT_INTERVAL_MS: u64 = 15_000;

/// Heartbeat interval in milliseconds (`FF_HEARTBEAT_INTERVAL_MS`).
pub fn heartbeat_interval_ms() -> u64 {
    std::env::var("FF_HEARTBEAT_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_HEARTBEAT_INTERVAL_MS)
}

/// Per-request HTTP timeout in seconds (`FF_HTTP_TIMEOUT_SECS`, 0 = none).
/// Enforced by the injected HTTP client, not by the lifecycle engine.
pub fn http_timeout_secs() -> u64 {
    std::env::var("FF_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
}
