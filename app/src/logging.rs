//! Logging pipeline: env-driven level and format (json or compact).

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the tracing subscriber from `FF_LOG_LEVEL` (default `info`)
/// and `FF_LOG_FORMAT` (`json` or `compact`, default `compact`).
pub fn init_logging() -> Result<()> {
    let level = std::env::var("FF_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env_filter = EnvFilter::new(&level);

    match std::env::var("FF_LOG_FORMAT").as_deref().unwrap_or("compact") {
        "json" => {
            let fmt_layer = fmt::layer().json().with_target(true).with_filter(env_filter);
            tracing_subscriber::registry().with(fmt_layer).init();
        }
        _ => {
            let fmt_layer = fmt::layer().compact().with_target(true).with_filter(env_filter);
            tracing_subscriber::registry().with(fmt_layer).init();
        }
    }

    tracing::debug!(level = %level, "logging initialized");
    Ok(())
}
