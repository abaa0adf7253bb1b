//! Structured logging initialization.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Initialize the global tracing subscriber.
///
/// The configured log level applies to this crate and the HTTP middleware;
/// `RUST_LOG` takes precedence when present.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "timeout_lab={},tower_http={}",
            config.log_level, config.log_level
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
