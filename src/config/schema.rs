//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the lab.
//! All types derive Serde traits for deserialization from config files.
//! Everything here is environmental (bind address, connection limits,
//! default delays, client timeouts), not core logic.

use serde::{Deserialize, Serialize};

/// Root configuration for the delay server and load harness.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LabConfig {
    /// Listener configuration (bind address, connection limit).
    pub listener: ListenerConfig,

    /// Defaults applied when a request omits `second` or `loop`.
    pub delays: DelayDefaults,

    /// Outbound client settings for the self-proxy endpoint.
    pub upstream: UpstreamConfig,

    /// Load harness settings.
    pub harness: HarnessConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum concurrent connections. Must be at least as large as the
    /// harness request count, or the harness itself becomes the bottleneck.
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_connections: 10_000,
        }
    }
}

/// Defaults for the delay endpoints' query parameters.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct DelayDefaults {
    /// Seconds to suspend when a request omits `second`.
    pub default_seconds: u64,

    /// Repetition count when a request omits `loop`.
    pub default_loop: u32,
}

impl Default for DelayDefaults {
    fn default() -> Self {
        Self {
            default_seconds: 5,
            default_loop: 1000,
        }
    }
}

/// Outbound HTTP client configuration for the self-proxy path.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
        }
    }
}

/// Load harness configuration.
///
/// The read timeout is the client-side limit under test; the server never
/// enforces one of its own.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Number of concurrent requests per run.
    pub requests: u32,

    /// Per-request read timeout in seconds.
    pub read_timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Idle connections kept per host in the client pool.
    pub pool_max_idle_per_host: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            requests: 10,
            read_timeout_secs: 2,
            connect_timeout_secs: 5,
            pool_max_idle_per_host: 100,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
