//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use timeout_lab::config::LabConfig;
use timeout_lab::http::HttpServer;
use timeout_lab::lifecycle::Shutdown;
use timeout_lab::net::BoundedListener;

/// Boot a delay server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle that interrupts
/// in-flight delays.
pub async fn start_lab_server(mut config: LabConfig) -> (SocketAddr, Shutdown) {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let listener = BoundedListener::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, shutdown.clone());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    // Give the accept loop a moment to come up
    tokio::time::sleep(Duration::from_millis(100)).await;

    (addr, shutdown)
}

/// Config with delays short enough for tests.
pub fn fast_config() -> LabConfig {
    let mut config = LabConfig::default();
    config.delays.default_seconds = 1;
    config.delays.default_loop = 5;
    config
}
