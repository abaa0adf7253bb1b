//! Delay server entrypoint.

use timeout_lab::config::{load_config, LabConfig};
use timeout_lab::http::HttpServer;
use timeout_lab::lifecycle::Shutdown;
use timeout_lab::net::BoundedListener;
use timeout_lab::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional config file path as the first argument; defaults otherwise.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(std::path::Path::new(&path))?,
        None => LabConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!("timeout-lab v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        default_seconds = config.delays.default_seconds,
        default_loop = config.delays.default_loop,
        harness_requests = config.harness.requests,
        harness_read_timeout_secs = config.harness.read_timeout_secs,
        "configuration loaded"
    );

    let listener = BoundedListener::bind(&config.listener).await?;

    // Ctrl+C triggers the shutdown broadcast, which both stops the accept
    // loop and interrupts every in-flight delay.
    let shutdown = Shutdown::new();
    let ctrl_c_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl+C received, interrupting in-flight delays");
            ctrl_c_shutdown.trigger();
        }
    });

    let server = HttpServer::new(config, shutdown);
    server.run(listener).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
