//! Command-line driver for the load harness.

use clap::Parser;
use timeout_lab::config::HarnessConfig;
use timeout_lab::harness::LoadHarness;

#[derive(Parser)]
#[command(name = "harness-cli")]
#[command(about = "Concurrent read-timeout harness for the delay server", long_about = None)]
struct Cli {
    /// Base URL of the delay server.
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Endpoint path to drive.
    #[arg(short, long, default_value = "/sleep1")]
    path: String,

    /// Delay in seconds requested from the server.
    #[arg(short, long, default_value_t = 3)]
    second: u64,

    /// Number of concurrent requests.
    #[arg(short, long, default_value_t = 10)]
    requests: u32,

    /// Client read timeout in seconds.
    #[arg(short = 't', long, default_value_t = 2)]
    read_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timeout_lab=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = HarnessConfig {
        requests: cli.requests,
        read_timeout_secs: cli.read_timeout,
        ..HarnessConfig::default()
    };

    let target = format!("{}{}?second={}", cli.url, cli.path, cli.second);
    let harness = LoadHarness::new(config);
    let report = harness.run(&target).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    println!("ok result count : {}", report.succeeded.len());
    println!("no response result count : {}", report.failed.len());
    Ok(())
}
