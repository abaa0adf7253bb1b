//! Concurrent request driver and outcome classification.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::config::HarnessConfig;

/// Why a request failed before a response was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No response data within the read timeout.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// Anything else (reset, protocol error, ...).
    Other,
}

/// Terminal state of one dispatched request.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded { id: u32, status: u16, body: String },
    Failed { id: u32, kind: FailureKind, detail: String },
}

/// Result of one harness run, produced only after every request resolved.
#[derive(Debug, Serialize)]
pub struct Report {
    pub run_id: Uuid,
    /// Ids that completed with an HTTP response before timeout.
    pub succeeded: Vec<u32>,
    /// Ids that raised a client-side error before a response.
    pub failed: Vec<u32>,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Total requests accounted for; always equals the dispatched count.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Error type for harness setup.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("invalid target url: {0}")]
    Target(#[from] url::ParseError),
}

/// Drives K concurrent requests against one endpoint and classifies each.
pub struct LoadHarness {
    config: HarnessConfig,
}

impl LoadHarness {
    /// Create a harness with the given settings.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Dispatch all requests concurrently and wait for every terminal state.
    pub async fn run(&self, target: &str) -> Result<Report, HarnessError> {
        let target = Url::parse(target)?;
        let client = reqwest::Client::builder()
            .read_timeout(Duration::from_secs(self.config.read_timeout_secs))
            .connect_timeout(Duration::from_secs(self.config.connect_timeout_secs))
            .pool_max_idle_per_host(self.config.pool_max_idle_per_host)
            .no_proxy()
            .build()?;

        let run_id = Uuid::new_v4();
        let succeeded = Arc::new(Mutex::new(Vec::new()));
        let failed = Arc::new(Mutex::new(Vec::new()));
        let outcomes = Arc::new(Mutex::new(Vec::new()));

        tracing::info!(
            %run_id,
            requests = self.config.requests,
            read_timeout_secs = self.config.read_timeout_secs,
            target = %target,
            "load harness starting"
        );

        let mut tasks = Vec::new();
        for id in 1..=self.config.requests {
            let client = client.clone();
            let target = target.clone();
            let succeeded = Arc::clone(&succeeded);
            let failed = Arc::clone(&failed);
            let outcomes = Arc::clone(&outcomes);
            tasks.push((
                id,
                tokio::spawn(async move {
                    let outcome = dispatch(&client, target, id).await;
                    match &outcome {
                        Outcome::Succeeded { .. } => succeeded.lock().unwrap().push(id),
                        Outcome::Failed { .. } => failed.lock().unwrap().push(id),
                    }
                    outcomes.lock().unwrap().push(outcome);
                }),
            ));
        }

        // Barrier: every request must reach a terminal state before the
        // report exists. A task that dies without recording (it should not)
        // still counts as failed so no id is left pending.
        for (id, task) in tasks {
            if task.await.is_err() {
                let mut failed_guard = failed.lock().unwrap();
                let recorded = failed_guard.contains(&id)
                    || succeeded.lock().unwrap().contains(&id);
                if !recorded {
                    failed_guard.push(id);
                }
            }
        }

        let report = Report {
            run_id,
            succeeded: succeeded.lock().unwrap().clone(),
            failed: failed.lock().unwrap().clone(),
            outcomes: outcomes.lock().unwrap().clone(),
        };

        tracing::info!(
            %run_id,
            ok = report.succeeded.len(),
            no_response = report.failed.len(),
            "load harness finished"
        );

        Ok(report)
    }
}

/// Perform one GET and resolve it to a terminal outcome. Never retries.
async fn dispatch(client: &reqwest::Client, target: Url, id: u32) -> Outcome {
    tracing::info!(id, "dispatching request");
    match client.get(target).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            match response.text().await {
                Ok(body) => {
                    tracing::info!(id, status, "request succeeded");
                    Outcome::Succeeded { id, status, body }
                }
                Err(error) => {
                    tracing::warn!(id, %error, "response body read failed");
                    Outcome::Failed {
                        id,
                        kind: classify(&error),
                        detail: error.to_string(),
                    }
                }
            }
        }
        Err(error) => {
            tracing::warn!(id, %error, "request failed");
            Outcome::Failed {
                id,
                kind: classify(&error),
                detail: error.to_string(),
            }
        }
    }
}

/// Map a client error to its failure kind, most-specific-first.
fn classify(error: &reqwest::Error) -> FailureKind {
    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else {
        FailureKind::Other
    }
}
