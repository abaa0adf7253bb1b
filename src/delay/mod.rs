//! Cancellable suspension and handler timing.
//!
//! # Responsibilities
//! - Suspend the calling task for a wall-clock duration without busy-waiting
//! - Race the timer against the shutdown broadcast so cancellation is prompt
//! - Measure handling time on every exit path via a drop guard
//!
//! # Design Decisions
//! - `suspend` returns a distinguishable `Interrupted` error; an interrupted
//!   handler must not go on to write a response body
//! - `Stopwatch` logs on `Drop`, so the timing line appears whether the
//!   handler returns normally, is interrupted, or fails on I/O

use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::broadcast;

/// The delay was cancelled before its duration elapsed.
#[derive(Debug, Error)]
#[error("delay cancelled after {waited:?}")]
pub struct Interrupted {
    /// How long the task had been suspended when the cancellation arrived.
    pub waited: Duration,
}

/// Suspend the current task for `duration`, cancellably.
///
/// Resolves to `Ok(())` once the full duration has elapsed, or to
/// `Err(Interrupted)` as soon as the shutdown broadcast fires. Any
/// resolution of the receiver (including a closed channel) counts as an
/// interruption.
pub async fn suspend(
    duration: Duration,
    shutdown: &mut broadcast::Receiver<()>,
) -> Result<(), Interrupted> {
    let started = Instant::now();
    tokio::select! {
        _ = tokio::time::sleep(duration) => Ok(()),
        _ = shutdown.recv() => Err(Interrupted {
            waited: started.elapsed(),
        }),
    }
}

/// Wall-clock timer that logs its elapsed time when dropped.
///
/// Handlers hold one for their whole body; the log line is emitted on every
/// exit path, normal or not.
pub struct Stopwatch {
    task: &'static str,
    started: Instant,
}

impl Stopwatch {
    /// Start timing the named task.
    pub fn start(task: &'static str) -> Self {
        tracing::debug!(task, "timing started");
        Self {
            task,
            started: Instant::now(),
        }
    }

    /// Elapsed time since the watch was started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        tracing::info!(
            task = self.task,
            elapsed_ms = self.started.elapsed().as_millis() as u64,
            "timing stopped"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;

    #[tokio::test]
    async fn suspend_completes_after_duration() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        let started = Instant::now();
        suspend(Duration::from_millis(50), &mut rx).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn suspend_is_interrupted_by_shutdown() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        let handle = tokio::spawn(async move { suspend(Duration::from_secs(30), &mut rx).await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        let started = Instant::now();
        shutdown.trigger();

        let result = handle.await.unwrap();
        assert!(result.is_err(), "suspend should not outlive the trigger");
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn stopwatch_tracks_elapsed_time() {
        let watch = Stopwatch::start("test");
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(watch.elapsed() >= Duration::from_millis(10));
    }
}
