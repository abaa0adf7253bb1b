//! Client-side load harness.
//!
//! # Data Flow
//! ```text
//! LoadHarness::run(target)
//!     → one task per request id (1..=K), all dispatched at once
//!     → each task: GET target with read timeout → Outcome
//!     → Outcome id appended to succeeded or failed (lock-protected)
//!     → join barrier: nothing is reported until all K are terminal
//!     → Report { run_id, succeeded, failed, outcomes }
//! ```
//!
//! # Design Decisions
//! - Per-request state machine is Pending → {Succeeded | Failed}; no
//!   retries, no intermediate states, irreversible once resolved
//! - Timeouts are enforced purely here; the server under test never
//!   cancels its own work

pub mod driver;

pub use driver::{FailureKind, HarnessError, LoadHarness, Outcome, Report};
