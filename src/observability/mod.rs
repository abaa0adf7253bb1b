//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; the log stream is the lab's primary
//!   instrument (timeouts and broken pipes are observed there)
//! - `RUST_LOG` overrides the configured level when set

pub mod logging;
