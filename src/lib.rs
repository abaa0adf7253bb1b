//! timeout-lab: a harness for observing HTTP read-timeout and broken-pipe
//! behavior.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                 DELAY SERVER                 │
//!                        │                                              │
//!  harness request       │  ┌─────────┐    ┌─────────┐    ┌──────────┐ │
//!  ──────────────────────┼─▶│   net   │───▶│  http   │───▶│  delay   │ │
//!  (K concurrent GETs,   │  │listener │    │ server  │    │ suspend  │ │
//!   read timeout T)      │  └─────────┘    └────┬────┘    └──────────┘ │
//!                        │                      │                      │
//!                        │                      ▼  /proxy-sleep        │
//!                        │               ┌──────────────┐              │
//!                        │               │ http client  │──▶ self      │
//!                        │               │ (self-proxy) │              │
//!                        │               └──────────────┘              │
//!                        │                                              │
//!                        │  ┌────────────────────────────────────────┐ │
//!                        │  │         Cross-Cutting Concerns         │ │
//!                        │  │  ┌────────┐ ┌───────────┐ ┌─────────┐  │ │
//!                        │  │  │ config │ │ lifecycle │ │observa- │  │ │
//!                        │  │  │        │ │ shutdown  │ │ bility  │  │ │
//!                        │  │  └────────┘ └───────────┘ └─────────┘  │ │
//!                        │  └────────────────────────────────────────┘ │
//!                        └──────────────────────────────────────────────┘
//! ```
//!
//! The server intentionally has no per-request timeout: a slow or
//! disconnected client never aborts server-side work, which is exactly the
//! behavior under observation. Timeouts are enforced purely by the
//! client-side load harness.

// Core subsystems
pub mod config;
pub mod delay;
pub mod http;
pub mod net;

// Client-side driver
pub mod harness;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::LabConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
