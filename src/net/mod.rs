//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (accept loop, connection limit)
//!     → Hand off to HTTP layer (axum::serve)
//! ```
//!
//! # Design Decisions
//! - Bounded accept via semaphore prevents resource exhaustion; the permit
//!   lives inside the connection's I/O object so the slot frees exactly
//!   when the connection closes
//! - The limit must admit at least as many simultaneous connections as the
//!   harness dispatches, since every request may be parked in a delay

pub mod listener;

pub use listener::{BoundedListener, ListenerError};
