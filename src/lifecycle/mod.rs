//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Ctrl+C or test trigger → broadcast fires
//!         → accept loop stops, in-flight connections drain
//!         → every suspended handler resolves with Interrupted
//! ```
//!
//! # Design Decisions
//! - One broadcast serves both purposes: stopping the server and
//!   interrupting in-flight delays
//! - Interrupted handlers answer 500 before their connection drains, so
//!   graceful shutdown terminates promptly even mid-delay

pub mod shutdown;

pub use shutdown::Shutdown;
