//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, self-proxy client)
//!     → handlers.rs (/sleep1 /sleep2 /sleep3 /proxy-sleep /sleep-proxied)
//!     → delay::suspend (cancellable sleep)
//!     → stream.rs (multi-write response bodies)
//!     → error.rs (failure → 500 mapping)
//! ```

pub mod error;
pub mod handlers;
pub mod server;
pub mod stream;

pub use error::HandlerError;
pub use server::{AppState, HttpServer};
