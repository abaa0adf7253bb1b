//! Handler failure taxonomy and response mapping.
//!
//! # Responsibilities
//! - Classify handler failures (interrupted, I/O, upstream, unclassified)
//! - Map each class to its HTTP 500 body, most-specific-first
//! - Log every failure at the point it leaves the handler
//!
//! Failures are local to one request task. Nothing here is retried and
//! nothing can take down the process; a broken pipe on one response leaves
//! every other in-flight request untouched.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::delay::Interrupted;

/// Anything that can go wrong inside an endpoint handler.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The delay was cancelled before completion (shutdown).
    #[error("{0}")]
    Interrupted(#[from] Interrupted),

    /// Writing the response failed, typically a broken pipe.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The self-proxy upstream request failed before streaming began.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    /// Catch-all for anything unclassified.
    #[error("{0}")]
    Other(String),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        // Most-specific-first: interruption and transport failures share the
        // interrupted-style message, everything else gets the generic one.
        let body = match &self {
            HandlerError::Interrupted(e) => {
                tracing::error!(error = %e, "delay interrupted in handler");
                format!("interrupted!!! message: {}", e)
            }
            HandlerError::Io(e) => {
                tracing::error!(error = %e, "I/O failure in handler");
                format!("interrupted!!! message: {}", e)
            }
            HandlerError::Upstream(e) => {
                tracing::error!(error = %e, "upstream failure in handler");
                format!("interrupted!!! message: {}", e)
            }
            HandlerError::Other(detail) => {
                tracing::error!(error = %detail, "unclassified failure in handler");
                format!("occured !!! message: {}", detail)
            }
        };
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
