//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, request counts > 0)
//! - Check the bind address parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: LabConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use crate::config::schema::LabConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    ZeroMaxConnections,
    ZeroHarnessRequests,
    ZeroReadTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address '{}' is not a socket address", addr)
            }
            ValidationError::ZeroMaxConnections => {
                write!(f, "listener.max_connections must be greater than zero")
            }
            ValidationError::ZeroHarnessRequests => {
                write!(f, "harness.requests must be greater than zero")
            }
            ValidationError::ZeroReadTimeout => {
                write!(f, "harness.read_timeout_secs must be greater than zero")
            }
        }
    }
}

/// Validate a parsed configuration, collecting every failure.
pub fn validate_config(config: &LabConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.max_connections == 0 {
        errors.push(ValidationError::ZeroMaxConnections);
    }
    if config.harness.requests == 0 {
        errors.push(ValidationError::ZeroHarnessRequests);
    }
    if config.harness.read_timeout_secs == 0 {
        errors.push(ValidationError::ZeroReadTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
