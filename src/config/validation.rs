//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (intervals > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WatchConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::WatchConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &WatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.flag.key.trim().is_empty() {
        errors.push(ValidationError::Empty("flag.key"));
    }
    if config.sdk.key_env_var.trim().is_empty() {
        errors.push(ValidationError::Empty("sdk.key_env_var"));
    }
    if config.context.key.trim().is_empty() {
        errors.push(ValidationError::Empty("context.key"));
    }
    if config.flag.poll_interval_ms == 0 {
        errors.push(ValidationError::Zero("flag.poll_interval_ms"));
    }
    if config.sdk.init_timeout_secs == 0 {
        errors.push(ValidationError::Zero("sdk.init_timeout_secs"));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
