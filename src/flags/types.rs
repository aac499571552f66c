//! Evaluation context and error definitions.

use thiserror::Error;

use crate::config::ContextConfig;

/// Identity a flag is evaluated for. Built once and reused for every poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationContext {
    key: String,
    name: String,
}

impl EvaluationContext {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&ContextConfig> for EvaluationContext {
    fn from(config: &ContextConfig) -> Self {
        Self::new(config.key.clone(), config.name.clone())
    }
}

/// Errors raised while building or initializing a vendor client.
#[derive(Debug, Error)]
pub enum FlagClientError {
    /// The context could not be converted into a vendor context.
    #[error("invalid evaluation context: {0}")]
    Context(String),

    /// The SDK rejected its configuration.
    #[error("SDK configuration error: {0}")]
    Config(String),

    /// The SDK could not be started.
    #[error("SDK start error: {0}")]
    Start(String),
}

/// Errors raised by a single flag evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The vendor reported an evaluation error; the default was served.
    #[error("evaluation of '{flag_key}' failed: {reason}")]
    Vendor { flag_key: String, reason: String },
}
