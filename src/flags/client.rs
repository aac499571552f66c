//! Vendor client abstraction.
//!
//! # Responsibilities
//! - Initialize a vendor client with a bounded timeout, bound to one context
//! - Evaluate a boolean flag for that context, surfacing errors
//! - Close the client, flushing buffered analytics
//!
//! # Design Decisions
//! - The vendor SDK is a black box reached only through these traits
//! - The context is converted once at connect time and reused for every poll
//! - Evaluation returns the error instead of hiding it; the caller picks the fallback

use async_trait::async_trait;
use std::time::Duration;

use crate::config::SdkKey;
use crate::flags::types::{EvaluationContext, EvaluationError, FlagClientError};

/// A started vendor client, bound to the context it evaluates for.
#[async_trait]
pub trait FlagClient: Send + Sync + 'static {
    /// Evaluate `flag_key` as a boolean for the bound context.
    async fn bool_variation(&self, flag_key: &str, default: bool) -> Result<bool, EvaluationError>;

    /// Shut the client down. Called exactly once.
    async fn close(&self);
}

/// Outcome of client initialization.
pub struct Connected<C> {
    pub client: C,
    /// Whether the client received flag data before the timeout.
    pub initialized: bool,
}

/// Builds and starts vendor clients.
#[async_trait]
pub trait FlagConnector: Send + Sync {
    type Client: FlagClient;

    /// Start a client for `context` and wait up to `timeout` for it to
    /// initialize. An unusable context fails here, before any network I/O.
    async fn connect(
        &self,
        sdk_key: &SdkKey,
        context: &EvaluationContext,
        timeout: Duration,
    ) -> Result<Connected<Self::Client>, FlagClientError>;
}
