//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the SDK key from the env file
//! - Build the evaluation context
//! - Start the vendor client for it with a bounded init timeout
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, no retries
//! - The key is checked before the connector is touched, so a missing key
//!   never reaches the network

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::{load_sdk_key, ConfigError, WatchConfig};
use crate::flags::{Connected, EvaluationContext, FlagClient, FlagClientError, FlagConnector};

/// Fatal startup errors.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to create flag client: {0}")]
    Client(#[from] FlagClientError),

    #[error("SDK failed to initialize within {} seconds", .0.as_secs())]
    NotInitialized(Duration),
}

/// A ready client and the context to evaluate with.
pub struct Started<C> {
    pub client: Arc<C>,
    pub context: EvaluationContext,
}

/// Load the key, start the client, and verify it initialized.
pub async fn bootstrap<F: FlagConnector>(
    config: &WatchConfig,
    connector: &F,
) -> Result<Started<F::Client>, StartupError> {
    let sdk_key = load_sdk_key(Path::new(&config.sdk.env_file), &config.sdk.key_env_var)?;

    let context = EvaluationContext::from(&config.context);
    let timeout = config.sdk.init_timeout();
    let Connected { client, initialized } = connector.connect(&sdk_key, &context, timeout).await?;
    if !initialized {
        client.close().await;
        return Err(StartupError::NotInitialized(timeout));
    }

    tracing::info!(
        flag_key = %config.flag.key,
        context_key = %config.context.key,
        "SDK successfully initialized!"
    );

    Ok(Started {
        client: Arc::new(client),
        context,
    })
}
