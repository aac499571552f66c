//! LaunchDarkly SDK adapter.
//!
//! # Responsibilities
//! - Build and start the LaunchDarkly server-side client
//! - Convert the evaluation context once, at connect time
//! - Map evaluation details with an error reason to `EvaluationError`
//! - Close the client so pending analytics events get delivered

use async_trait::async_trait;
use launchdarkly_server_sdk::{Client, ConfigBuilder, Context, ContextBuilder, Reason};
use std::sync::Arc;
use std::time::Duration;

use crate::config::SdkKey;
use crate::flags::client::{Connected, FlagClient, FlagConnector};
use crate::flags::types::{EvaluationContext, EvaluationError, FlagClientError};

/// Connector producing LaunchDarkly clients.
#[derive(Debug, Default, Clone, Copy)]
pub struct LaunchDarklyConnector;

fn to_ld_context(context: &EvaluationContext) -> Result<Context, FlagClientError> {
    ContextBuilder::new(context.key())
        .name(context.name())
        .build()
        .map_err(FlagClientError::Context)
}

#[async_trait]
impl FlagConnector for LaunchDarklyConnector {
    type Client = LaunchDarklyClient;

    async fn connect(
        &self,
        sdk_key: &SdkKey,
        context: &EvaluationContext,
        timeout: Duration,
    ) -> Result<Connected<Self::Client>, FlagClientError> {
        let context = to_ld_context(context)?;
        let config = ConfigBuilder::new(sdk_key.expose())
            .build()
            .map_err(|e| FlagClientError::Config(format!("{:?}", e)))?;
        let client = Client::build(config).map_err(|e| FlagClientError::Start(format!("{:?}", e)))?;

        client.start_with_default_executor();

        let initialized = matches!(client.wait_for_initialization(timeout).await, Some(true));
        if !initialized {
            tracing::warn!(timeout_secs = timeout.as_secs(), "LaunchDarkly client did not initialize in time");
        }

        Ok(Connected {
            client: LaunchDarklyClient {
                inner: Arc::new(client),
                context,
            },
            initialized,
        })
    }
}

/// A started LaunchDarkly client.
pub struct LaunchDarklyClient {
    inner: Arc<Client>,
    context: Context,
}

#[async_trait]
impl FlagClient for LaunchDarklyClient {
    async fn bool_variation(&self, flag_key: &str, default: bool) -> Result<bool, EvaluationError> {
        let detail = self.inner.bool_variation_detail(&self.context, flag_key, default);
        match detail.reason {
            Reason::Error { error } => Err(EvaluationError::Vendor {
                flag_key: flag_key.to_string(),
                reason: format!("{:?}", error),
            }),
            _ => Ok(detail.value.unwrap_or(default)),
        }
    }

    /// Flushes events synchronously, so it runs off the async workers.
    async fn close(&self) {
        let inner = self.inner.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || inner.close()).await {
            tracing::error!(error = %e, "LaunchDarkly client close panicked");
        }
    }
}

impl std::fmt::Debug for LaunchDarklyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchDarklyClient")
            .field("initialized", &self.inner.initialized())
            .finish()
    }
}
