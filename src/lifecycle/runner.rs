//! Structured run of the poller and notifier.
//!
//! # Sequence
//! ```text
//! spawn poller, notifier, signal handler
//! signal handler: termination future resolves → Shutdown::trigger
//! main flow:      shutdown observed → join poller, notifier → client.close()
//! ```
//!
//! The process exits from the main flow only, after close has returned.

use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::FlagConfig;
use crate::flags::FlagClient;
use crate::lifecycle::shutdown::Shutdown;
use crate::watch::{self, Notifier, Poller};

/// Summary of a finished watch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchReport {
    /// Transitions logged by the notifier.
    pub transitions: u64,

    /// Set when the watch ended because waiting for termination failed
    /// rather than because a signal arrived.
    pub termination_error: Option<String>,
}

impl WatchReport {
    /// True when the watch ended on a termination signal.
    pub fn is_clean(&self) -> bool {
        self.termination_error.is_none()
    }
}

/// Owns the client and the tasks watching one flag.
pub struct Watch<C> {
    client: Arc<C>,
    flag: FlagConfig,
    observer: Option<mpsc::UnboundedSender<bool>>,
}

impl<C: FlagClient> Watch<C> {
    pub fn new(client: Arc<C>, flag: FlagConfig) -> Self {
        Self {
            client,
            flag,
            observer: None,
        }
    }

    /// Forward every logged transition to `observer`.
    pub fn with_observer(mut self, observer: mpsc::UnboundedSender<bool>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Watch the flag until `termination` resolves, then shut down in order.
    ///
    /// An `Err` from `termination` still shuts down cleanly and closes the
    /// client, but is carried in the report.
    pub async fn run_until<S>(self, termination: S) -> WatchReport
    where
        S: Future<Output = io::Result<()>> + Send + 'static,
    {
        let shutdown = Arc::new(Shutdown::new());
        let mut done = shutdown.subscribe();
        let (tx, rx) = watch::handoff();

        let poller = Poller::new(self.client.clone(), &self.flag);
        let poller = tokio::spawn(poller.run(tx, shutdown.subscribe()));

        let mut notifier = Notifier::new(self.flag.key.clone());
        if let Some(observer) = self.observer {
            notifier = notifier.with_observer(observer);
        }
        let notifier = tokio::spawn(notifier.run(rx, shutdown.subscribe()));

        let handler = {
            let shutdown = shutdown.clone();
            tokio::spawn(async move {
                let outcome = termination.await;
                if !shutdown.trigger() {
                    tracing::debug!("Shutdown already in progress");
                }
                outcome
            })
        };

        let _ = done.recv().await;

        if let Err(e) = poller.await {
            tracing::error!(error = %e, "Poller task failed");
        }
        let transitions = match notifier.await {
            Ok(n) => n,
            Err(e) => {
                tracing::error!(error = %e, "Notifier task failed");
                0
            }
        };
        let termination_error = match handler.await {
            Ok(Ok(())) => None,
            Ok(Err(e)) => Some(e.to_string()),
            Err(e) => Some(format!("signal handler task failed: {}", e)),
        };

        self.client.close().await;
        tracing::info!(flag_key = %self.flag.key, "Flag client closed");

        WatchReport {
            transitions,
            termination_error,
        }
    }
}
