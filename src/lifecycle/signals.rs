//! OS signal handling.
//!
//! # Responsibilities
//! - Register handlers for SIGINT (Ctrl+C) and SIGTERM
//! - Report which one arrived first
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Only the first signal matters; the caller shuts down after it

use std::fmt;

/// The signal that ended the watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationSignal::Interrupt => f.write_str("SIGINT"),
            TerminationSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Wait for SIGINT or SIGTERM.
#[cfg(unix)]
pub async fn wait_for_termination() -> std::io::Result<TerminationSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res.map(|_| TerminationSignal::Interrupt),
        _ = terminate.recv() => Ok(TerminationSignal::Terminate),
    }
}

/// Wait for Ctrl+C.
#[cfg(not(unix))]
pub async fn wait_for_termination() -> std::io::Result<TerminationSignal> {
    tokio::signal::ctrl_c().await?;
    Ok(TerminationSignal::Interrupt)
}

/// Wait for a termination signal and log the acknowledgment.
///
/// If the handlers cannot be installed the error is logged and returned,
/// which shuts the watcher down rather than leaving it unstoppable.
pub async fn termination() -> std::io::Result<()> {
    match wait_for_termination().await {
        Ok(signal) => {
            tracing::info!(%signal, "Termination signal received, shutting down");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install signal handlers, shutting down");
            Err(e)
        }
    }
}
