//! Flag transition logging.
//!
//! # Responsibilities
//! - Receive evaluated values from the poller
//! - Log only when the value differs from the last one seen

use tokio::sync::{broadcast, mpsc};

use crate::observability::metrics;

/// Tracks the last observed value and reports changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionTracker {
    last: Option<bool>,
}

impl TransitionTracker {
    /// Starts with nothing observed, so the first value always counts as a
    /// change whatever it is.
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Returns `Some(value)` when `value` differs from the previous one.
    pub fn observe(&mut self, value: bool) -> Option<bool> {
        if self.last == Some(value) {
            return None;
        }
        self.last = Some(value);
        Some(value)
    }

    pub fn last(&self) -> Option<bool> {
        self.last
    }
}

/// Consumes the handoff channel and logs transitions.
pub struct Notifier {
    flag_key: String,
    tracker: TransitionTracker,
    observer: Option<mpsc::UnboundedSender<bool>>,
}

impl Notifier {
    pub fn new(flag_key: impl Into<String>) -> Self {
        Self {
            flag_key: flag_key.into(),
            tracker: TransitionTracker::new(),
            observer: None,
        }
    }

    /// Also forward every logged transition to `observer`.
    pub fn with_observer(mut self, observer: mpsc::UnboundedSender<bool>) -> Self {
        self.observer = Some(observer);
        self
    }

    fn handle(&mut self, value: bool) -> bool {
        let Some(value) = self.tracker.observe(value) else {
            return false;
        };

        tracing::info!(
            flag_key = %self.flag_key,
            value,
            "Feature flag '{}' is {} for this context",
            self.flag_key,
            value
        );
        metrics::record_transition(&self.flag_key, value);
        if let Some(observer) = &self.observer {
            let _ = observer.send(value);
        }
        true
    }

    /// Run until shutdown or until the poller goes away. Returns the number
    /// of transitions logged.
    ///
    /// A value already sitting in the channel when shutdown arrives is still
    /// handled, so no observed transition is lost.
    pub async fn run(
        mut self,
        mut rx: mpsc::Receiver<bool>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> u64 {
        let mut transitions = 0;

        loop {
            tokio::select! {
                received = rx.recv() => match received {
                    Some(value) => {
                        if self.handle(value) {
                            transitions += 1;
                        }
                    }
                    None => {
                        tracing::debug!("Poller closed, notifier stopping");
                        return transitions;
                    }
                },
                _ = shutdown.recv() => break,
            }
        }

        while let Ok(value) = rx.try_recv() {
            if self.handle(value) {
                transitions += 1;
            }
        }

        tracing::debug!(transitions, "Notifier received shutdown signal, exiting loop");
        transitions
    }
}
