//! Periodic flag evaluation.
//!
//! # Responsibilities
//! - Evaluate the watched flag once per interval
//! - Substitute the default on evaluation errors and keep going
//! - Hand each value to the notifier through the single-slot channel

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::sleep;

use crate::config::FlagConfig;
use crate::flags::FlagClient;
use crate::observability::metrics;

/// Evaluates one flag, for the client's bound context, on a fixed cadence.
pub struct Poller<C> {
    client: Arc<C>,
    flag_key: String,
    default_value: bool,
    interval: Duration,
}

impl<C: FlagClient> Poller<C> {
    pub fn new(client: Arc<C>, flag: &FlagConfig) -> Self {
        Self {
            client,
            flag_key: flag.key.clone(),
            default_value: flag.default_value,
            interval: flag.poll_interval(),
        }
    }

    /// Evaluate the flag once, falling back to the default on error.
    pub async fn poll_once(&self) -> bool {
        match self
            .client
            .bool_variation(&self.flag_key, self.default_value)
            .await
        {
            Ok(value) => {
                metrics::record_evaluation(&self.flag_key, "ok");
                value
            }
            Err(e) => {
                metrics::record_evaluation(&self.flag_key, "error");
                tracing::error!(
                    flag_key = %self.flag_key,
                    default = self.default_value,
                    error = %e,
                    "Flag evaluation failed, using default"
                );
                self.default_value
            }
        }
    }

    /// Run until shutdown or until the notifier goes away.
    pub async fn run(self, tx: mpsc::Sender<bool>, mut shutdown: broadcast::Receiver<()>) {
        tracing::debug!(
            flag_key = %self.flag_key,
            interval_ms = self.interval.as_millis() as u64,
            "Poller starting"
        );

        loop {
            tokio::select! {
                _ = sleep(self.interval) => {}
                _ = shutdown.recv() => break,
            }

            let value = self.poll_once().await;

            tokio::select! {
                sent = tx.send(value) => {
                    if sent.is_err() {
                        tracing::debug!("Notifier closed, poller stopping");
                        return;
                    }
                }
                _ = shutdown.recv() => break,
            }
        }

        tracing::debug!("Poller received shutdown signal, exiting loop");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::EvaluationError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Log sink shared with a scoped fmt subscriber.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Fails every other call, otherwise returns true.
    struct Flaky {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FlagClient for Flaky {
        async fn bool_variation(
            &self,
            flag_key: &str,
            _default: bool,
        ) -> Result<bool, EvaluationError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n % 2 == 1 {
                Err(EvaluationError::Vendor {
                    flag_key: flag_key.to_string(),
                    reason: "Exception".into(),
                })
            } else {
                Ok(true)
            }
        }

        async fn close(&self) {}
    }

    fn poller(client: Arc<Flaky>) -> Poller<Flaky> {
        Poller::new(client, &FlagConfig::default())
    }

    #[tokio::test]
    async fn test_poll_once_substitutes_default_on_error() {
        let client = Arc::new(Flaky { calls: AtomicUsize::new(0) });
        let p = poller(client.clone());

        assert!(p.poll_once().await);
        assert!(!p.poll_once().await);
        assert!(p.poll_once().await);
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_evaluation_error_is_logged() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let p = poller(Arc::new(Flaky { calls: AtomicUsize::new(1) }));
        assert!(!p.poll_once().await);

        let logs = captured.contents();
        assert!(logs.contains("ERROR"), "{}", logs);
        assert!(logs.contains("Flag evaluation failed, using default"), "{}", logs);
        assert!(logs.contains("evaluation of 'my-flag' failed: Exception"), "{}", logs);
    }

    #[tokio::test]
    async fn test_successful_evaluation_logs_no_error() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let p = poller(Arc::new(Flaky { calls: AtomicUsize::new(0) }));
        assert!(p.poll_once().await);

        assert!(!captured.contents().contains("Flag evaluation failed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_paces_and_stops_on_shutdown() {
        let client = Arc::new(Flaky { calls: AtomicUsize::new(0) });
        let (tx, mut rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        let handle = tokio::spawn(poller(client.clone()).run(tx, shutdown_rx));

        let start = tokio::time::Instant::now();
        assert_eq!(rx.recv().await, Some(true));
        assert!(start.elapsed() >= Duration::from_secs(1));
        assert_eq!(rx.recv().await, Some(false));
        assert!(start.elapsed() >= Duration::from_secs(2));

        shutdown_tx.send(()).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_when_receiver_dropped() {
        let client = Arc::new(Flaky { calls: AtomicUsize::new(0) });
        let (tx, rx) = mpsc::channel(1);
        let (_shutdown_tx, shutdown_rx) = broadcast::channel(1);
        drop(rx);

        poller(client.clone()).run(tx, shutdown_rx).await;
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }
}
