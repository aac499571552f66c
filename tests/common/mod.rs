//! Shared utilities for integration testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use flag_watch::config::SdkKey;
use flag_watch::flags::{
    Connected, EvaluationContext, EvaluationError, FlagClient, FlagClientError, FlagConnector,
};

/// Call counters shared between a connector and the clients it creates.
#[derive(Default)]
pub struct Calls {
    pub connects: AtomicUsize,
    pub evaluations: AtomicUsize,
    pub closes: AtomicUsize,
}

impl Calls {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

/// A client that replays a fixed script of evaluation results.
///
/// Once the script runs out it keeps returning the last scripted value and
/// wakes whoever waits on `exhausted`.
pub struct ScriptedClient {
    script: Mutex<VecDeque<Result<bool, EvaluationError>>>,
    last: Mutex<bool>,
    pub calls: Arc<Calls>,
    pub exhausted: Arc<Notify>,
}

#[allow(dead_code)]
impl ScriptedClient {
    pub fn new(script: Vec<Result<bool, EvaluationError>>, calls: Arc<Calls>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(false),
            calls,
            exhausted: Arc::new(Notify::new()),
        }
    }

    pub fn values(values: &[bool]) -> Self {
        Self::new(values.iter().copied().map(Ok).collect(), Arc::new(Calls::default()))
    }
}

#[allow(dead_code)]
pub fn vendor_error(flag_key: &str) -> EvaluationError {
    EvaluationError::Vendor {
        flag_key: flag_key.to_string(),
        reason: "Exception".into(),
    }
}

#[async_trait]
impl FlagClient for ScriptedClient {
    async fn bool_variation(
        &self,
        _flag_key: &str,
        _default: bool,
    ) -> Result<bool, EvaluationError> {
        self.calls.evaluations.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(result) => {
                if let Ok(value) = result {
                    *self.last.lock().unwrap() = value;
                }
                result
            }
            None => {
                self.exhausted.notify_one();
                Ok(*self.last.lock().unwrap())
            }
        }
    }

    async fn close(&self) {
        self.calls.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// A connector that hands out scripted clients.
#[allow(dead_code)]
pub struct ScriptedConnector {
    pub initialized: bool,
    pub calls: Arc<Calls>,
    pub last_timeout: Mutex<Option<Duration>>,
    pub last_context: Mutex<Option<EvaluationContext>>,
}

#[allow(dead_code)]
impl ScriptedConnector {
    pub fn new(initialized: bool) -> Self {
        Self {
            initialized,
            calls: Arc::new(Calls::default()),
            last_timeout: Mutex::new(None),
            last_context: Mutex::new(None),
        }
    }
}

#[async_trait]
impl FlagConnector for ScriptedConnector {
    type Client = ScriptedClient;

    async fn connect(
        &self,
        _sdk_key: &SdkKey,
        context: &EvaluationContext,
        timeout: Duration,
    ) -> Result<Connected<Self::Client>, FlagClientError> {
        self.calls.connects.fetch_add(1, Ordering::SeqCst);
        *self.last_timeout.lock().unwrap() = Some(timeout);
        *self.last_context.lock().unwrap() = Some(context.clone());
        Ok(Connected {
            client: ScriptedClient::new(vec![Ok(true)], self.calls.clone()),
            initialized: self.initialized,
        })
    }
}

/// Write an env file into the temp dir and return its path.
#[allow(dead_code)]
pub fn write_env_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("flag-watch-it-{}-{}.env", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}
