//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the watcher.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the flag watcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WatchConfig {
    /// Vendor SDK settings (key source, init timeout).
    pub sdk: SdkConfig,

    /// The flag being watched.
    pub flag: FlagConfig,

    /// Evaluation context the flag is evaluated for.
    pub context: ContextConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Vendor SDK configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Environment variable holding the SDK key.
    pub key_env_var: String,

    /// Env file loaded before the key is read.
    pub env_file: String,

    /// How long to wait for the client to initialize, in seconds.
    pub init_timeout_secs: u64,
}

impl SdkConfig {
    pub fn init_timeout(&self) -> Duration {
        Duration::from_secs(self.init_timeout_secs)
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            key_env_var: "LD_SDKKEY".to_string(),
            env_file: ".env".to_string(),
            init_timeout_secs: 5,
        }
    }
}

/// Watched flag configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FlagConfig {
    /// Flag key to evaluate.
    pub key: String,

    /// Value used when evaluation fails.
    pub default_value: bool,

    /// Delay between evaluations in milliseconds.
    pub poll_interval_ms: u64,
}

impl FlagConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            key: "my-flag".to_string(),
            default_value: false,
            poll_interval_ms: 1000,
        }
    }
}

/// Evaluation context configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Context key (shows up on the vendor dashboard).
    pub key: String,

    /// Display name.
    pub name: String,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            key: "helloworld-context-key".to_string(),
            name: "Cara".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
