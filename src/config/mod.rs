//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! flag-watch.toml (optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → WatchConfig (validated, immutable)
//!
//! .env file
//!     → env.rs (dotenv hydration)
//!     → SdkKey (non-empty, redacted)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow running without a config file
//! - The SDK key never lives in the TOML file, only in the environment

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::{load_sdk_key, SdkKey};
pub use loader::{load_config, ConfigError};
pub use schema::{ContextConfig, FlagConfig, ObservabilityConfig, SdkConfig, WatchConfig};
