//! Feature flag client subsystem.
//!
//! # Data Flow
//! ```text
//! SdkKey + EvaluationContext + init timeout
//!     → FlagConnector::connect (context checked, vendor SDK starts, waits for data)
//!     → FlagClient bound to that context (shared by poller and shutdown)
//!     → bool_variation(flag, default) per poll
//!     → close() once on shutdown
//! ```

pub mod client;
pub mod launchdarkly;
pub mod types;

pub use client::{Connected, FlagClient, FlagConnector};
pub use launchdarkly::{LaunchDarklyClient, LaunchDarklyConnector};
pub use types::{EvaluationContext, EvaluationError, FlagClientError};
