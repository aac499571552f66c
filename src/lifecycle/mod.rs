//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load SDK key → Start client → Verify initialized → Build context
//!
//! Run (runner.rs):
//!     Spawn poller + notifier → wait for shutdown → join → close client
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: key first, then client, then tasks
//! - Ordered shutdown: stop tasks, close client, exit from main

pub mod runner;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use runner::{Watch, WatchReport};
pub use shutdown::Shutdown;
pub use startup::{bootstrap, Started, StartupError};
