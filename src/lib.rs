//! Feature flag watcher library.

pub mod config;
pub mod flags;
pub mod lifecycle;
pub mod observability;
pub mod watch;

pub use config::schema::WatchConfig;
pub use lifecycle::{Shutdown, Watch};
