//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Poller, notifier, lifecycle produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (evaluation and transition counters)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
