//! Flag watching subsystem.
//!
//! # Data Flow
//! ```text
//! Poller (every interval):
//!     bool_variation(flag, default)
//!     → error? log + default
//!     → handoff.send(value)          (blocks while the slot is full)
//!
//! Notifier:
//!     handoff.recv()
//!     → TransitionTracker::observe
//!     → changed? log "Feature flag '<key>' is <value>"
//! ```
//!
//! # Design Decisions
//! - One producer, one consumer, no shared variable outside the channel
//! - Each side exits when the other drops its end or on shutdown

pub mod notifier;
pub mod poller;

use tokio::sync::mpsc;

pub use notifier::{Notifier, TransitionTracker};
pub use poller::Poller;

/// Capacity of the poller → notifier handoff.
pub const HANDOFF_CAPACITY: usize = 1;

/// Create the single-slot handoff channel.
pub fn handoff() -> (mpsc::Sender<bool>, mpsc::Receiver<bool>) {
    mpsc::channel(HANDOFF_CAPACITY)
}
