//! Publishing of improvement snapshots to external observers.
//!
//! The annealing driver calls an [`ImprovementObserver`] synchronously on
//! every new best. Observers living on other threads should use one of the
//! non-blocking handoffs:
//!
//! - [`LatestSnapshot`] — a shared slot that always holds the newest snapshot
//! - [`ChannelPublisher`] — a bounded queue that evicts the oldest entry when full

mod channel;
mod latest;
mod observer;

pub use channel::ChannelPublisher;
pub use latest::LatestSnapshot;
pub use observer::{ImprovementObserver, Snapshot};
