//! Bounded, non-blocking snapshot queue.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{ImprovementObserver, Snapshot};

/// Publishes snapshots into a bounded `crossbeam-channel` queue without ever
/// blocking the search.
///
/// When the queue is full the oldest queued snapshot is evicted to make room,
/// so a lagging consumer always ends up with the newest one. The publisher
/// holds its own eviction handle, so dropping the consumer's receiver does
/// not stop publishing; the queue keeps rotating.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::annealing::run_optimization;
/// use cvrp_anneal::models::{Point, Problem};
/// use cvrp_anneal::publish::ChannelPublisher;
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(10.0, 0.0), Point::new(0.0, 10.0)],
///     vec![5, 5],
///     1,
///     100,
/// )
/// .unwrap();
///
/// let (mut publisher, rx) = ChannelPublisher::bounded(4);
/// let result = run_optimization(&problem, &mut publisher);
///
/// let last = rx.try_iter().last().unwrap();
/// assert_eq!(last.cost, result.best_cost);
/// ```
#[derive(Debug, Clone)]
pub struct ChannelPublisher {
    tx: Sender<Snapshot>,
    evict: Receiver<Snapshot>,
    dropped: Arc<AtomicUsize>,
}

impl ChannelPublisher {
    /// Creates a publisher with room for `capacity` pending snapshots
    /// (at least one) and the receiving end for the consumer.
    pub fn bounded(capacity: usize) -> (Self, Receiver<Snapshot>) {
        let (tx, rx) = bounded(capacity.max(1));
        let publisher = Self {
            tx,
            evict: rx.clone(),
            dropped: Arc::new(AtomicUsize::new(0)),
        };
        (publisher, rx)
    }

    /// Number of stale snapshots evicted because the consumer lagged,
    /// counted across all clones of this publisher.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Queues a snapshot, evicting the oldest pending one if the queue is full.
    pub fn publish(&mut self, snapshot: Snapshot) {
        let mut pending = snapshot;
        loop {
            match self.tx.try_send(pending) {
                Ok(()) => return,
                Err(TrySendError::Full(back)) => {
                    if self.evict.try_recv().is_ok() {
                        self.dropped.fetch_add(1, Ordering::Relaxed);
                    }
                    pending = back;
                }
                Err(TrySendError::Disconnected(_)) => return,
            }
        }
    }
}

impl ImprovementObserver for ChannelPublisher {
    fn on_improvement(&mut self, snapshot: &Snapshot) {
        self.publish(snapshot.clone());
    }
}
