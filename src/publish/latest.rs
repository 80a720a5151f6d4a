//! Shared "latest value" slot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::{ImprovementObserver, Snapshot};

/// A cloneable handle to the most recent best-solution snapshot.
///
/// The search thread overwrites the slot on every improvement; any number of
/// readers on other threads can poll [`latest`](Self::latest) and compare
/// [`version`](Self::version) to detect changes. Intermediate snapshots may be
/// skipped by slow readers, but the final best always remains readable.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use cvrp_anneal::annealing::run_optimization;
/// use cvrp_anneal::models::{Point, Problem};
/// use cvrp_anneal::publish::LatestSnapshot;
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(10.0, 0.0), Point::new(0.0, 10.0), Point::new(5.0, 5.0)],
///     vec![5, 5, 5],
///     2,
///     10,
/// )
/// .unwrap();
///
/// let slot = LatestSnapshot::new();
/// let mut writer = slot.clone();
/// let worker = thread::spawn(move || run_optimization(&problem, &mut writer));
/// let result = worker.join().unwrap();
///
/// let last = slot.latest().unwrap();
/// assert_eq!(last.cost, result.best_cost);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LatestSnapshot {
    inner: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    slot: Mutex<Option<Snapshot>>,
    version: AtomicU64,
}

impl LatestSnapshot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored snapshot.
    pub fn store(&self, snapshot: Snapshot) {
        *self.inner.slot.lock() = Some(snapshot);
        self.inner.version.fetch_add(1, Ordering::Release);
    }

    /// Returns a copy of the most recent snapshot, if any was published.
    pub fn latest(&self) -> Option<Snapshot> {
        self.inner.slot.lock().clone()
    }

    /// Cost of the most recent snapshot, without cloning the solution.
    pub fn latest_cost(&self) -> Option<f64> {
        self.inner.slot.lock().as_ref().map(|s| s.cost)
    }

    /// Number of snapshots stored so far.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }
}

impl ImprovementObserver for LatestSnapshot {
    fn on_improvement(&mut self, snapshot: &Snapshot) {
        self.store(snapshot.clone());
    }
}
