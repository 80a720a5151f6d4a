//! Improvement snapshots and the observer seam.

use serde::Serialize;

use crate::models::Solution;

/// A new best solution recorded by the annealing driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// The best solution found so far.
    pub solution: Solution,
    /// Total distance of `solution`.
    pub cost: f64,
    /// Iteration at which it was recorded; 0 for the initial construction.
    pub iteration: usize,
    /// Temperature at the time of recording.
    pub temperature: f64,
}

/// Receives a [`Snapshot`] each time the search records a new best.
///
/// Implementations run on the search thread and must return promptly.
/// Anything slow belongs behind a [`LatestSnapshot`](super::LatestSnapshot)
/// or [`ChannelPublisher`](super::ChannelPublisher).
///
/// Closures taking `&Snapshot` implement this trait, and `()` is a no-op
/// observer.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::annealing::run_optimization;
/// use cvrp_anneal::models::{Point, Problem};
/// use cvrp_anneal::publish::Snapshot;
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
/// let mut costs = Vec::new();
/// let result = run_optimization(&problem, &mut |s: &Snapshot| costs.push(s.cost));
/// assert_eq!(costs.last().copied(), Some(result.best_cost));
/// ```
pub trait ImprovementObserver {
    /// Called once per strict improvement of the best cost.
    fn on_improvement(&mut self, snapshot: &Snapshot);
}

impl<F> ImprovementObserver for F
where
    F: FnMut(&Snapshot),
{
    fn on_improvement(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

impl ImprovementObserver for () {
    fn on_improvement(&mut self, _snapshot: &Snapshot) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(cost: f64) -> Snapshot {
        Snapshot {
            solution: Solution::from_stops(vec![vec![0]]),
            cost,
            iteration: 3,
            temperature: 50.0,
        }
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |s: &Snapshot| seen.push(s.cost);
            observer.on_improvement(&snapshot(4.0));
            observer.on_improvement(&snapshot(2.0));
        }
        assert_eq!(seen, vec![4.0, 2.0]);
    }

    #[test]
    fn test_unit_observer() {
        ImprovementObserver::on_improvement(&mut (), &snapshot(1.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(snapshot(12.5)).expect("serializable");
        assert_eq!(json["cost"], 12.5);
        assert_eq!(json["iteration"], 3);
        assert_eq!(json["solution"]["routes"][0]["stops"][0], 0);
    }
}
