//! Generic SA bridge for CVRP.
//!
//! Implements the [`SaProblem`](u_metaheur::sa::SaProblem) trait with the same
//! construction, objective, and relocation move as [`Annealer`](super::Annealer),
//! so an instance can also be run under the generic runner with its
//! alternative cooling schedules and per-temperature iteration counts.

use rand::Rng;
use u_metaheur::sa::SaProblem;

use crate::constructive::first_fit;
use crate::evaluation::total_cost;
use crate::models::{Problem, Solution};
use crate::neighborhood::relocate;

/// SA problem for capacitated vehicle routing.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::annealing::RoutingSaProblem;
/// use cvrp_anneal::models::{Point, Problem};
/// use u_metaheur::sa::{CoolingSchedule, SaConfig, SaRunner};
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(3.0, 0.0)],
///     vec![10, 10, 10],
///     2,
///     20,
/// )
/// .unwrap();
///
/// let sa = RoutingSaProblem::new(problem);
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(1.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.95 })
///     .with_iterations_per_temperature(20)
///     .with_seed(42);
///
/// let result = SaRunner::run(&sa, &config);
/// assert!(result.best.is_partition_of(3));
/// ```
#[derive(Debug, Clone)]
pub struct RoutingSaProblem {
    problem: Problem,
}

impl RoutingSaProblem {
    /// Wraps a problem instance.
    pub fn new(problem: Problem) -> Self {
        Self { problem }
    }

    /// The wrapped problem instance.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }
}

impl SaProblem for RoutingSaProblem {
    type Solution = Solution;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        first_fit(&self.problem, rng)
    }

    fn cost(&self, solution: &Solution) -> f64 {
        total_cost(&self.problem, solution)
    }

    fn neighbor<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Solution {
        relocate(&self.problem, solution, rng)
    }
}
