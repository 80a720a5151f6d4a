//! Random single-point relocation between truck routes.
//!
//! # Algorithm
//!
//! Draws a source truck and a destination truck uniformly and independently
//! (they may coincide), removes a uniformly chosen stop from the source, and
//! appends it to the destination if the destination still has room for it.
//! Otherwise the stop goes back to the end of the source route.
//!
//! When source and destination coincide, the move takes a stop out and puts
//! it back at the end of the same route. The stop set is unchanged, but the
//! visiting order may differ. This is the only operator that reorders stops
//! within a route.

use rand::Rng;

use crate::evaluation::{fits, route_load};
use crate::models::{Problem, Solution};

/// What a relocation attempt did to the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The stop was appended to the destination route.
    Moved {
        /// Source truck.
        from: usize,
        /// Destination truck.
        to: usize,
        /// Relocated delivery point.
        point: usize,
    },
    /// The destination had no room; the stop went back to the end of the
    /// source route.
    Reverted {
        /// Source truck.
        from: usize,
        /// Rejected destination truck.
        to: usize,
        /// Delivery point that was put back.
        point: usize,
    },
    /// The source route was empty; nothing changed.
    Skipped {
        /// The empty source truck.
        from: usize,
    },
}

/// Applies one random relocation to `solution` in place.
///
/// Random draws happen in a fixed order: source truck, destination truck,
/// then (only for a non-empty source) the stop position.
pub fn relocate_in_place<R: Rng>(
    problem: &Problem,
    solution: &mut Solution,
    rng: &mut R,
) -> MoveOutcome {
    let trucks = solution.num_routes();
    let from = rng.random_range(0..trucks);
    let to = rng.random_range(0..trucks);

    if solution.route(from).is_empty() {
        return MoveOutcome::Skipped { from };
    }

    let position = rng.random_range(0..solution.route(from).len());
    let point = solution.route_mut(from).remove(position);

    // Measured after removal. A same-truck move lands at the end of `from`
    // either way.
    let to_load = route_load(problem, solution.route(to).stops());
    if fits(problem, to_load, problem.demand(point)) {
        solution.route_mut(to).push(point);
        MoveOutcome::Moved { from, to, point }
    } else {
        solution.route_mut(from).push(point);
        MoveOutcome::Reverted { from, to, point }
    }
}

/// Returns a neighbor of `solution` produced by one random relocation.
///
/// The input is never modified; the neighbor is a deep copy.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::models::{Point, Problem, Solution};
/// use cvrp_anneal::neighborhood::relocate;
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
///     vec![1, 1],
///     2,
///     10,
/// )
/// .unwrap();
/// let current = Solution::from_stops(vec![vec![0, 1], vec![]]);
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let candidate = relocate(&problem, &current, &mut rng);
/// assert!(candidate.is_partition_of(2));
/// assert_eq!(current.route(0).stops(), &[0, 1]);
/// ```
pub fn relocate<R: Rng>(problem: &Problem, solution: &Solution, rng: &mut R) -> Solution {
    let mut candidate = solution.clone();
    relocate_in_place(problem, &mut candidate, rng);
    candidate
}
