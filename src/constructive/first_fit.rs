//! Randomized first-fit constructive heuristic.
//!
//! Visits delivery points in a random order and packs each one into the
//! first truck, in fleet order, that still has room for it. Points that fit
//! nowhere are dropped onto a uniformly random truck, overloading it.
//!
//! # Complexity
//!
//! O(n × k) where n = delivery points, k = trucks.
//!
//! The random visiting order is what diversifies starting points between
//! runs; with a fixed seed the construction is reproducible.

use rand::Rng;
use tracing::debug;

use crate::evaluation::fits;
use crate::models::{Problem, Solution};

/// Builds an initial solution by randomized first-fit bin packing.
///
/// Every delivery point ends up in exactly one route. Routes of trucks that
/// never received a point stay empty. If every demand fits and the fleet has
/// enough room at every step, no route exceeds capacity; otherwise the
/// fallback may overload a truck.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::constructive::first_fit;
/// use cvrp_anneal::models::{Point, Problem};
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(3.0, 0.0)],
///     vec![10, 10, 10],
///     2,
///     20,
/// )
/// .unwrap();
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let solution = first_fit(&problem, &mut rng);
/// assert_eq!(solution.num_routes(), 2);
/// assert!(solution.is_partition_of(3));
/// ```
pub fn first_fit<R: Rng>(problem: &Problem, rng: &mut R) -> Solution {
    let truck_count = problem.truck_count();
    let mut solution = Solution::empty(truck_count);
    let mut loads = vec![0u64; truck_count];

    let mut order: Vec<usize> = (0..problem.num_points()).collect();
    u_numflow::random::shuffle(&mut order, rng);

    for point in order {
        let demand = problem.demand(point);
        let truck = match loads.iter().position(|&load| fits(problem, load, demand)) {
            Some(truck) => truck,
            None => {
                let truck = rng.random_range(0..truck_count);
                debug!(
                    point,
                    demand,
                    truck,
                    load = loads[truck],
                    capacity = problem.capacity(),
                    "no truck has room, overloading a random truck"
                );
                truck
            }
        };
        solution.route_mut(truck).push(point);
        loads[truck] += u64::from(demand);
    }

    solution
}
