//! Distance objective and capacity accounting.

use crate::models::{Point, Problem, Solution, Violation, ViolationType};

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::evaluation::distance;
/// use cvrp_anneal::models::Point;
///
/// let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

/// Length of the closed tour depot → `route[0]` → … → `route[last]` → depot.
///
/// An empty route has length zero.
pub fn route_distance(problem: &Problem, route: &[usize]) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return 0.0;
    };

    let inner: f64 = route
        .windows(2)
        .map(|w| problem.point_distance(w[0], w[1]))
        .sum();

    problem.depot_distance(first) + inner + problem.depot_distance(last)
}

/// Total distance over all routes of `solution`. This is the minimized
/// objective; capacity overloads carry no penalty.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::evaluation::total_cost;
/// use cvrp_anneal::models::{Point, Problem, Solution};
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(3.0, 4.0)],
///     vec![1],
///     2,
///     10,
/// )
/// .unwrap();
/// let sol = Solution::from_stops(vec![vec![], vec![0]]);
/// assert!((total_cost(&problem, &sol) - 10.0).abs() < 1e-10);
/// ```
pub fn total_cost(problem: &Problem, solution: &Solution) -> f64 {
    solution
        .routes()
        .iter()
        .map(|r| route_distance(problem, r.stops()))
        .sum()
}

/// Sum of demands carried by `route`.
pub fn route_load(problem: &Problem, route: &[usize]) -> u64 {
    route.iter().map(|&p| u64::from(problem.demand(p))).sum()
}

/// Returns `true` if adding `demand` to a truck already carrying `load`
/// stays within capacity.
pub(crate) fn fits(problem: &Problem, load: u64, demand: u32) -> bool {
    load + u64::from(demand) <= u64::from(problem.capacity())
}

/// Reports every route whose load exceeds the truck capacity.
pub fn capacity_violations(problem: &Problem, solution: &Solution) -> Vec<Violation> {
    solution
        .routes()
        .iter()
        .enumerate()
        .filter_map(|(route_index, route)| {
            let load = route_load(problem, route.stops());
            (load > u64::from(problem.capacity())).then(|| {
                Violation::new(ViolationType::CapacityExceeded {
                    route_index,
                    load,
                    capacity: problem.capacity(),
                })
            })
        })
        .collect()
}

/// Distance of a route computed leg by leg from raw coordinates, bypassing
/// the matrix. Used to cross-check the cached distances.
#[cfg(test)]
fn route_distance_from_coordinates(problem: &Problem, route: &[usize]) -> f64 {
    if route.is_empty() {
        return 0.0;
    }
    let mut stops: Vec<Point> = Vec::with_capacity(route.len() + 2);
    stops.push(problem.depot());
    stops.extend(route.iter().map(|&i| problem.points()[i]));
    stops.push(problem.depot());
    stops.windows(2).map(|w| distance(w[0], w[1])).sum()
}
