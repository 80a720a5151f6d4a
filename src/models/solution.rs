//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::Route;

/// A type of constraint violation in a solution.
///
/// Construction and relocation tolerate overloaded trucks when no feasible
/// truck exists, so overloads are reported rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ViolationType {
    /// Truck capacity exceeded.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Total demand carried by the route.
        load: u64,
        /// Truck capacity.
        capacity: u32,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A candidate assignment: one route per truck, in truck order.
///
/// Cloning deep-copies every route, so a neighbor built from a clone never
/// shares stop lists with its parent.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::models::Solution;
///
/// let mut sol = Solution::empty(2);
/// sol.route_mut(1).push(0);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 1);
/// assert!(sol.is_partition_of(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a solution with `truck_count` empty routes.
    pub fn empty(truck_count: usize) -> Self {
        Self {
            routes: (0..truck_count).map(Route::new).collect(),
        }
    }

    /// Creates a solution from per-truck stop lists, in truck order.
    pub fn from_stops(stops: Vec<Vec<usize>>) -> Self {
        Self {
            routes: stops
                .into_iter()
                .enumerate()
                .map(|(truck, s)| Route::with_stops(truck, s))
                .collect(),
        }
    }

    /// Returns the routes in truck order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the route of truck `truck`.
    ///
    /// # Panics
    ///
    /// Panics if `truck` is out of bounds.
    pub fn route(&self, truck: usize) -> &Route {
        &self.routes[truck]
    }

    /// Returns a mutable reference to the route of truck `truck`.
    ///
    /// # Panics
    ///
    /// Panics if `truck` is out of bounds.
    pub fn route_mut(&mut self, truck: usize) -> &mut Route {
        &mut self.routes[truck]
    }

    /// Number of routes, which equals the truck count.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of routes with at least one stop.
    pub fn num_used_routes(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Total number of stops across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Returns `true` if every index in `0..n` appears in exactly one route,
    /// exactly once, and no other index appears.
    pub fn is_partition_of(&self, n: usize) -> bool {
        let mut seen = vec![false; n];
        for &stop in self.routes.iter().flat_map(|r| r.stops()) {
            match seen.get_mut(stop) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        seen.into_iter().all(|s| s)
    }
}
