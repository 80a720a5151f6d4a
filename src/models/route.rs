//! Truck routes.

use serde::{Deserialize, Serialize};

/// The ordered delivery stops of a single truck.
///
/// Stops are indices into [`Problem::points`](crate::models::Problem::points).
/// The depot is implicit at both ends and never stored.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::models::Route;
///
/// let mut route = Route::new(0);
/// route.push(3);
/// route.push(1);
/// assert_eq!(route.stops(), &[3, 1]);
/// assert_eq!(route.truck(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    truck: usize,
    stops: Vec<usize>,
}

impl Route {
    /// Creates an empty route for the given truck.
    pub fn new(truck: usize) -> Self {
        Self {
            truck,
            stops: Vec::new(),
        }
    }

    /// Creates a route with the given visiting order.
    pub fn with_stops(truck: usize, stops: Vec<usize>) -> Self {
        Self { truck, stops }
    }

    /// Index of the truck driving this route.
    pub fn truck(&self) -> usize {
        self.truck
    }

    /// Delivery point indices in visiting order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Appends a stop to the end of the route.
    pub fn push(&mut self, point: usize) {
        self.stops.push(point);
    }

    /// Removes and returns the stop at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn remove(&mut self, position: usize) -> usize {
        self.stops.remove(position)
    }

    /// Number of stops (excluding the depot).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the truck is unused.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
