//! Validated CVRP instance.

use crate::distance::DistanceMatrix;
use crate::error::InvalidInput;

use super::Point;

/// An immutable capacitated vehicle routing instance.
///
/// Holds the depot, the delivery points with their parallel demands, and a
/// homogeneous fleet of `truck_count` trucks of equal `capacity`. Pairwise
/// distances are computed once at construction; index 0 of the matrix is the
/// depot and index `i + 1` is delivery point `i`.
///
/// A demand larger than `capacity` is accepted: such a point can only ever be
/// carried by an overloaded truck.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::models::{Point, Problem};
///
/// let problem = Problem::new(
///     Point::new(0.0, 0.0),
///     vec![Point::new(10.0, 0.0), Point::new(0.0, 10.0)],
///     vec![5, 5],
///     1,
///     100,
/// )
/// .unwrap();
/// assert_eq!(problem.num_points(), 2);
/// assert!((problem.depot_distance(0) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    depot: Point,
    points: Vec<Point>,
    demands: Vec<u32>,
    truck_count: usize,
    capacity: u32,
    distances: DistanceMatrix,
}

impl Problem {
    /// Creates a problem instance.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if `points` and `demands` differ in length,
    /// if `truck_count` or `capacity` is zero, or if any coordinate is not
    /// finite.
    ///
    /// Demands and capacity are integers. Callers with fractional loads
    /// should scale them to a common integer unit first, such as tenths.
    pub fn new(
        depot: Point,
        points: Vec<Point>,
        demands: Vec<u32>,
        truck_count: usize,
        capacity: u32,
    ) -> Result<Self, InvalidInput> {
        if points.len() != demands.len() {
            return Err(InvalidInput::LengthMismatch {
                points: points.len(),
                demands: demands.len(),
            });
        }
        if truck_count == 0 {
            return Err(InvalidInput::NoTrucks);
        }
        if capacity == 0 {
            return Err(InvalidInput::ZeroCapacity);
        }
        if !depot.is_finite() {
            return Err(InvalidInput::NonFiniteCoordinate { index: None });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(InvalidInput::NonFiniteCoordinate { index: Some(index) });
        }

        let distances = DistanceMatrix::from_depot_and_points(&depot, &points);
        debug_assert!(distances.is_symmetric(0.0));

        Ok(Self {
            depot,
            points,
            demands,
            truck_count,
            capacity,
            distances,
        })
    }

    /// Depot location.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Delivery points, indexed `0..num_points()`.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Demands, parallel to [`points`](Self::points).
    pub fn demands(&self) -> &[u32] {
        &self.demands
    }

    /// Demand of delivery point `point`.
    pub fn demand(&self, point: usize) -> u32 {
        self.demands[point]
    }

    /// Number of delivery points (N).
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of trucks.
    pub fn truck_count(&self) -> usize {
        self.truck_count
    }

    /// Capacity shared by every truck.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Precomputed distance matrix over depot and delivery points.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Distance between the depot and delivery point `point`.
    pub fn depot_distance(&self, point: usize) -> f64 {
        self.distances.get(DistanceMatrix::DEPOT, point + 1)
    }

    /// Distance between delivery points `from` and `to`.
    pub fn point_distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from + 1, to + 1)
    }

    /// Returns `true` if every single demand fits into an empty truck.
    pub fn all_demands_fit(&self) -> bool {
        self.demands.iter().all(|&d| d <= self.capacity)
    }
}
