//! Dense distance matrix.

use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built from the depot followed by the delivery points, so location 0 is
/// the depot and location `i + 1` is delivery point `i`.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::models::Point;
/// use cvrp_anneal::distance::DistanceMatrix;
///
/// let depot = Point::new(0.0, 0.0);
/// let points = vec![Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
/// let dm = DistanceMatrix::from_depot_and_points(&depot, &points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Location index of the depot.
    pub const DEPOT: usize = 0;

    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix over arbitrary locations.
    pub fn from_locations(locations: &[Point]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes the matrix for a depot and its delivery points.
    pub fn from_depot_and_points(depot: &Point, points: &[Point]) -> Self {
        let mut locations = Vec::with_capacity(points.len() + 1);
        locations.push(*depot);
        locations.extend_from_slice(points);
        Self::from_locations(&locations)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
