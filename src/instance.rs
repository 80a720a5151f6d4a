//! Random instance generation.
//!
//! Produces instances in the shape of the interactive solver this crate
//! grew from: depot at the origin, delivery points drawn uniformly from a
//! 100×100 square, and a uniform truck capacity of 100 unless stated
//! otherwise.

use rand::Rng;

use crate::error::InvalidInput;
use crate::models::{Point, Problem};

/// Side length of the square delivery points are drawn from.
pub const AREA_SIZE: f64 = 100.0;

/// Truck capacity used when the caller has no specific value.
pub const DEFAULT_CAPACITY: u32 = 100;

/// Draws `n` points uniformly from `[0, AREA_SIZE)²`.
pub fn random_points<R: Rng>(rng: &mut R, n: usize) -> Vec<Point> {
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(0.0..AREA_SIZE),
                rng.random_range(0.0..AREA_SIZE),
            )
        })
        .collect()
}

/// Builds a problem with the depot at the origin and one random point per
/// demand.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `truck_count` or `capacity` is zero.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::instance::{random_problem, DEFAULT_CAPACITY};
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let problem = random_problem(&mut rng, vec![10, 20, 30], 2, DEFAULT_CAPACITY).unwrap();
/// assert_eq!(problem.num_points(), 3);
/// assert_eq!(problem.depot().x(), 0.0);
/// ```
pub fn random_problem<R: Rng>(
    rng: &mut R,
    demands: Vec<u32>,
    truck_count: usize,
    capacity: u32,
) -> Result<Problem, InvalidInput> {
    let points = random_points(rng, demands.len());
    Problem::new(Point::origin(), points, demands, truck_count, capacity)
}
