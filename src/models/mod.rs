//! Domain model types for the capacitated vehicle routing problem.
//!
//! Provides the core abstractions: planar points, the validated problem
//! instance with its fleet, routes as ordered sequences of delivery stops,
//! and solutions holding one route per truck.

mod point;
mod problem;
mod route;
mod solution;

pub use point::Point;
pub use problem::Problem;
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
