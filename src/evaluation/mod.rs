//! Cost evaluation and capacity checking.
//!
//! The objective is plain Euclidean distance summed over all truck routes.
//! Capacity is accounted separately and never enters the cost.

mod cost;

pub(crate) use cost::fits;
pub use cost::{capacity_violations, distance, route_distance, route_load, total_cost};
