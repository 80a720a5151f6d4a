//! # cvrp-anneal
//!
//! Capacitated vehicle routing by simulated annealing. Given a depot,
//! delivery points with demands, and a fleet of equal-capacity trucks, the
//! search assigns points to trucks and orders each route to minimize total
//! Euclidean distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Problem, Route, Solution)
//! - [`distance`] — Distance matrix over depot and delivery points
//! - [`evaluation`] — Route distance, total cost, and capacity checking
//! - [`constructive`] — Randomized first-fit initial solution
//! - [`neighborhood`] — Random single-point relocation move
//! - [`annealing`] — Annealing driver, schedule, and generic SA bridge
//! - [`publish`] — Improvement snapshots and non-blocking handoffs
//! - [`instance`] — Random instance generation
//! - [`error`] — Input and configuration errors
//!
//! ## Capacity policy
//!
//! Capacity is enforced when possible, not guaranteed. A point that fits no
//! truck during construction overloads a random truck, and the objective does
//! not penalize overloads. Use
//! [`evaluation::capacity_violations`] to inspect a result.

pub mod annealing;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod instance;
pub mod models;
pub mod neighborhood;
pub mod publish;

pub use annealing::{run_optimization, Annealer, AnnealingConfig, AnnealingResult};
pub use error::{ConfigError, Error, InvalidInput};
pub use models::{Point, Problem, Solution};
