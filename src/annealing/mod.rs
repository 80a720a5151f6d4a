//! Simulated annealing driver for CVRP.
//!
//! A single-trajectory search: start from a randomized first-fit solution,
//! propose one random relocation per iteration, accept it by the Metropolis
//! criterion, and cool the temperature geometrically until it reaches its
//! floor. New best solutions are published to an
//! [`ImprovementObserver`](crate::publish::ImprovementObserver).
//!
//! - [`Annealer`] / [`run_optimization`] — the driver and its default-schedule shortcut
//! - [`AnnealingConfig`] — temperature schedule and seed
//! - [`SearchState`] / [`Phase`] — per-run mutable state
//! - [`RoutingSaProblem`] — [`SaProblem`](u_metaheur::sa::SaProblem) implementation
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod bridge;
mod config;
mod driver;
mod state;

pub use bridge::RoutingSaProblem;
pub use config::AnnealingConfig;
pub use driver::{run_optimization, Annealer, AnnealingResult};
pub use state::{Phase, SearchState};
