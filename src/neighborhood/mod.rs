//! Neighborhood moves for the annealing search.
//!
//! - [`relocate`] — Move one random stop between two random trucks, capacity permitting

mod relocate;

pub use relocate::{relocate, relocate_in_place, MoveOutcome};
