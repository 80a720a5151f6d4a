//! Constructive heuristics for building initial CVRP solutions.
//!
//! - [`first_fit`] — Randomized first-fit bin packing with an overload fallback, O(n·k)

mod first_fit;

pub use first_fit::first_fit;
