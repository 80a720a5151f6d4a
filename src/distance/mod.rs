//! Distance matrix.
//!
//! Provides a dense Euclidean distance matrix over the depot and delivery
//! points of a routing problem.

mod matrix;

pub use matrix::DistanceMatrix;
