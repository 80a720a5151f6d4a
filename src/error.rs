//! Error types for problem construction and annealing configuration.

use thiserror::Error;

/// Structural problems detected while building a [`Problem`](crate::models::Problem).
///
/// Optimization must not be started when construction fails; none of these
/// are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The point and demand lists are not parallel.
    #[error("{points} delivery points but {demands} demands")]
    LengthMismatch {
        /// Number of delivery points supplied.
        points: usize,
        /// Number of demands supplied.
        demands: usize,
    },
    /// The fleet is empty.
    #[error("truck count must be positive")]
    NoTrucks,
    /// Truck capacity is zero.
    #[error("truck capacity must be positive")]
    ZeroCapacity,
    /// A coordinate is NaN or infinite. `None` refers to the depot.
    #[error("non-finite coordinate at {}", describe_location(.index))]
    NonFiniteCoordinate {
        /// Delivery point index, or `None` for the depot.
        index: Option<usize>,
    },
}

fn describe_location(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("delivery point {i}"),
        None => "depot".to_string(),
    }
}

/// Invalid [`AnnealingConfig`](crate::annealing::AnnealingConfig) parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A temperature bound is zero, negative, or not finite.
    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveTemperature {
        /// Which bound was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The final temperature does not lie below the initial one.
    #[error("final_temperature ({final_temperature}) must be less than initial_temperature ({initial_temperature})")]
    TemperatureOrder {
        /// Configured starting temperature.
        initial_temperature: f64,
        /// Configured stopping temperature.
        final_temperature: f64,
    },
    /// The multiplicative cooling rate is outside `(0, 1)`.
    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRateOutOfRange(f64),
}

/// Any error surfaced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Problem construction failed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// Annealing configuration failed validation.
    #[error("invalid annealing config: {0}")]
    Config(#[from] ConfigError),
}
