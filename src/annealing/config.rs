//! Annealing schedule configuration.

use crate::error::ConfigError;

/// Configuration for the annealing driver.
///
/// Cooling is geometric with one neighbor evaluation per temperature step:
/// `T_{k+1} = cooling_rate * T_k`, stopping once `T <= final_temperature`.
/// With the defaults (100 → 1 at rate 0.99) a run performs 459 iterations
/// regardless of problem size.
///
/// # Examples
///
/// ```
/// use cvrp_anneal::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.995)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(config.expected_iterations() > 459);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingConfig {
    /// Starting temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// The run terminates once the temperature drops to or below this.
    pub final_temperature: f64,

    /// Multiplicative cooling factor applied after every iteration, in (0, 1).
    pub cooling_rate: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            final_temperature: 1.0,
            cooling_rate: 0.99,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("initial_temperature", self.initial_temperature),
            ("final_temperature", self.final_temperature),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveTemperature { name, value });
            }
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(ConfigError::TemperatureOrder {
                initial_temperature: self.initial_temperature,
                final_temperature: self.final_temperature,
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRateOutOfRange(self.cooling_rate));
        }
        Ok(())
    }

    /// Number of iterations a full (uncancelled) run performs.
    ///
    /// Replays the cooling sequence with the same floating-point steps as
    /// the driver, so the count is exact; it agrees with
    /// `ceil(ln(final / initial) / ln(cooling_rate))` up to rounding.
    /// Returns 0 for an invalid configuration.
    pub fn expected_iterations(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut temperature = self.initial_temperature;
        let mut iterations = 0;
        while temperature > self.final_temperature {
            temperature *= self.cooling_rate;
            iterations += 1;
        }
        iterations
    }
}
