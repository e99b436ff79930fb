//! Annealing configuration.

use super::schedule::{CoolingScheme, DEFAULT_RATE};
use crate::error::{PartitionError, Result};
use crate::ising::DEFAULT_ENERGY_SCALE;

/// Default iteration cap.
pub const MAX_ITERATIONS: usize = 10_000;

/// Default stopping temperature.
pub const DEFAULT_TEMPERATURE_THRESHOLD: f64 = 0.1;

/// Default initial temperature.
pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 10.0;

/// Configuration for one annealing run.
///
/// # Examples
///
/// ```
/// use u_partition::sa::{AnnealConfig, CoolingScheme};
///
/// let config = AnnealConfig::default()
///     .with_max_iterations(5_000)
///     .with_initial_temperature(10.0)
///     .with_cooling(CoolingScheme::from_name("T0/sqrt(1+t)"))
///     .with_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cooling, CoolingScheme::SquareRoot);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Maximum number of iterations executed. 0 runs nothing.
    pub max_iterations: usize,

    /// Temperature at iteration 0.
    pub initial_temperature: f64,

    /// Requested cooling scheme.
    ///
    /// The loop only evaluates it when `follow_cooling_scheme` is set;
    /// otherwise it cools harmonically.
    pub cooling: CoolingScheme,

    /// Time-scaling coefficient `K`.
    pub rate: f64,

    /// The run stops once the temperature is at or below this value.
    pub temperature_threshold: f64,

    /// Energy scale `A`.
    pub energy_scale: f64,

    /// Drive the loop with `cooling` instead of harmonic cooling.
    pub follow_cooling_scheme: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            initial_temperature: DEFAULT_INITIAL_TEMPERATURE,
            cooling: CoolingScheme::default(),
            rate: DEFAULT_RATE,
            temperature_threshold: DEFAULT_TEMPERATURE_THRESHOLD,
            energy_scale: DEFAULT_ENERGY_SCALE,
            follow_cooling_scheme: false,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingScheme) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_rate(mut self, k: f64) -> Self {
        self.rate = k;
        self
    }

    pub fn with_temperature_threshold(mut self, t: f64) -> Self {
        self.temperature_threshold = t;
        self
    }

    pub fn with_energy_scale(mut self, a: f64) -> Self {
        self.energy_scale = a;
        self
    }

    pub fn with_follow_cooling_scheme(mut self, follow: bool) -> Self {
        self.follow_cooling_scheme = follow;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The scheme the loop actually cools with.
    pub fn loop_cooling(&self) -> CoolingScheme {
        if self.follow_cooling_scheme {
            self.cooling
        } else {
            CoolingScheme::Harmonic
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.initial_temperature) {
            return Err(invalid(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !is_positive(self.rate) {
            return Err(invalid(format!("rate must be positive, got {}", self.rate)));
        }
        if !is_positive(self.temperature_threshold) {
            return Err(invalid(format!(
                "temperature_threshold must be positive, got {}",
                self.temperature_threshold
            )));
        }
        if !is_positive(self.energy_scale) {
            return Err(invalid(format!(
                "energy_scale must be positive, got {}",
                self.energy_scale
            )));
        }
        Ok(())
    }
}

fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

fn invalid(message: String) -> PartitionError {
    PartitionError::InvalidConfig(message)
}
