//! Simulation configuration.
//!
//! The original inputs to this kind of model are usually module-level
//! constants; here they are an explicit, validated struct passed into
//! [`Cohort::new`](crate::cohort::Cohort::new).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from configuration validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be positive")]
    EmptyPopulation,
}

/// Parameters for one cohort simulation run.
///
/// # Example
/// ```
/// use cohort_simulator_core_rs::SimulationConfig;
///
/// let config = SimulationConfig {
///     population_size: 5000,
///     horizon: 100,
///     cohort_id: 1,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of patients in the cohort (must be positive)
    pub population_size: usize,

    /// Simulation length in time steps (years)
    pub horizon: usize,

    /// Cohort identifier; patient ids are
    /// `cohort_id * population_size + index`, collision-free across cohorts
    pub cohort_id: u64,
}

impl Default for SimulationConfig {
    /// The reference scenario: 5000 patients over 100 years.
    fn default() -> Self {
        Self {
            population_size: 5000,
            horizon: 100,
            cohort_id: 1,
        }
    }
}

impl SimulationConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPopulation`] if `population_size` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        Ok(())
    }
}
