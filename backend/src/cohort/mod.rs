//! Cohort orchestration: simulate a population and aggregate outcomes.

pub mod outcomes;

pub use outcomes::{CohortOutcomes, CohortSummary, CurvePoint, OutcomeError, SurvivalCurve};

use crate::config::{ConfigError, SimulationConfig};
use crate::models::patient::Patient;
use crate::models::transition::TransitionModel;

/// A population of independently simulated patients sharing one
/// transition model and time horizon.
///
/// # Determinism
///
/// Patient ids are `cohort_id * population_size + index`, collision-free
/// across cohorts, and each id seeds that patient's private random
/// stream. Same config + same model = identical results, regardless of
/// the order patients are processed in.
///
/// # Example
/// ```
/// use cohort_simulator_core_rs::{Cohort, SimulationConfig, TransitionModel};
///
/// let model = TransitionModel::from_counts(&[
///     [1251.0, 350.0, 116.0, 17.0],
///     [0.0, 731.0, 512.0, 15.0],
///     [0.0, 0.0, 1312.0, 437.0],
/// ])
/// .unwrap();
///
/// let config = SimulationConfig {
///     population_size: 100,
///     horizon: 100,
///     cohort_id: 1,
/// };
/// let mut cohort = Cohort::new(config, model).unwrap();
/// let summary = cohort.simulate().unwrap();
/// assert_eq!(summary.survival_curve.initial_population(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct Cohort {
    /// Validated run parameters
    config: SimulationConfig,

    /// Transition model shared read-only by all patients
    model: TransitionModel,

    /// Incrementally collected per-patient outcomes
    outcomes: CohortOutcomes,
}

impl Cohort {
    /// Create a cohort from validated configuration and a built model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn new(config: SimulationConfig, model: TransitionModel) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            model,
            outcomes: CohortOutcomes::new(),
        })
    }

    /// Run configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The shared transition model
    pub fn model(&self) -> &TransitionModel {
        &self.model
    }

    /// Collected outcomes (populated by [`simulate`])
    ///
    /// [`simulate`]: Cohort::simulate
    pub fn outcomes(&self) -> &CohortOutcomes {
        &self.outcomes
    }

    /// Simulate the full population and aggregate outcomes.
    ///
    /// Constructs every patient, runs its trajectory over the configured
    /// horizon, records its outcome, then finalizes. Trajectories are
    /// independent, so the sequential order here is immaterial to the
    /// results.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError`] if no deaths or no AIDS onsets were
    /// recorded (for example with a horizon of 0).
    pub fn simulate(&mut self) -> Result<CohortSummary, OutcomeError> {
        let base_id = self.config.cohort_id * self.config.population_size as u64;

        for i in 0..self.config.population_size {
            let mut patient = Patient::new(base_id + i as u64);
            patient.simulate(&self.model, self.config.horizon);
            self.outcomes.record(&patient);
        }

        self.outcomes.finalize(self.config.population_size)
    }
}
