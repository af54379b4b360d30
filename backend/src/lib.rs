//! Cohort Simulator Core - Rust Engine
//!
//! Discrete-time, finite-state Markov cohort simulator for
//! health-economic modeling, with deterministic execution.
//!
//! # Architecture
//!
//! - **config**: Validated run parameters (population, horizon, cohort id)
//! - **models**: Domain types (HealthState, TransitionModel, Patient)
//! - **cohort**: Population loop and outcome aggregation
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (one seeded stream per patient)
//! 2. The transition model is row-stochastic, immutable, and shared
//!    read-only
//! 3. Once a patient reaches the absorbing state, nothing further is
//!    recorded
//!
//! # Example
//!
//! ```
//! use cohort_simulator_core_rs::{Cohort, SimulationConfig, TransitionModel};
//!
//! let model = TransitionModel::from_counts(&[
//!     [1251.0, 350.0, 116.0, 17.0],
//!     [0.0, 731.0, 512.0, 15.0],
//!     [0.0, 0.0, 1312.0, 437.0],
//! ])?;
//!
//! let mut cohort = Cohort::new(SimulationConfig::default(), model)?;
//! let summary = cohort.simulate()?;
//! assert!(summary.mean_survival_time > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Module declarations
pub mod cohort;
pub mod config;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use cohort::{
    Cohort, CohortOutcomes, CohortSummary, CurvePoint, OutcomeError, SurvivalCurve,
};
pub use config::{ConfigError, SimulationConfig};
pub use models::{
    monitor::OutcomeMonitor,
    patient::Patient,
    state::HealthState,
    transition::{ModelError, TransitionModel, NUM_STATES},
};
pub use rng::RngStream;
