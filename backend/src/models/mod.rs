//! Domain types: health states, the transition model, and patients.

pub mod monitor;
pub mod patient;
pub mod state;
pub mod transition;

pub use monitor::{OutcomeMonitor, HALF_CYCLE};
pub use patient::Patient;
pub use state::HealthState;
pub use transition::{ModelError, TransitionModel, NUM_STATES};
