//! Per-patient outcome tracking.

use serde::{Deserialize, Serialize};

use crate::models::state::HealthState;

/// Length of the half-cycle correction applied to event times.
///
/// Deaths and AIDS onsets are assumed, on average, to occur mid-interval,
/// so recorded times are `step + 0.5` rather than `step`.
pub const HALF_CYCLE: f64 = 0.5;

/// Tracks one patient's current state and outcomes over the simulation.
///
/// Updated once per simulated time step by its owning patient; never
/// shared. Survival time and time to AIDS are write-once: later updates
/// never overwrite a recorded value.
///
/// # Example
/// ```
/// use cohort_simulator_core_rs::{HealthState, OutcomeMonitor};
///
/// let mut monitor = OutcomeMonitor::new();
/// assert!(monitor.is_alive());
///
/// monitor.update(3, HealthState::Death);
/// assert!(!monitor.is_alive());
/// assert_eq!(monitor.survival_time(), Some(3.5));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeMonitor {
    /// Current health state
    current_state: HealthState,

    /// Years survived, half-cycle corrected; `None` while alive
    survival_time: Option<f64>,

    /// Years until first AIDS onset, half-cycle corrected; write-once
    time_to_aids: Option<f64>,

    /// Whether the patient ever developed AIDS
    developed_aids: bool,
}

impl Default for OutcomeMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeMonitor {
    /// Create a monitor in the initial health state
    pub fn new() -> Self {
        Self {
            current_state: HealthState::initial(),
            survival_time: None,
            time_to_aids: None,
            developed_aids: false,
        }
    }

    /// Record the transition taken at `time_step`.
    ///
    /// No-op once the patient is dead, so out-of-band calls after the
    /// simulation loop has halted cannot corrupt recorded outcomes.
    pub fn update(&mut self, time_step: usize, new_state: HealthState) {
        if self.current_state.is_absorbing() {
            return;
        }

        if new_state.is_absorbing() && self.survival_time.is_none() {
            self.survival_time = Some(time_step as f64 + HALF_CYCLE);
        }

        // First AIDS onset only; re-entering the state later never
        // overwrites the recorded time.
        if self.current_state != HealthState::Aids
            && new_state == HealthState::Aids
            && self.time_to_aids.is_none()
        {
            self.developed_aids = true;
            self.time_to_aids = Some(time_step as f64 + HALF_CYCLE);
        }

        self.current_state = new_state;
    }

    /// True while the patient has not reached the absorbing state
    pub fn is_alive(&self) -> bool {
        !self.current_state.is_absorbing()
    }

    /// Current health state
    pub fn current_state(&self) -> HealthState {
        self.current_state
    }

    /// Years survived, or `None` if still alive at the horizon
    pub fn survival_time(&self) -> Option<f64> {
        self.survival_time
    }

    /// Years until first AIDS onset, or `None` if AIDS never developed
    pub fn time_to_aids(&self) -> Option<f64> {
        self.time_to_aids
    }

    /// Whether the patient ever developed AIDS
    pub fn developed_aids(&self) -> bool {
        self.developed_aids
    }
}
