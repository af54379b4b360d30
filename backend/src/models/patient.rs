//! A single simulated individual.

use serde::{Deserialize, Serialize};

use crate::models::monitor::OutcomeMonitor;
use crate::models::transition::TransitionModel;
use crate::rng::RngStream;

/// One individual in a cohort.
///
/// Each patient owns a private [`RngStream`] seeded by its id, so its
/// trajectory is fully deterministic and independent of every other
/// patient. The transition model is shared read-only across the cohort
/// and passed into [`simulate`].
///
/// [`simulate`]: Patient::simulate
///
/// # Example
/// ```
/// use cohort_simulator_core_rs::{Patient, TransitionModel};
///
/// let model = TransitionModel::from_counts(&[
///     [1251.0, 350.0, 116.0, 17.0],
///     [0.0, 731.0, 512.0, 15.0],
///     [0.0, 0.0, 1312.0, 437.0],
/// ])
/// .unwrap();
///
/// let mut patient = Patient::new(1);
/// patient.simulate(&model, 100);
/// // Either the patient died within the horizon or survived all 100 steps.
/// assert!(patient.monitor().survival_time().map_or(true, |t| t < 100.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Unique id within a simulation run; also the RNG seed
    id: u64,

    /// Private random stream (never shared)
    rng: RngStream,

    /// Outcome tracking for this patient
    monitor: OutcomeMonitor,
}

impl Patient {
    /// Create a patient whose random stream is seeded by `id`
    pub fn new(id: u64) -> Self {
        Self {
            id,
            rng: RngStream::new(id),
            monitor: OutcomeMonitor::new(),
        }
    }

    /// Patient id
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Outcome monitor (read after simulation)
    pub fn monitor(&self) -> &OutcomeMonitor {
        &self.monitor
    }

    /// Simulate this patient's trajectory.
    ///
    /// Repeatedly samples the next state from `model` with the patient's
    /// own stream and records it, until the absorbing state is reached or
    /// `horizon` steps have elapsed, whichever comes first. Outcomes are
    /// read afterwards from [`monitor`].
    ///
    /// [`monitor`]: Patient::monitor
    pub fn simulate(&mut self, model: &TransitionModel, horizon: usize) {
        let mut t = 0;
        while self.monitor.is_alive() && t < horizon {
            let next = model.sample_next(self.monitor.current_state(), &mut self.rng);
            self.monitor.update(t, next);
            t += 1;
        }
    }
}
