//! Transition probability model built from observed transition counts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::state::HealthState;
use crate::rng::RngStream;

/// Number of states; rows and columns of the transition model.
pub const NUM_STATES: usize = HealthState::COUNT;

/// Tolerance for row-sum validation.
const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// Errors that can occur when building a transition model from counts
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("negative transition count at row {row}, column {col}: {value}")]
    NegativeCount { row: usize, col: usize, value: f64 },

    #[error("row {row} of the count matrix sums to zero")]
    EmptyRow { row: usize },

    #[error("count matrix must have 4 rows, or 3 with the absorbing row implied, got {rows}")]
    WrongShape { rows: usize },

    #[error("probability at row {row}, column {col} is invalid: {value}")]
    InvalidProbability { row: usize, col: usize, value: f64 },

    #[error("row {row} probabilities sum to {sum}, expected 1.0")]
    NotStochastic { row: usize, sum: f64 },
}

/// Row-stochastic transition probability matrix over [`HealthState`].
///
/// Built once from raw transition counts, immutable afterwards, and shared
/// read-only by every patient in a cohort. Row `i` holds the probabilities
/// of moving from state `i` to each state in one time step; each row sums
/// to 1.
///
/// # Example
/// ```
/// use cohort_simulator_core_rs::{HealthState, TransitionModel};
///
/// let model = TransitionModel::from_counts(&[
///     [1251.0, 350.0, 116.0, 17.0],
///     [0.0, 731.0, 512.0, 15.0],
///     [0.0, 0.0, 1312.0, 437.0],
/// ])
/// .unwrap();
///
/// let p = model.prob(HealthState::Aids, HealthState::Death);
/// assert!((p - 437.0 / 1749.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionModel {
    probs: [[f64; NUM_STATES]; NUM_STATES],
}

impl TransitionModel {
    /// Build a transition model from a matrix of non-negative counts.
    ///
    /// Each row is normalized by its sum. The input must have one row per
    /// state, or one row per non-absorbing state; in the latter form the
    /// absorbing row is implied as the unit vector (all mass on `Death`),
    /// matching how such matrices are published.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the matrix has the wrong number of rows,
    /// contains a negative count, or has a row summing to zero.
    pub fn from_counts(counts: &[[f64; NUM_STATES]]) -> Result<Self, ModelError> {
        if counts.len() != NUM_STATES && counts.len() != NUM_STATES - 1 {
            return Err(ModelError::WrongShape { rows: counts.len() });
        }

        let mut probs = [[0.0_f64; NUM_STATES]; NUM_STATES];

        for (i, row) in counts.iter().enumerate() {
            let mut sum = 0.0;
            for (j, &cell) in row.iter().enumerate() {
                if cell < 0.0 || !cell.is_finite() {
                    return Err(ModelError::NegativeCount {
                        row: i,
                        col: j,
                        value: cell,
                    });
                }
                sum += cell;
            }
            if sum == 0.0 {
                return Err(ModelError::EmptyRow { row: i });
            }
            for (j, &cell) in row.iter().enumerate() {
                probs[i][j] = cell / sum;
            }
        }

        // Absorbing row: implied when omitted. The simulation loop stops at
        // Death regardless, so this row only matters for validation.
        if counts.len() == NUM_STATES - 1 {
            probs[NUM_STATES - 1][NUM_STATES - 1] = 1.0;
        }

        Ok(Self { probs })
    }

    /// Transition probabilities out of a given state.
    pub fn row(&self, from: HealthState) -> &[f64; NUM_STATES] {
        &self.probs[from.as_index()]
    }

    /// Probability of transitioning from one state to another in one step.
    pub fn prob(&self, from: HealthState, to: HealthState) -> f64 {
        self.probs[from.as_index()][to.as_index()]
    }

    /// Validates that the matrix is row-stochastic.
    ///
    /// Checks that all entries are finite, in `[0, 1]`, and that each row
    /// sums to 1 within tolerance. Matrices produced by [`from_counts`]
    /// always pass.
    ///
    /// [`from_counts`]: TransitionModel::from_counts
    pub fn validate(&self) -> Result<(), ModelError> {
        for (i, row) in self.probs.iter().enumerate() {
            let mut sum = 0.0;
            for (j, &p) in row.iter().enumerate() {
                if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                    return Err(ModelError::InvalidProbability {
                        row: i,
                        col: j,
                        value: p,
                    });
                }
                sum += p;
            }
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(ModelError::NotStochastic { row: i, sum });
            }
        }
        Ok(())
    }

    /// Samples the next state given the current state (the Markov jump
    /// process).
    ///
    /// Draws one uniform value from the patient's stream and walks the
    /// row's cumulative distribution, returning the first state whose
    /// cumulative probability meets or exceeds the draw. Falls back to the
    /// last state if floating-point rounding prevents a match.
    ///
    /// The simulation loop never calls this on the absorbing state.
    pub fn sample_next(&self, from: HealthState, rng: &mut RngStream) -> HealthState {
        let u = rng.next_f64();
        let row = &self.probs[from.as_index()];
        let mut cumulative = 0.0;
        for state in HealthState::ALL {
            cumulative += row[state.as_index()];
            if cumulative > u {
                return state;
            }
        }
        // Rounding left u at or beyond the total row mass.
        HealthState::Death
    }
}
