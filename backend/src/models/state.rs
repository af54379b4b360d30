//! Health states for the Markov cohort model.

use serde::{Deserialize, Serialize};

/// Clinical health states an individual can occupy.
///
/// States are mutually exclusive and totally ordered; the `#[repr(u8)]`
/// discriminants match the row/column indices of the transition model.
/// `Death` is the single absorbing state: once reached, no further
/// transitions occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HealthState {
    /// CD4 count between 200 and 500 cells/mm3.
    Cd4Between200And500 = 0,
    /// CD4 count below 200 cells/mm3.
    Cd4Below200 = 1,
    /// AIDS diagnosis (the intermediate clinical event of interest).
    Aids = 2,
    /// Death from HIV (absorbing).
    Death = 3,
}

impl HealthState {
    /// All states in index order.
    pub const ALL: [HealthState; 4] = [
        Self::Cd4Between200And500,
        Self::Cd4Below200,
        Self::Aids,
        Self::Death,
    ];

    /// Number of states (rows/columns of the transition model).
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based index of this state (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// State for a zero-based index, or `None` if out of range.
    pub fn from_index(index: usize) -> Option<HealthState> {
        Self::ALL.get(index).copied()
    }

    /// True for the terminal state from which no transitions occur.
    pub fn is_absorbing(self) -> bool {
        self == Self::Death
    }

    /// The state every individual starts in: the lowest-index
    /// non-absorbing state.
    pub fn initial() -> HealthState {
        Self::Cd4Between200And500
    }
}
