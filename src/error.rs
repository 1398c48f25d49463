use thiserror::Error;

use crate::automaton::StateId;

/// Result type used throughout the crate, defaulting to [`MinimizeError`].
pub type Result<T, E = MinimizeError> = std::result::Result<T, E>;

/// Errors that can occur while minimizing an automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// A state has transitions to (at least) two different states on the same symbol.
    #[error("automaton is not deterministic: {state} reaches both {first} and {second} on `{symbol}`")]
    NonDeterministic {
        /// The state whose successor is ambiguous.
        state: StateId,
        /// Human readable representation of the symbol.
        symbol: String,
        /// The first successor that was found.
        first: StateId,
        /// A second successor, different from `first`.
        second: StateId,
    },
}

impl MinimizeError {
    /// Returns true if `self` signals a non-deterministic automaton.
    pub fn is_non_deterministic(&self) -> bool {
        matches!(self, Self::NonDeterministic { .. })
    }
}
