//! Error types for the trial engine.

use thiserror::Error;

/// Errors building a trial from caller-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The number of values does not match the participant count.
    #[error("Expected {expected} values, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A value lies outside `1..=N`.
    #[error("Value {value} at index {index} is outside 1..={max}")]
    ValueOutOfRange { index: usize, value: u64, max: u64 },
}
