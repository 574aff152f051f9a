//! Error types for core values.

use thiserror::Error;

/// Errors constructing core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// The puzzle needs at least two participants.
    #[error("Too few participants: {0} (minimum is 2)")]
    TooFewParticipants(u64),

    /// Above this bound the sum of all drawn values could overflow 64 bits.
    #[error("Too many participants: {count} (maximum is {max})")]
    TooManyParticipants { count: u64, max: u64 },
}
