//! Domain-specific identifier types.

use crate::TypesError;
use std::fmt;

/// Participant identity, assigned by position within a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(pub usize);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width and alignment flags apply in tables.
        fmt::Display::fmt(&self.0, f)
    }
}

/// One-based trial counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrialNumber(pub u64);

impl TrialNumber {
    /// The first trial of a run.
    pub const FIRST: Self = TrialNumber(1);

    /// Get the next trial number.
    pub fn next(self) -> Self {
        TrialNumber(self.0 + 1)
    }
}

impl fmt::Display for TrialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of participants `N` in a trial.
///
/// Always in `2..=u32::MAX`. The upper bound keeps `N * N` (the largest
/// possible sum of drawn values) inside a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantCount(u64);

impl ParticipantCount {
    /// Smallest supported participant count.
    pub const MIN: u64 = 2;

    /// Largest supported participant count.
    pub const MAX: u64 = u32::MAX as u64;

    /// Default participant count when none is requested.
    pub const DEFAULT: Self = ParticipantCount(10);

    /// Create a participant count, rejecting values outside `MIN..=MAX`.
    pub fn new(count: u64) -> Result<Self, TypesError> {
        if count < Self::MIN {
            return Err(TypesError::TooFewParticipants(count));
        }
        if count > Self::MAX {
            return Err(TypesError::TooManyParticipants {
                count,
                max: Self::MAX,
            });
        }
        Ok(Self(count))
    }

    /// Create a participant count from a user-supplied number, raising
    /// anything below the minimum up to it.
    pub fn clamped(requested: i64) -> Result<Self, TypesError> {
        Self::new(requested.max(Self::MIN as i64) as u64)
    }

    /// The count as a value-domain number.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The count as a collection length.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for ParticipantCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ParticipantCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_count_bounds() {
        assert_eq!(
            ParticipantCount::new(1),
            Err(TypesError::TooFewParticipants(1))
        );
        assert_eq!(ParticipantCount::new(2).unwrap().get(), 2);
        assert_eq!(
            ParticipantCount::new(ParticipantCount::MAX).unwrap().get(),
            ParticipantCount::MAX
        );
        assert!(matches!(
            ParticipantCount::new(ParticipantCount::MAX + 1),
            Err(TypesError::TooManyParticipants { .. })
        ));
    }

    #[test]
    fn test_clamped_raises_small_counts_to_minimum() {
        assert_eq!(ParticipantCount::clamped(-7).unwrap().get(), 2);
        assert_eq!(ParticipantCount::clamped(0).unwrap().get(), 2);
        assert_eq!(ParticipantCount::clamped(1).unwrap().get(), 2);
        assert_eq!(ParticipantCount::clamped(25).unwrap().get(), 25);
    }

    #[test]
    fn test_label_honours_padding() {
        assert_eq!(format!("{:<4}|", Label(7)), "7   |");
    }

    #[test]
    fn test_trial_number_sequence() {
        let t = TrialNumber::FIRST;
        assert_eq!(t.0, 1);
        assert_eq!(t.next(), TrialNumber(2));
        assert_eq!(t.next().to_string(), "2");
    }
}
