//! Trial result set and the per-participant guessing rule.

use crate::SimulationError;
use hatguess_types::{from_residue, mod_normalized, to_residue, Label, ParticipantCount, Row};

/// The rows produced by one trial, in label order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    participants: ParticipantCount,
    rows: Vec<Row>,
    total_raw: u64,
}

impl Trial {
    /// Build a trial from fixed values.
    ///
    /// `actuals[i]` is the value assigned to label `i`. Fails if the length
    /// differs from `participants` or any value lies outside `1..=N`.
    pub fn from_actuals(
        participants: ParticipantCount,
        actuals: &[u64],
    ) -> Result<Self, SimulationError> {
        if actuals.len() != participants.as_usize() {
            return Err(SimulationError::WrongLength {
                expected: participants.as_usize(),
                actual: actuals.len(),
            });
        }

        let max = participants.get();
        if let Some((index, &value)) = actuals
            .iter()
            .enumerate()
            .find(|(_, &v)| v == 0 || v > max)
        {
            return Err(SimulationError::ValueOutOfRange { index, value, max });
        }

        Ok(Self::from_valid_actuals(participants, actuals))
    }

    /// Build a trial from values already known to be in range.
    pub(crate) fn from_valid_actuals(participants: ParticipantCount, actuals: &[u64]) -> Self {
        let total_raw: u64 = actuals.iter().sum();

        let rows = actuals
            .iter()
            .enumerate()
            .map(|(index, &actual)| guess_row(participants, Label(index), actual, total_raw))
            .collect();

        Self {
            participants,
            rows,
            total_raw,
        }
    }

    /// Number of participants.
    pub fn participants(&self) -> ParticipantCount {
        self.participants
    }

    /// All rows, indexed by label.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Drawn values in label order.
    pub fn actuals(&self) -> impl Iterator<Item = u64> + '_ {
        self.rows.iter().map(|row| row.actual)
    }

    /// Sum of all drawn values.
    pub fn total_raw(&self) -> u64 {
        self.total_raw
    }

    /// Residue of each drawn value, in label order.
    pub fn residues(&self) -> Vec<u64> {
        self.actuals()
            .map(|value| to_residue(value, self.participants))
            .collect()
    }

    /// Sum of all residues, modulo `N`.
    pub fn total_residue(&self) -> u64 {
        let n = self.participants.get();
        self.actuals()
            .fold(0, |acc, value| (acc + to_residue(value, self.participants)) % n)
    }

    /// Number of participants who guessed their own value.
    pub fn correct_count(&self) -> usize {
        self.rows.iter().filter(|row| row.correct).count()
    }

    /// Whether at least one participant guessed correctly.
    pub fn any_correct(&self) -> bool {
        self.rows.iter().any(|row| row.correct)
    }
}

/// Apply the guessing rule for one participant.
///
/// The participant sees `total_raw - actual` and guesses the value whose
/// residue is `(label - seen) mod N`.
fn guess_row(participants: ParticipantCount, label: Label, actual: u64, total_raw: u64) -> Row {
    let seen_sum = total_raw - actual;
    let seen_mod = seen_sum % participants.get();
    let guess_resid = mod_normalized(label.0 as i64 - seen_mod as i64, participants);
    let guess = from_residue(guess_resid, participants);

    Row {
        label,
        actual,
        seen_sum,
        seen_mod,
        guess_resid,
        guess,
        correct: guess == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: u64) -> ParticipantCount {
        ParticipantCount::new(n).unwrap()
    }

    #[test]
    fn test_fixed_four_participant_trial() {
        let trial = Trial::from_actuals(count(4), &[2, 4, 1, 3]).unwrap();
        assert_eq!(trial.total_raw(), 10);

        let expected = [
            // (seen_sum, seen_mod, guess_resid, guess, correct)
            (8, 0, 0, 4, false),
            (6, 2, 3, 3, false),
            (9, 1, 1, 1, true),
            (7, 3, 0, 4, false),
        ];
        for (row, (seen_sum, seen_mod, guess_resid, guess, correct)) in
            trial.rows().iter().zip(expected)
        {
            assert_eq!(row.seen_sum, seen_sum, "row {}", row.label);
            assert_eq!(row.seen_mod, seen_mod, "row {}", row.label);
            assert_eq!(row.guess_resid, guess_resid, "row {}", row.label);
            assert_eq!(row.guess, guess, "row {}", row.label);
            assert_eq!(row.correct, correct, "row {}", row.label);
        }

        assert_eq!(trial.correct_count(), 1);
        assert!(trial.any_correct());
    }

    #[test]
    fn test_labels_are_positional() {
        let trial = Trial::from_actuals(count(5), &[5, 5, 5, 5, 5]).unwrap();
        let labels: Vec<usize> = trial.rows().iter().map(|r| r.label.0).collect();
        assert_eq!(labels, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_negative_intermediate_is_normalized() {
        // Label 0 sees 3 + 5 + 5 + 5 = 18, 18 mod 5 = 3, (0 - 3) mod 5 = 2.
        let trial = Trial::from_actuals(count(5), &[2, 3, 5, 5, 5]).unwrap();
        let row = trial.rows()[0];
        assert_eq!(row.seen_mod, 3);
        assert_eq!(row.guess_resid, 2);
        assert_eq!(row.guess, 2);
        assert!(row.correct);
    }

    #[test]
    fn test_residue_summary() {
        let trial = Trial::from_actuals(count(4), &[2, 4, 1, 3]).unwrap();
        assert_eq!(trial.residues(), vec![2, 0, 1, 3]);
        assert_eq!(trial.total_residue(), 2);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            Trial::from_actuals(count(3), &[1, 2]),
            Err(SimulationError::WrongLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert_eq!(
            Trial::from_actuals(count(3), &[1, 0, 2]),
            Err(SimulationError::ValueOutOfRange {
                index: 1,
                value: 0,
                max: 3
            })
        );
        assert_eq!(
            Trial::from_actuals(count(3), &[1, 2, 4]),
            Err(SimulationError::ValueOutOfRange {
                index: 2,
                value: 4,
                max: 3
            })
        );
    }

    #[test]
    fn test_seen_sum_beyond_32_bits() {
        let n = count(100_000);
        let actuals = vec![100_000; n.as_usize()];
        let trial = Trial::from_actuals(n, &actuals).unwrap();
        assert_eq!(trial.total_raw(), 10_000_000_000);
        assert!(trial.total_raw() > u64::from(u32::MAX));

        let row = trial.rows()[0];
        assert_eq!(row.seen_sum, 9_999_900_000);
        assert_eq!(row.seen_mod, 0);
        assert_eq!(row.guess_resid, 0);
        assert_eq!(row.guess, 100_000);
        assert!(row.correct);

        let row = trial.rows()[1];
        assert_eq!(row.seen_sum, 9_999_900_000);
        assert_eq!(row.guess_resid, 1);
        assert_eq!(row.guess, 1);
        assert!(!row.correct);
        assert_eq!(trial.correct_count(), 1);
    }

    #[test]
    fn test_two_participants() {
        // Total 3: label 0 sees 1 and guesses 1, label 1 sees 2 and guesses 1.
        let trial = Trial::from_actuals(count(2), &[2, 1]).unwrap();
        assert_eq!(trial.rows().len(), 2);
        assert_eq!(trial.rows()[0].guess, 1);
        assert!(!trial.rows()[0].correct);
        assert_eq!(trial.rows()[1].guess, 1);
        assert!(trial.rows()[1].correct);
    }
}
