//! Cross-trial statistics.

use hatguess_simulation::Trial;
use std::io::{self, Write};

/// Running tally of trial outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrialTally {
    /// Trials recorded so far.
    total_trials: u64,

    /// Trials in which exactly one participant guessed correctly.
    exactly_one: u64,

    /// Trials in which at least one participant guessed correctly.
    at_least_one: u64,
}

impl TrialTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one trial.
    pub fn record(&mut self, trial: &Trial) {
        self.record_correct_count(trial.correct_count());
    }

    /// Record a trial by its number of correct guesses.
    pub fn record_correct_count(&mut self, correct: usize) {
        self.total_trials += 1;
        if correct == 1 {
            self.exactly_one += 1;
        }
        if correct >= 1 {
            self.at_least_one += 1;
        }
    }

    /// Trials recorded so far.
    pub fn total_trials(&self) -> u64 {
        self.total_trials
    }

    /// Trials with exactly one correct guess.
    pub fn exactly_one(&self) -> u64 {
        self.exactly_one
    }

    /// Trials with at least one correct guess.
    pub fn at_least_one(&self) -> u64 {
        self.at_least_one
    }

    /// Write the cross-trial summary. Nothing is written for a single trial.
    pub fn write_summary<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        if self.total_trials <= 1 {
            return Ok(());
        }
        writeln!(out)?;
        writeln!(out, "Summary over {} trials:", self.total_trials)?;
        writeln!(
            out,
            "Trials with exactly one correct: {} / {}",
            self.exactly_one, self.total_trials
        )
    }
}
