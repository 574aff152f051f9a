//! Configuration types for the simulator.

use crate::SimulatorError;
use hatguess_types::ParticipantCount;

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Number of participants per trial.
    pub participants: ParticipantCount,

    /// Number of trials to run. Always at least 1.
    pub trials: u64,

    /// Random seed for a reproducible run. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SimulatorConfig {
    /// Trial count used when none is requested.
    pub const DEFAULT_TRIALS: u64 = 1;

    /// Create a new simulator configuration.
    pub fn new(participants: ParticipantCount, trials: u64) -> Self {
        Self {
            participants,
            trials: trials.max(1),
            seed: None,
        }
    }

    /// Build a configuration from optional user-supplied numbers.
    ///
    /// Missing values take the defaults (10 participants, 1 trial). Supplied
    /// values are raised to the minimums (2 participants, 1 trial).
    pub fn from_args(
        participants: Option<i64>,
        trials: Option<i64>,
    ) -> Result<Self, SimulatorError> {
        let participants = match participants {
            Some(requested) => ParticipantCount::clamped(requested)?,
            None => ParticipantCount::DEFAULT,
        };
        let trials = trials
            .map(|requested| requested.max(1) as u64)
            .unwrap_or(Self::DEFAULT_TRIALS);
        Ok(Self::new(participants, trials))
    }

    /// Set the participant count.
    pub fn with_participants(mut self, participants: ParticipantCount) -> Self {
        self.participants = participants;
        self
    }

    /// Set the number of trials (raised to at least 1).
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials.max(1);
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(ParticipantCount::DEFAULT, Self::DEFAULT_TRIALS)
    }
}
