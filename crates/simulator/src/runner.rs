//! Sequential trial loop.

use crate::{SimulatorConfig, SimulatorError, TrialReporter, TrialTally};
use hatguess_simulation::run_trial;
use hatguess_types::TrialNumber;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use tracing::{debug, info};

/// Drives a configured number of trials and reports each one.
///
/// The simulator owns the only random source. It is seeded once and its
/// stream continues across trials.
pub struct Simulator {
    config: SimulatorConfig,
    seed: u64,
    rng: ChaCha8Rng,
    reporter: TrialReporter,
}

impl Simulator {
    /// Create a simulator. Without a configured seed one is drawn from OS
    /// entropy.
    pub fn new(config: SimulatorConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            config,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            reporter: TrialReporter::new(),
        }
    }

    /// The seed this run uses.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run every trial, writing each block and then the summary to `out`.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<TrialTally, SimulatorError> {
        let participants = self.config.participants;
        info!(
            participants = participants.get(),
            trials = self.config.trials,
            seed = self.seed,
            seeded = self.config.seed.is_some(),
            "Starting simulation"
        );

        let mut tally = TrialTally::new();
        let mut number = TrialNumber::FIRST;
        for _ in 0..self.config.trials {
            let trial = run_trial(&mut self.rng, participants);
            self.reporter.write_trial(out, number, &trial)?;
            tally.record(&trial);

            debug!(
                trial = number.0,
                correct = trial.correct_count(),
                "Trial complete"
            );
            number = number.next();
        }

        tally.write_summary(out)?;

        info!(
            trials = tally.total_trials(),
            exactly_one = tally.exactly_one(),
            at_least_one = tally.at_least_one(),
            "Simulation complete"
        );
        Ok(tally)
    }
}
