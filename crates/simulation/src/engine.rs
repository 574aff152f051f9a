//! Random draw for a single trial.

use crate::Trial;
use hatguess_types::ParticipantCount;
use rand::Rng;
use tracing::trace;

/// Run one trial: draw `N` independent values uniformly from `1..=N` and
/// apply the guessing rule to every participant.
///
/// The caller owns the random source; successive calls with the same
/// generator continue its stream.
pub fn run_trial<R: Rng + ?Sized>(rng: &mut R, participants: ParticipantCount) -> Trial {
    let max = participants.get();
    let actuals: Vec<u64> = (0..participants.as_usize())
        .map(|_| rng.gen_range(1..=max))
        .collect();

    let trial = Trial::from_valid_actuals(participants, &actuals);
    trace!(
        participants = max,
        total_raw = trial.total_raw(),
        correct = trial.correct_count(),
        "Trial drawn"
    );
    trial
}
