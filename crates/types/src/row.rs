//! Per-participant trial record.

use crate::Label;

/// One participant's record for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// Positional identity in `0..N`.
    pub label: Label,

    /// The participant's own drawn value in `1..=N`.
    pub actual: u64,

    /// Sum of every other participant's value.
    pub seen_sum: u64,

    /// `seen_sum mod N`.
    pub seen_mod: u64,

    /// `(label - seen_mod) mod N`, normalized into `0..N`.
    pub guess_resid: u64,

    /// `guess_resid` mapped back into `1..=N`.
    pub guess: u64,

    /// Whether the guess matches the drawn value.
    pub correct: bool,
}
