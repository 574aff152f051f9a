//! Core types for the hat-guessing simulation.
//!
//! Everything here is pure data plus the value/residue arithmetic shared by
//! the trial engine and the reporter. Nothing in this crate touches a random
//! source or performs I/O.

mod error;
mod identifiers;
mod residue;
mod row;

pub use error::TypesError;
pub use identifiers::{Label, ParticipantCount, TrialNumber};
pub use residue::{from_residue, mod_normalized, to_residue};
pub use row::Row;
