//! Trial engine for the hat-guessing puzzle.
//!
//! Each of `N` participants receives a value drawn uniformly from `1..=N`.
//! Participants see every value except their own and guess it with a fixed
//! modular rule derived from the sum of what they see. Given the drawn values
//! the whole trial is deterministic; all randomness is confined to the draw.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      run_trial                          │
//! │                                                         │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Draw N values from rng, each in 1..=N          │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Trial::from_actuals                            │ │
//! │  │     total (u64) → per-row seen sum → guess         │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Trial: N rows in label order                   │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never formats or prints; reporting lives in the simulator.

mod engine;
mod error;
mod trial;

pub use engine::run_trial;
pub use error::SimulationError;
pub use trial::Trial;
