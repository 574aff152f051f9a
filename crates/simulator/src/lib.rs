//! Hat-guessing Simulator
//!
//! Runs the trial engine from `hatguess-simulation` repeatedly and renders
//! each trial as a text table.
//!
//! # Architecture
//!
//! - **Configuration**: participant count, trial count, optional seed
//! - **Reporting**: per-trial header, row table and verdict line
//! - **Tally**: cross-trial count of trials with exactly one correct guess
//! - **Runner**: owns the random source and drives trials in sequence
//!
//! # Example
//!
//! ```
//! use hatguess_simulator::{Simulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::default().with_trials(3).with_seed(12345);
//! let mut out = Vec::new();
//! let tally = Simulator::new(config).run(&mut out).unwrap();
//!
//! assert_eq!(tally.total_trials(), 3);
//! assert!(String::from_utf8(out).unwrap().contains("Summary over 3 trials:"));
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod report;
pub mod runner;

pub use config::SimulatorConfig;
pub use error::SimulatorError;
pub use metrics::TrialTally;
pub use report::TrialReporter;
pub use runner::Simulator;
