//! Error types for the simulator.

use hatguess_types::TypesError;
use thiserror::Error;

/// Errors configuring or running a simulation.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// Invalid participant count.
    #[error("Invalid configuration: {0}")]
    Config(#[from] TypesError),

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
