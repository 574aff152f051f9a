//! Hat-guessing simulation CLI
//!
//! Usage:
//!
//! ```text
//! hatguess-sim                  N=10, one trial
//! hatguess-sim <N>              N participants, one trial
//! hatguess-sim <N> <TRIALS>     N participants, TRIALS trials
//! ```
//!
//! The report goes to stdout. Logs go to stderr, filtered by `RUST_LOG`.

use clap::Parser;
use hatguess_simulator::{Simulator, SimulatorConfig};
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hatguess-sim")]
#[command(about = "Monte Carlo simulation of the modular hat-guessing strategy")]
#[command(version)]
struct Cli {
    /// Number of participants (raised to at least 2)
    #[arg(allow_negative_numbers = true)]
    participants: Option<i64>,

    /// Number of trials (raised to at least 1)
    #[arg(allow_negative_numbers = true)]
    trials: Option<i64>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    _ignored: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = SimulatorConfig::from_args(cli.participants, cli.trials)?;
    let mut simulator = Simulator::new(config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    simulator.run(&mut out)?;
    out.flush()?;

    Ok(())
}
