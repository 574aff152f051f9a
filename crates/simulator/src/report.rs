//! Text rendering of a single trial.

use hatguess_simulation::Trial;
use hatguess_types::{Row, TrialNumber};
use std::io::{self, Write};

/// Column widths of the row table, left-aligned.
const COLUMN_WIDTHS: [usize; 6] = [8, 10, 14, 10, 14, 10];

/// Column headings, in table order.
const COLUMN_HEADINGS: [&str; 6] = ["Label", "TrueVal", "SeenSum", "SeenMod", "GuessResid", "Guess"];

/// Width of the separator line closing each trial block.
const SEPARATOR_WIDTH: usize = 60;

/// Renders one trial as a header, a row table and a verdict line.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrialReporter;

impl TrialReporter {
    /// Create a new reporter.
    pub fn new() -> Self {
        Self
    }

    /// Write the full block for one trial.
    pub fn write_trial<W: Write + ?Sized>(
        &self,
        out: &mut W,
        number: TrialNumber,
        trial: &Trial,
    ) -> io::Result<()> {
        self.write_header(out, number, trial)?;
        self.write_table(out, trial)?;
        self.write_verdict(out, trial)?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    fn write_header<W: Write + ?Sized>(
        &self,
        out: &mut W,
        number: TrialNumber,
        trial: &Trial,
    ) -> io::Result<()> {
        let n = trial.participants();
        writeln!(out, "=== Trial {} (N={}) ===", number, n)?;
        writeln!(out, "Actual head numbers: {}", join(trial.actuals()))?;
        writeln!(out, "Residues (N->0):     {}", join(trial.residues()))?;
        writeln!(out, "Total residue T mod {} = {}", n, trial.total_residue())?;
        writeln!(out)
    }

    fn write_table<W: Write + ?Sized>(&self, out: &mut W, trial: &Trial) -> io::Result<()> {
        for (heading, width) in COLUMN_HEADINGS.iter().zip(COLUMN_WIDTHS) {
            write!(out, "{:<width$}", heading, width = width)?;
        }
        writeln!(out, "Correct?")?;

        for row in trial.rows() {
            write_row(out, row)?;
        }
        Ok(())
    }

    fn write_verdict<W: Write + ?Sized>(&self, out: &mut W, trial: &Trial) -> io::Result<()> {
        let verdict = if trial.any_correct() {
            "YES!! :D "
        } else {
            "NO but this answer will never be seen !"
        };
        writeln!(out)?;
        writeln!(
            out,
            "At least one correct? {}   (count = {})",
            verdict,
            trial.correct_count()
        )
    }
}

fn write_row<W: Write + ?Sized>(out: &mut W, row: &Row) -> io::Result<()> {
    let [w_label, w_actual, w_seen, w_mod, w_resid, w_guess] = COLUMN_WIDTHS;
    writeln!(
        out,
        "{:<w_label$}{:<w_actual$}{:<w_seen$}{:<w_mod$}{:<w_resid$}{:<w_guess$}{}",
        row.label,
        row.actual,
        row.seen_sum,
        row.seen_mod,
        row.guess_resid,
        row.guess,
        if row.correct { "YES" } else { "no" },
    )
}

fn join(values: impl IntoIterator<Item = u64>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
