//! Display functions for command results

use super::formatters::{ratio_bar, ratio_verdict};
use crate::commands::{BestResult, RoundError, RoundResult};
use colored::Colorize;
use std::io::{self, Write};

/// Write the result of a completed round
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_round_result<W: Write>(out: &mut W, result: &RoundResult) -> io::Result<()> {
    writeln!(
        out,
        "Word chosen: {} (value: {})",
        result.player.word.bright_white().bold(),
        result.player.score
    )?;
    writeln!(
        out,
        "Optimal word possible: {} (value: {})",
        result.optimal.word.bright_yellow().bold(),
        result.optimal.score
    )?;
    writeln!(
        out,
        "You scored: {} [{}] {}",
        format!("{:.1}", result.ratio).bright_cyan().bold(),
        ratio_bar(result.ratio, 20).green(),
        ratio_verdict(result.ratio)
    )
}

/// Write why a round could not be scored
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_round_error<W: Write>(out: &mut W, error: &RoundError) -> io::Result<()> {
    match error {
        RoundError::Invalid(_) => writeln!(out, "{}", error.to_string().red()),
        RoundError::Engine(_) => writeln!(out, "{} {}", "Round aborted:".red().bold(), error),
    }
}

/// Write the result of an optimal-word search
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_best_result<W: Write>(out: &mut W, result: &BestResult) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(out, "Letters: {}", result.letters.to_string().bright_white().bold())?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    writeln!(
        out,
        "\nOptimal word possible: {} (value: {})",
        result.best.word.bright_yellow().bold(),
        result.best.score
    )?;
    writeln!(out, "Arrangements searched: {}", result.candidates)?;

    if !result.words.is_empty() {
        writeln!(out, "\n{} ({}):", "Valid words".bright_cyan().bold(), result.words.len())?;
        for word in &result.words {
            writeln!(out, "  {:>3}  {}", word.score, word.word)?;
        }
    }
    Ok(())
}
