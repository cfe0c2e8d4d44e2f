//! Display functions for command results

use super::formatters::{format_scores, score_to_pegs};
use crate::commands::ScoreReport;
use colored::Colorize;

/// Print the scores on one line, e.g. `2-1 0-1`
pub fn print_scores(report: &ScoreReport) {
    println!("{}", format_scores(&report.scores));
}

/// Print a colored per-guess breakdown of the report
pub fn print_pretty_report(report: &ScoreReport) {
    let len = report.solution.len();

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Solution: {}  ({} symbols, {} guesses)",
        report.solution.text().bright_yellow().bold(),
        len,
        report.guesses.len()
    );
    println!("{}", "─".repeat(40).cyan());

    for (i, (guess, score)) in report.entries().enumerate() {
        let label = format!("{score}");
        let label = if score.is_perfect(len) {
            label.green().bold()
        } else if score.total() == 0 {
            label.bright_black()
        } else {
            label.yellow()
        };

        println!(
            "{:>3}. {}  {}  {}",
            i + 1,
            guess.text(),
            label,
            score_to_pegs(score, len)
        );
    }
}
