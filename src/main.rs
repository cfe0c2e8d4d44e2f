//! Mastermind Scorer - CLI
//!
//! Scores each guess against the solution and prints `exact-partial` pairs.

use anyhow::Result;
use clap::Parser;
use mastermind_score::{
    commands::{ScoreConfig, run_score},
    logging::{DEFAULT_LEVEL, init_logging},
    output::{print_pretty_report, print_scores},
    scoring::Execution,
};

/// Options go before the solution; from there on every argument is taken
/// as a code, including ones starting with '-'.
#[derive(Parser)]
#[command(
    name = "mastermind_score",
    about = "Score Mastermind guesses as exact-partial pairs (e.g. 1234 2 1532 8793 -> 2-1 0-1)",
    version,
    author
)]
struct Cli {
    /// The secret code every guess is scored against
    #[arg(allow_hyphen_values = true)]
    solution: String,

    /// How many guesses follow; must match the number supplied
    expected_guesses: usize,

    /// Guesses to score, in order
    #[arg(allow_hyphen_values = true)]
    guesses: Vec<String>,

    /// Execution mode: sequential (default) or parallel
    #[arg(long, default_value_t = Execution::Sequential)]
    execution: Execution,

    /// Print a colored per-guess breakdown instead of one line
    #[arg(long)]
    pretty: bool,

    /// Log filter for stderr diagnostics (overridden by RUST_LOG)
    #[arg(long, default_value = DEFAULT_LEVEL)]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = ScoreConfig::new(cli.solution, cli.expected_guesses, cli.guesses)
        .with_execution(cli.execution);
    let report = run_score(config)?;

    if cli.pretty {
        print_pretty_report(&report);
    } else {
        print_scores(&report);
    }
    Ok(())
}
