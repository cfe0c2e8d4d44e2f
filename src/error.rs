//! Error types for scoring

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    // Comparison errors
    #[error("Guess has {guess_len} symbols but the solution has {solution_len}")]
    LengthMismatch {
        guess_len: usize,
        solution_len: usize,
    },

    #[error(
        "Guess {position} ('{guess}') has {guess_len} symbols but the solution has {solution_len}"
    )]
    GuessLength {
        position: usize,
        guess: String,
        guess_len: usize,
        solution_len: usize,
    },

    // User errors
    #[error("Expected {expected} guesses but received {received}.")]
    GuessCountMismatch { expected: usize, received: usize },

    #[error("Invalid score string: {0}")]
    InvalidScore(String),

    #[error("Unknown execution mode '{0}' (expected 'sequential' or 'parallel')")]
    UnknownExecution(String),
}
