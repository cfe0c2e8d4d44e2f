//! Score command
//!
//! Validates an invocation and scores its guesses against the solution.

use crate::core::{Code, Score};
use crate::error::ScoreError;
use crate::scoring::{Execution, score_all_with};
use tracing::debug;

/// Configuration for one scoring run
pub struct ScoreConfig {
    pub solution: String,
    pub expected_guesses: usize,
    pub guesses: Vec<String>,
    pub execution: Execution,
}

impl ScoreConfig {
    #[must_use]
    pub const fn new(solution: String, expected_guesses: usize, guesses: Vec<String>) -> Self {
        Self {
            solution,
            expected_guesses,
            guesses,
            execution: Execution::Sequential,
        }
    }

    #[must_use]
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Check that the declared guess count matches the guesses supplied
    ///
    /// # Errors
    /// Returns `ScoreError::GuessCountMismatch` when they differ.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.guesses.len() == self.expected_guesses {
            Ok(())
        } else {
            Err(ScoreError::GuessCountMismatch {
                expected: self.expected_guesses,
                received: self.guesses.len(),
            })
        }
    }
}

/// Result of a scoring run
pub struct ScoreReport {
    pub solution: Code,
    pub guesses: Vec<Code>,
    pub scores: Vec<Score>,
}

impl ScoreReport {
    /// Guesses paired with their scores, in input order
    pub fn entries(&self) -> impl Iterator<Item = (&Code, Score)> {
        self.guesses.iter().zip(self.scores.iter().copied())
    }
}

/// Validate the config and score every guess
///
/// # Errors
///
/// Returns an error if:
/// - The number of guesses differs from the declared count
/// - A guess differs in length from the solution
pub fn run_score(config: ScoreConfig) -> Result<ScoreReport, ScoreError> {
    config.validate()?;

    debug!(
        solution = %config.solution,
        guesses = config.guesses.len(),
        execution = %config.execution,
        "scoring"
    );

    let solution = Code::new(config.solution);
    let guesses: Vec<Code> = config.guesses.into_iter().map(Code::new).collect();
    let scores = score_all_with(&config.execution, &solution, &guesses)?;

    Ok(ScoreReport {
        solution,
        guesses,
        scores,
    })
}
