//! Batch execution modes
//!
//! Defines the `BatchScorer` trait and its sequential and parallel implementations.

use crate::core::{Code, Score};
use crate::error::ScoreError;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Scores a list of guesses against one solution
///
/// Implementations must return one score per guess, in input order.
pub trait BatchScorer {
    /// Score every guess against `solution`
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` for the first guess, by position,
    /// whose length differs from the solution's.
    fn score_batch(&self, solution: &Code, guesses: &[Code]) -> Result<Vec<Score>, ScoreError>;
}

/// One guess after another on the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialScorer;

impl BatchScorer for SequentialScorer {
    fn score_batch(&self, solution: &Code, guesses: &[Code]) -> Result<Vec<Score>, ScoreError> {
        guesses
            .iter()
            .map(|guess| Score::calculate(guess, solution))
            .collect()
    }
}

/// Guesses spread over the rayon pool
///
/// `collect` on an indexed parallel iterator keeps input order. Per-guess
/// results are gathered before the error check so the reported failure is
/// always the lowest-index one, same as `SequentialScorer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelScorer;

impl BatchScorer for ParallelScorer {
    fn score_batch(&self, solution: &Code, guesses: &[Code]) -> Result<Vec<Score>, ScoreError> {
        let scores: Vec<Result<Score, ScoreError>> = guesses
            .par_iter()
            .map(|guess| Score::calculate(guess, solution))
            .collect();

        scores.into_iter().collect()
    }
}

/// Enum wrapper for the execution modes
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// Reference behaviour (default)
    #[default]
    Sequential,
    /// rayon-backed, same output order
    Parallel,
}

impl BatchScorer for Execution {
    fn score_batch(&self, solution: &Code, guesses: &[Code]) -> Result<Vec<Score>, ScoreError> {
        match self {
            Self::Sequential => SequentialScorer.score_batch(solution, guesses),
            Self::Parallel => ParallelScorer.score_batch(solution, guesses),
        }
    }
}

impl Execution {
    /// Create an execution mode from its name
    ///
    /// Supported names: "sequential", "parallel"
    ///
    /// # Errors
    /// Returns `ScoreError::UnknownExecution` for any other name.
    pub fn from_name(name: &str) -> Result<Self, ScoreError> {
        match name {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            _ => Err(ScoreError::UnknownExecution(name.to_string())),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Execution {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|&t| Code::new(t)).collect()
    }

    #[test]
    fn sequential_scores_in_order() {
        let solution = Code::new("1234");
        let scores = SequentialScorer
            .score_batch(&solution, &codes(&["1532", "8793"]))
            .unwrap();
        assert_eq!(scores, vec![Score::new(2, 1), Score::new(0, 1)]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = rand::rng();
        let solution = Code::new("123456");
        let guesses: Vec<Code> = (0..2_000)
            .map(|_| {
                (0..6)
                    .map(|_| char::from(b'1' + rng.random_range(0..8u8)))
                    .collect::<String>()
                    .into()
            })
            .collect();

        let sequential = SequentialScorer.score_batch(&solution, &guesses).unwrap();
        let parallel = ParallelScorer.score_batch(&solution, &guesses).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn parallel_reports_first_failing_guess() {
        let solution = Code::new("1234");
        let guesses = codes(&["1234", "12", "4321", "123456"]);

        let err = ParallelScorer.score_batch(&solution, &guesses).unwrap_err();
        assert_eq!(
            err,
            ScoreError::LengthMismatch {
                guess_len: 2,
                solution_len: 4
            }
        );
    }

    #[test]
    fn empty_batch_is_empty() {
        let solution = Code::new("1234");
        assert!(Execution::Sequential.score_batch(&solution, &[]).unwrap().is_empty());
        assert!(Execution::Parallel.score_batch(&solution, &[]).unwrap().is_empty());
    }

    #[test]
    fn execution_from_name() {
        assert_eq!(Execution::from_name("sequential").unwrap(), Execution::Sequential);
        assert_eq!(Execution::from_name("parallel").unwrap(), Execution::Parallel);
        assert_eq!("parallel".parse::<Execution>().unwrap(), Execution::Parallel);
        assert!(Execution::from_name("par").is_err());
        assert!(Execution::from_name("Sequential").is_err());
        assert!(matches!(
            Execution::from_name("threads"),
            Err(ScoreError::UnknownExecution(name)) if name == "threads"
        ));
    }

    #[test]
    fn execution_default_and_display() {
        assert_eq!(Execution::default(), Execution::Sequential);
        assert_eq!(Execution::Parallel.to_string(), "parallel");
    }
}
