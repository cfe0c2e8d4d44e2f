//! Scoring a list of guesses against one solution

use super::execution::{BatchScorer, SequentialScorer};
use crate::core::{Code, Score};
use crate::error::ScoreError;
use tracing::{debug, info};

/// Score every guess against `solution`, one after another
///
/// Output has the same length and order as `guesses`.
///
/// # Errors
/// Returns `ScoreError::GuessLength` naming the first guess whose length
/// differs from the solution. No scores are returned in that case.
///
/// # Examples
/// ```
/// use mastermind_score::core::{Code, Score};
/// use mastermind_score::scoring::score_all;
///
/// let solution = Code::new("1234");
/// let guesses = [Code::new("1532"), Code::new("8793")];
///
/// let scores = score_all(&solution, &guesses).unwrap();
/// assert_eq!(scores, vec![Score::new(2, 1), Score::new(0, 1)]);
/// ```
pub fn score_all(solution: &Code, guesses: &[Code]) -> Result<Vec<Score>, ScoreError> {
    score_all_with(&SequentialScorer, solution, guesses)
}

/// Score every guess against `solution` with the given batch scorer
///
/// # Errors
/// Returns `ScoreError::GuessLength` naming the first guess whose length
/// differs from the solution.
pub fn score_all_with<B: BatchScorer>(
    scorer: &B,
    solution: &Code,
    guesses: &[Code],
) -> Result<Vec<Score>, ScoreError> {
    check_lengths(solution, guesses)?;

    let scores = scorer.score_batch(solution, guesses)?;

    for (guess, score) in guesses.iter().zip(&scores) {
        debug!(guess = guess.text(), %score, "scored guess");
    }
    info!(
        solution_len = solution.len(),
        guesses = guesses.len(),
        "batch scored"
    );

    Ok(scores)
}

/// Score guess strings against a solution string, returning `"x-y"` texts
///
/// # Errors
/// Returns `ScoreError::GuessLength` naming the first guess whose length
/// differs from the solution.
///
/// # Examples
/// ```
/// use mastermind_score::scoring::process_input;
///
/// let results = process_input("1234", &["1532", "8793"]).unwrap();
/// assert_eq!(results, vec!["2-1", "0-1"]);
/// ```
pub fn process_input<S: AsRef<str>>(
    solution: &str,
    guesses: &[S],
) -> Result<Vec<String>, ScoreError> {
    let solution = Code::new(solution);
    let guesses: Vec<Code> = guesses.iter().map(|g| Code::new(g.as_ref())).collect();

    Ok(score_all(&solution, &guesses)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

/// Reject the batch on the first guess whose length differs from the solution
fn check_lengths(solution: &Code, guesses: &[Code]) -> Result<(), ScoreError> {
    let offending = guesses
        .iter()
        .enumerate()
        .find(|(_, guess)| guess.len() != solution.len());

    match offending {
        Some((index, guess)) => Err(ScoreError::GuessLength {
            position: index + 1,
            guess: guess.text().to_string(),
            guess_len: guess.len(),
            solution_len: solution.len(),
        }),
        None => Ok(()),
    }
}
