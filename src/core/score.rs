//! Mastermind score calculation and representation
//!
//! A score is the pair of peg counts a code-maker hands back for a guess:
//! - exact: right symbol in the right position (black peg)
//! - partial: right symbol in the wrong position (white peg)
//!
//! It is written as `"<exact>-<partial>"`, e.g. `2-1`.

use super::Code;
use crate::error::ScoreError;
use std::fmt;

/// Feedback for one guess against one solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    exact: usize,
    partial: usize,
}

impl Score {
    /// No matches at all
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a score from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Symbols in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Symbols present elsewhere in the solution
    #[inline]
    #[must_use]
    pub const fn partial(self) -> usize {
        self.partial
    }

    /// Total matched symbols, `exact + partial`
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.partial
    }

    /// Guess positions that matched nothing, for a code of length `len`
    #[inline]
    #[must_use]
    pub const fn misses(self, len: usize) -> usize {
        len.saturating_sub(self.total())
    }

    /// Check if every position matched exactly
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, len: usize) -> bool {
        self.exact == len && self.partial == 0
    }

    /// Calculate the score when `guess` is played against `solution`
    ///
    /// Duplicate symbols are handled by consumption marking: each guess
    /// position and each solution position is credited at most once.
    ///
    /// # Algorithm
    /// 1. Exact pass: equal symbols at equal positions consume both positions
    /// 2. Partial pass: each unconsumed guess symbol consumes the lowest-index
    ///    unconsumed solution position holding the same symbol
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_score::core::{Code, Score};
    ///
    /// let guess = Code::new("1532");
    /// let solution = Code::new("1234");
    /// let score = Score::calculate(&guess, &solution).unwrap();
    ///
    /// // 1 and 3 are in place, 2 is present but misplaced
    /// assert_eq!(score, Score::new(2, 1));
    /// assert_eq!(score.to_string(), "2-1");
    /// ```
    pub fn calculate(guess: &Code, solution: &Code) -> Result<Self, ScoreError> {
        let guess = guess.symbols();
        let solution = solution.symbols();

        if guess.len() != solution.len() {
            return Err(ScoreError::LengthMismatch {
                guess_len: guess.len(),
                solution_len: solution.len(),
            });
        }

        let mut guess_used = vec![false; guess.len()];
        let mut solution_used = vec![false; solution.len()];
        let mut exact = 0;
        let mut partial = 0;

        // First pass: exact position matches
        for (i, (g, s)) in guess.iter().zip(solution).enumerate() {
            if g == s {
                exact += 1;
                guess_used[i] = true;
                solution_used[i] = true;
            }
        }

        // Second pass: lowest unconsumed solution position with the same symbol
        for (i, g) in guess.iter().enumerate() {
            if guess_used[i] {
                continue;
            }

            let found = solution
                .iter()
                .zip(solution_used.iter_mut())
                .find(|(s, used)| !**used && *s == g);

            if let Some((_, used)) = found {
                *used = true;
                partial += 1;
            }
        }

        Ok(Self { exact, partial })
    }

    /// Parse a score from a string like `"2-1"`
    ///
    /// # Examples
    /// ```
    /// use mastermind_score::core::Score;
    ///
    /// assert_eq!(Score::parse("0-1"), Some(Score::new(0, 1)));
    /// assert_eq!(Score::parse("2 1"), None);
    /// assert_eq!(Score::parse("+1-+2"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (exact, partial) = s.trim().split_once('-')?;
        Some(Self {
            exact: parse_count(exact)?,
            partial: parse_count(partial)?,
        })
    }
}

/// Digits only: `usize::from_str` alone would also take a leading '+'
fn parse_count(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Score `guess` against `solution`, returning the `"x-y"` text
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the codes differ in length.
///
/// # Examples
/// ```
/// use mastermind_score::core::check_guess;
///
/// assert_eq!(check_guess("1532", "1234").unwrap(), "2-1");
/// assert_eq!(check_guess("8793", "1234").unwrap(), "0-1");
/// ```
pub fn check_guess(guess: &str, solution: &str) -> Result<String, ScoreError> {
    Score::calculate(&Code::new(guess), &Code::new(solution)).map(|score| score.to_string())
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.exact, self.partial)
    }
}

impl std::str::FromStr for Score {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ScoreError::InvalidScore(s.to_string()))
    }
}
