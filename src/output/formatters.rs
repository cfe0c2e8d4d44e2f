//! Formatting utilities for terminal output

use crate::core::Score;

/// Peg shown for an exact match
pub const EXACT_PEG: char = '●';
/// Peg shown for a partial match
pub const PARTIAL_PEG: char = '○';
/// Marker for a position that matched nothing
pub const MISS_PEG: char = '·';

/// Join scores as `"x-y"` texts separated by single spaces
///
/// # Examples
/// ```
/// use mastermind_score::core::Score;
/// use mastermind_score::output::formatters::format_scores;
///
/// let line = format_scores(&[Score::new(2, 1), Score::new(0, 1)]);
/// assert_eq!(line, "2-1 0-1");
/// ```
#[must_use]
pub fn format_scores(scores: &[Score]) -> String {
    scores
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a score as pegs: exact first, then partial, then misses
///
/// Pegs carry no positional meaning, as on the physical board.
#[must_use]
pub fn score_to_pegs(score: Score, len: usize) -> String {
    let mut result = String::with_capacity(len * EXACT_PEG.len_utf8());
    result.extend(std::iter::repeat_n(EXACT_PEG, score.exact()));
    result.extend(std::iter::repeat_n(PARTIAL_PEG, score.partial()));
    result.extend(std::iter::repeat_n(MISS_PEG, score.misses(len)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_scores_reference_line() {
        let line = format_scores(&[Score::new(2, 1), Score::new(0, 1)]);
        assert_eq!(line, "2-1 0-1");
    }

    #[test]
    fn format_scores_single_and_empty() {
        assert_eq!(format_scores(&[Score::new(4, 0)]), "4-0");
        assert_eq!(format_scores(&[]), "");
    }

    #[test]
    fn pegs_all_kinds() {
        assert_eq!(score_to_pegs(Score::new(2, 1), 4), "●●○·");
    }

    #[test]
    fn pegs_perfect() {
        assert_eq!(score_to_pegs(Score::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn pegs_nothing() {
        assert_eq!(score_to_pegs(Score::ZERO, 3), "···");
        assert_eq!(score_to_pegs(Score::ZERO, 0), "");
    }
}
