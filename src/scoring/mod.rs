//! Batch scoring
//!
//! Applies the scorer to an ordered list of guesses against one solution.

mod batch;
pub mod execution;

pub use batch::{process_input, score_all, score_all_with};
pub use execution::{BatchScorer, Execution, ParallelScorer, SequentialScorer};
