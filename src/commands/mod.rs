//! Command implementations

pub mod score;

pub use score::{ScoreConfig, ScoreReport, run_score};
