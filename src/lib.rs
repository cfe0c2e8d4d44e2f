//! Mastermind Scorer
//!
//! Scores code-breaking guesses: exact matches (right symbol, right place) and
//! partial matches (right symbol, wrong place), with duplicate symbols
//! credited at most once.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_score::core::{Code, Score};
//!
//! let guess = Code::new("1532");
//! let solution = Code::new("1234");
//!
//! let score = Score::calculate(&guess, &solution).unwrap();
//! assert_eq!(score.to_string(), "2-1");
//! ```

// Core domain types
pub mod core;

// Batch scoring
pub mod scoring;

// Command implementations
pub mod commands;

// Error types
pub mod error;

// Terminal output formatting
pub mod output;

// Logging setup
pub mod logging;
