//! Terminal output formatting
//!
//! Display utilities for scoring results.

pub mod display;
pub mod formatters;

pub use display::{print_pretty_report, print_scores};
