//! Core domain types for Mastermind scoring
//!
//! This module contains the fundamental domain types. Everything here is
//! pure and stateless: a comparison never depends on a previous one.

mod code;
mod score;

pub use code::Code;
pub use score::{Score, check_guess};
