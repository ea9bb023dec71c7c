//! Core domain types for the word-guessing engine
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod score;
mod word;

pub use score::{Mark, Score, ScoreError};
pub use word::{Word, WordError};
