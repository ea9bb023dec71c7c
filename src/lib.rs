//! Word Solver
//!
//! An interactive solver for fixed-length word-guessing games: it narrows a
//! set of remaining candidate solutions from guess scores and suggests the
//! guess whose worst-case outcome leaves the fewest candidates (minimax).
//!
//! # Quick Start
//!
//! ```rust
//! use word_solver::core::{Score, Word};
//! use word_solver::solver::Game;
//! use word_solver::wordlists::normalize;
//!
//! let words = normalize(["abc", "acb", "ead"], 3);
//! let mut game = Game::from_universe(3, words);
//!
//! // Best discriminators first.
//! let suggestions = game.suggestions();
//! assert_eq!(suggestions.len(), game.universe().len());
//!
//! // Narrow with an observed score: AEF scored "H.." (A hit, E and F absent).
//! let guess = Word::new("aef", 3).unwrap();
//! game.apply_score(&guess, &Score::from_loose("H..")).unwrap();
//! assert_eq!(game.remaining_count(), 2);
//! ```

// Core domain types
pub mod core;

// Candidate tracking and guess ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
