//! Candidate tracking and guess ranking

pub mod game;
pub mod ranker;

pub use game::Game;
pub use ranker::{RankedGuess, rank_guesses, worst_case};
