//! Word list loading for the solver
//!
//! Dictionaries are plain newline-separated text files supplied at startup;
//! the loader normalizes them against the game's word length.

pub mod loader;

pub use loader::{load_from_file, normalize};
