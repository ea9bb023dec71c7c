//! Self-play simulation against a known target
//!
//! Drives the engine against its own scorer: useful for checking how many
//! turns the ranking needs on a given dictionary, and as an end-to-end
//! exercise of the scoring/filtering loop.

use crate::core::{Score, Word};
use crate::solver::Game;

/// Configuration for a simulation run
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of a simulation run
pub struct SolveOutcome {
    pub solved: bool,
    pub target: Word,
    pub steps: Vec<SolveStep>,
}

/// One guess of the simulation
pub struct SolveStep {
    pub guess: Word,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Simulate solving `config.target` with the engine's own scorer
///
/// Each turn plays the top-ranked guess, scores it against the target, and
/// narrows the game. When a single candidate remains it is guessed directly;
/// ranking carries no information at that size.
///
/// # Errors
///
/// Returns an error if the target does not normalize to a word of the game
/// length. Running out of guesses is not an error; the outcome reports it.
pub fn solve_target(config: &SolveConfig, game: &mut Game) -> Result<SolveOutcome, String> {
    let target = Word::new(config.target.trim(), game.length())
        .map_err(|e| format!("Invalid target word: {e}"))?;

    let mut steps = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = game.remaining_count();

        let Some(guess) = next_guess(game) else {
            // Candidate set exhausted: the target was not in the answer list.
            break;
        };

        let score = Score::of(&guess, &target).map_err(|e| e.to_string())?;
        let solved = score.is_all_hits();

        game.apply_score(&guess, &score).map_err(|e| e.to_string())?;

        steps.push(SolveStep {
            guess,
            score,
            candidates_before,
            candidates_after: game.remaining_count(),
        });

        if solved {
            return Ok(SolveOutcome {
                solved: true,
                target,
                steps,
            });
        }
    }

    Ok(SolveOutcome {
        solved: false,
        target,
        steps,
    })
}

/// The lone candidate if one remains, otherwise the top-ranked universe word
fn next_guess(game: &Game) -> Option<Word> {
    if let Some(solution) = game.solution() {
        return Some(solution.clone());
    }
    if game.is_exhausted() {
        return None;
    }
    game.suggestions().into_iter().next().map(|r| r.word)
}
