//! Game state: the word universe and the shrinking candidate set

use super::ranker::{self, RankedGuess};
use crate::core::{Score, ScoreError, Word};

/// State of one solving session
///
/// Owns the immutable Word Universe (every legal guess) and the Candidate Set
/// (words still consistent with all feedback so far). Both are plain owned
/// collections with single-owner semantics; nothing aliases across instances.
/// All words share one fixed length for the lifetime of the game.
#[derive(Debug, Clone)]
pub struct Game {
    length: usize,
    universe: Vec<Word>,
    initial: Vec<Word>,
    candidates: Vec<Word>,
}

impl Game {
    /// Create a game from separate universe and candidate lists
    ///
    /// The universe defines which words may be guessed; the candidates are
    /// the plausible solutions, which may equal or be a subset of the
    /// universe. Both lists must already be normalized to `length`.
    #[must_use]
    pub fn new(length: usize, universe: Vec<Word>, candidates: Vec<Word>) -> Self {
        debug_assert!(
            universe
                .iter()
                .chain(candidates.iter())
                .all(|w| w.len() == length),
            "all game words must have the game length"
        );

        Self {
            length,
            universe,
            initial: candidates.clone(),
            candidates,
        }
    }

    /// Create a game where every word in the universe is a plausible solution
    #[must_use]
    pub fn from_universe(length: usize, universe: Vec<Word>) -> Self {
        let candidates = universe.clone();
        Self::new(length, universe, candidates)
    }

    /// The fixed word length for this game
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Every word that may be guessed
    #[inline]
    #[must_use]
    pub fn universe(&self) -> &[Word] {
        &self.universe
    }

    /// The words still consistent with all feedback so far
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    /// The solved word, if exactly one candidate remains
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        match self.candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// True when no candidate is consistent with the feedback history
    ///
    /// A terminal state distinct from solved; it usually means a mistyped
    /// score somewhere along the way.
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Narrow the candidate set with one guess/score observation
    ///
    /// Replaces the candidate set with exactly those words that would have
    /// produced `score` for `guess`. The result can only shrink, retained
    /// words keep their prior order, and an empty result is a legitimate
    /// terminal state rather than an error.
    ///
    /// # Errors
    /// Returns [`ScoreError::LengthMismatch`] if the guess or the score does
    /// not have the game length. The candidate set is untouched in that case.
    pub fn apply_score(&mut self, guess: &Word, score: &Score) -> Result<(), ScoreError> {
        if guess.len() != self.length {
            return Err(ScoreError::LengthMismatch {
                guess: guess.len(),
                solution: self.length,
            });
        }
        if score.len() != self.length {
            return Err(ScoreError::LengthMismatch {
                guess: score.len(),
                solution: self.length,
            });
        }

        let prior = std::mem::take(&mut self.candidates);
        self.candidates = prior
            .into_iter()
            .filter(|candidate| Score::between(guess, candidate) == *score)
            .collect();
        Ok(())
    }

    /// Rank every universe word by how well it splits the remaining candidates
    ///
    /// Best discriminator first; see [`ranker::rank_guesses`].
    #[must_use]
    pub fn suggestions(&self) -> Vec<RankedGuess> {
        ranker::rank_guesses(&self.universe, &self.candidates)
    }

    /// Restore the candidate set to its initial state
    pub fn reset(&mut self) {
        self.candidates = self.initial.clone();
    }
}
