//! Guess scoring and feedback representation
//!
//! A score is the per-position feedback for a guess against a solution:
//! Hit (right letter, right position), Present (letter occurs elsewhere in
//! the solution), or Miss (letter does not occur). Canonical text rendering
//! is `H` / `h` / `.`, one character per position, in guess order.

use super::Word;
use std::fmt;

/// Per-position feedback for a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter matches the solution at this position
    Hit,
    /// Letter occurs in the solution, but not at this position
    Present,
    /// Letter does not occur in the solution
    Miss,
}

impl Mark {
    /// Canonical character for this mark
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Hit => 'H',
            Self::Present => 'h',
            Self::Miss => '.',
        }
    }

    /// Normalize one character of loose user input
    ///
    /// Any uppercase letter means Hit, any lowercase letter means Present,
    /// everything else (punctuation, digits, placeholders) means Miss.
    #[inline]
    #[must_use]
    pub fn from_loose(c: char) -> Self {
        if c.is_uppercase() {
            Self::Hit
        } else if c.is_lowercase() {
            Self::Present
        } else {
            Self::Miss
        }
    }
}

/// Feedback pattern for a guess: one [`Mark`] per position, in guess order
///
/// A Score is a derived, stateless value; it is `Eq + Hash` so the ranker can
/// use it as a partition-bucket key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score {
    marks: Vec<Mark>,
}

/// Error type for scoring precondition violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    LengthMismatch { guess: usize, solution: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, solution } => write!(
                f,
                "Cannot score a {guess}-letter guess against a {solution}-letter solution"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

impl Score {
    /// Score a guess against a hypothetical solution
    ///
    /// Position by position: an exact match is a Hit; otherwise a letter that
    /// occurs anywhere in the solution is Present; otherwise a Miss. Present
    /// uses simple membership, not count-aware multiset exclusion — a letter
    /// repeated in the guess can be marked Present at every occurrence even
    /// when the solution holds it only once.
    ///
    /// # Errors
    /// Returns [`ScoreError::LengthMismatch`] if the two words differ in
    /// length. This is a contract violation on the caller's side, not a
    /// recoverable input.
    ///
    /// # Examples
    /// ```
    /// use word_solver::core::{Score, Word};
    ///
    /// let guess = Word::new("abc", 3).unwrap();
    /// let solution = Word::new("cbe", 3).unwrap();
    /// let score = Score::of(&guess, &solution).unwrap();
    /// assert_eq!(score.to_string(), ".Hh");
    /// ```
    pub fn of(guess: &Word, solution: &Word) -> Result<Self, ScoreError> {
        if guess.len() != solution.len() {
            return Err(ScoreError::LengthMismatch {
                guess: guess.len(),
                solution: solution.len(),
            });
        }
        Ok(Self::between(guess, solution))
    }

    /// Score two words of equal length
    ///
    /// Callers uphold the uniform-length invariant; the game state and ranker
    /// only hold words of the game length.
    pub(crate) fn between(guess: &Word, solution: &Word) -> Self {
        debug_assert_eq!(guess.len(), solution.len());

        let solution_bytes = solution.as_bytes();
        guess
            .as_bytes()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                if solution_bytes[i] == letter {
                    Mark::Hit
                } else if solution.contains(letter) {
                    Mark::Present
                } else {
                    Mark::Miss
                }
            })
            .collect()
    }

    /// Normalize a loose user-entered feedback string
    ///
    /// Applies [`Mark::from_loose`] per character, so any input of the right
    /// length becomes a canonical score. Infallible by construction.
    ///
    /// # Examples
    /// ```
    /// use word_solver::core::Score;
    ///
    /// assert_eq!(Score::from_loose(".aB").to_string(), ".hH");
    /// assert_eq!(Score::from_loose("*aB").to_string(), ".hH");
    /// ```
    #[must_use]
    pub fn from_loose(raw: &str) -> Self {
        raw.chars().map(Mark::from_loose).collect()
    }

    /// The marks, one per position in guess order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True for the zero-length score
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check whether every position is a Hit (the guess IS the solution)
    #[inline]
    #[must_use]
    pub fn is_all_hits(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Hit)
    }
}

impl FromIterator<Mark> for Score {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        Self {
            marks: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}
