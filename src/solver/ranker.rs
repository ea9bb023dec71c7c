//! Worst-case (minimax) guess ranking
//!
//! A guess is good precisely when even its worst-case outcome leaves the
//! fewest remaining candidates. For each guess the candidate set is
//! partitioned into buckets keyed by the score each candidate would produce;
//! the guess's figure of merit is the size of the largest bucket.

use crate::core::{Score, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// A guess word paired with its worst-case discrimination score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGuess {
    pub word: Word,
    pub worst_case: usize,
}

/// Worst-case remaining candidates if `guess` is played
///
/// Partitions `candidates` by the score each would produce for `guess` and
/// returns the size of the largest bucket. Zero for an empty candidate set.
///
/// # Examples
/// ```
/// use word_solver::core::Word;
/// use word_solver::solver::ranker::worst_case;
///
/// let guess = Word::new("abc", 3).unwrap();
/// let candidates = vec![
///     Word::new("abc", 3).unwrap(),
///     Word::new("xyz", 3).unwrap(),
/// ];
/// // ABC and XYZ produce different scores, so the largest bucket holds one.
/// assert_eq!(worst_case(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn worst_case(guess: &Word, candidates: &[Word]) -> usize {
    let mut buckets: FxHashMap<Score, usize> = FxHashMap::default();
    for candidate in candidates {
        *buckets.entry(Score::between(guess, candidate)).or_insert(0) += 1;
    }
    buckets.values().max().copied().unwrap_or(0)
}

/// Rank every universe word as a guess, best discriminator first
///
/// The ranking covers the full universe, not just the remaining candidates —
/// any legal word may be guessed even if it cannot itself be the solution.
/// Sorted by ascending worst-case bucket size, ties broken by ascending
/// lexicographic word order. Callers decide how many entries to display.
///
/// The per-guess computation is independent and runs in parallel; the final
/// sort imposes a total order, so the result is deterministic regardless of
/// scheduling.
#[must_use]
pub fn rank_guesses(universe: &[Word], candidates: &[Word]) -> Vec<RankedGuess> {
    let mut ranking: Vec<RankedGuess> = universe
        .par_iter()
        .map(|guess| RankedGuess {
            word: guess.clone(),
            worst_case: worst_case(guess, candidates),
        })
        .collect();

    ranking.sort_unstable_by(|a, b| {
        a.worst_case
            .cmp(&b.worst_case)
            .then_with(|| a.word.cmp(&b.word))
    });
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        let length = texts.first().map_or(0, |t| t.len());
        texts
            .iter()
            .map(|t| Word::new(t, length).unwrap())
            .collect()
    }

    #[test]
    fn worst_case_counts_largest_bucket() {
        let candidates = words(&["aaa", "bbb", "ccc"]);

        // XYZ scores all three candidates identically, one bucket of three.
        let blind = Word::new("xyz", 3).unwrap();
        assert_eq!(worst_case(&blind, &candidates), 3);

        // AAA separates itself from the rest.
        let sharp = Word::new("aaa", 3).unwrap();
        assert_eq!(worst_case(&sharp, &candidates), 2);
    }

    #[test]
    fn worst_case_empty_candidates_is_zero() {
        let guess = Word::new("abc", 3).unwrap();
        assert_eq!(worst_case(&guess, &[]), 0);
    }

    #[test]
    fn worst_case_single_candidate_is_one() {
        let guess = Word::new("abc", 3).unwrap();
        let candidates = words(&["ead"]);
        assert_eq!(worst_case(&guess, &candidates), 1);
    }

    #[test]
    fn ranking_best_and_worst_ends() {
        // ABC splits every candidate into its own bucket; XXX lumps three
        // candidates into one bucket because of its repeated letter.
        let universe = words(&["axy", "bxy", "cxy", "abc", "xxx"]);
        let ranking = rank_guesses(&universe, &universe);

        assert_eq!(ranking.len(), universe.len());
        assert_eq!(ranking[0].word.text(), "ABC");
        assert_eq!(ranking[0].worst_case, 1);
        assert_eq!(ranking[ranking.len() - 1].word.text(), "XXX");
        assert_eq!(ranking[ranking.len() - 1].worst_case, 3);
    }

    #[test]
    fn ranking_is_sorted_with_lexicographic_ties() {
        let universe = words(&["axy", "bxy", "cxy", "abc", "xxx"]);
        let ranking = rank_guesses(&universe, &universe);

        for pair in ranking.windows(2) {
            assert!(pair[0].worst_case <= pair[1].worst_case);
            if pair[0].worst_case == pair[1].worst_case {
                assert!(pair[0].word < pair[1].word);
            }
        }

        // AXY, BXY, and CXY all tie on worst case and sort alphabetically.
        let middle: Vec<&str> = ranking[1..4].iter().map(|r| r.word.text()).collect();
        assert_eq!(middle, vec!["AXY", "BXY", "CXY"]);
    }

    #[test]
    fn ranking_covers_words_that_cannot_be_solutions() {
        let universe = words(&["abc", "acb", "xyz"]);
        let candidates = words(&["abc", "acb"]);

        let ranking = rank_guesses(&universe, &candidates);

        assert_eq!(ranking.len(), 3);
        assert!(ranking.iter().any(|r| r.word.text() == "XYZ"));
    }

    #[test]
    fn ranking_is_deterministic() {
        let universe = words(&["axy", "bxy", "cxy", "abc", "xxx"]);
        let first = rank_guesses(&universe, &universe);
        let second = rank_guesses(&universe, &universe);
        assert_eq!(first, second);
    }

    #[test]
    fn ranking_with_no_candidates_is_all_zeros() {
        let universe = words(&["abc", "acb"]);
        let ranking = rank_guesses(&universe, &[]);

        assert!(ranking.iter().all(|r| r.worst_case == 0));
        // Ties everywhere, so the order is purely lexicographic.
        assert_eq!(ranking[0].word.text(), "ABC");
        assert_eq!(ranking[1].word.text(), "ACB");
    }
}
