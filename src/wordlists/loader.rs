//! Word list loading and normalization
//!
//! Raw dictionaries are messy: mixed case, punctuation, words of every
//! length. Normalization keeps only the entries usable for the current game
//! and renders them canonical.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize a raw word collection against the game length
///
/// Keeps only entries that consist of ASCII letters and have exactly
/// `length` characters after trimming surrounding whitespace; survivors are
/// uppercased. Everything else is silently dropped — this is a filtering
/// step, not a validating one. Input order is preserved among survivors, and
/// an empty result is valid.
///
/// # Examples
/// ```
/// use word_solver::wordlists::loader::normalize;
///
/// let words = normalize(["crane", "ab'c", "toolong", "slate"], 5);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["CRANE", "SLATE"]);
/// ```
pub fn normalize<I, S>(raw: I, length: usize) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|entry| Word::new(entry.as_ref().trim(), length).ok())
        .collect()
}

/// Load and normalize words from a newline-separated dictionary file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened. Unusable lines
/// are dropped, not reported.
///
/// # Examples
/// ```no_run
/// use word_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize(content.lines(), length))
}

/// Normalize an embedded string slice
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    normalize(slice.iter().copied(), length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_survivors() {
        let words = normalize(["abc", "aBc"], 3);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ABC", "ABC"]);
    }

    #[test]
    fn normalize_drops_special_characters() {
        let words = normalize(["ab'c", "aB_c", "abc"], 3);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ABC"]);
    }

    #[test]
    fn normalize_drops_wrong_length() {
        let words = normalize(["ab", "abc", "abcd"], 3);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ABC"]);
    }

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        let words = normalize(["  abc ", "abc\r"], 3);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ABC", "ABC"]);
    }

    #[test]
    fn normalize_preserves_input_order() {
        let words = normalize(["zebra", "x", "apple", "12345", "mango"], 5);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ZEBRA", "APPLE", "MANGO"]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(["Crane", "slate", "ab", "ir@te"], 5);
        let texts: Vec<String> = once.iter().map(|w| w.text().to_string()).collect();
        let twice = normalize(texts.iter().map(String::as_str), 5);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_empty_input_is_valid() {
        let words = normalize(std::iter::empty::<&str>(), 5);
        assert!(words.is_empty());
    }

    #[test]
    fn normalize_can_drop_everything() {
        let words = normalize(["1", "two!", "thr33"], 5);
        assert!(words.is_empty());
    }

    #[test]
    fn words_from_slice_matches_normalize() {
        let slice = &["crane", "bad!!", "slate"];
        assert_eq!(words_from_slice(slice, 5), normalize(slice.iter(), 5));
    }

    #[test]
    fn load_from_file_missing_path_is_an_error() {
        let result = load_from_file("definitely/not/a/real/path.txt", 5);
        assert!(result.is_err());
    }
}
