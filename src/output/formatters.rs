//! Formatting utilities for terminal output

use crate::solver::RankedGuess;

/// Format one row of the suggestion table
///
/// `rank` is 1-based; the worst-case column is right-aligned.
#[must_use]
pub fn suggestion_row(rank: usize, suggestion: &RankedGuess) -> String {
    format!(
        "{rank:>4}  {:<12} {:>10}",
        suggestion.word.text(),
        suggestion.worst_case
    )
}

/// Header row matching [`suggestion_row`] alignment
#[must_use]
pub fn suggestion_header() -> String {
    format!("{:>4}  {:<12} {:>10}", "#", "Word", "Worst case")
}

/// Comma-separated preview of words, capped at `limit`
#[must_use]
pub fn word_list_preview(words: &[crate::core::Word], limit: usize) -> String {
    let mut preview: Vec<&str> = words.iter().take(limit).map(|w| w.text()).collect();
    if words.len() > limit {
        preview.push("...");
    }
    preview.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn suggestion_row_aligns_columns() {
        let suggestion = RankedGuess {
            word: Word::new("abc", 3).unwrap(),
            worst_case: 1,
        };
        let row = suggestion_row(1, &suggestion);
        assert!(row.starts_with("   1  ABC"));
        assert!(row.ends_with(" 1"));
        assert_eq!(row.len(), 29);
    }

    #[test]
    fn suggestion_header_matches_row_width() {
        let suggestion = RankedGuess {
            word: Word::new("abc", 3).unwrap(),
            worst_case: 1,
        };
        assert_eq!(
            suggestion_header().len(),
            suggestion_row(1, &suggestion).len()
        );
    }

    #[test]
    fn word_list_preview_caps_output() {
        let words: Vec<Word> = ["abc", "acb", "ead"]
            .iter()
            .map(|t| Word::new(t, 3).unwrap())
            .collect();

        assert_eq!(word_list_preview(&words, 5), "ABC, ACB, EAD");
        assert_eq!(word_list_preview(&words, 2), "ABC, ACB, ...");
    }

    #[test]
    fn word_list_preview_empty() {
        assert_eq!(word_list_preview(&[], 5), "");
    }
}
