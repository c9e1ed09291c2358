//! Main filter entry point

use super::grouping::{LetterGroup, group_alphabetically};
use super::request::FilterRequest;
use crate::core::Word;

/// Outcome of one filter invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterResult {
    /// Constraints were supplied; matching words in corpus order (may be empty)
    Matches {
        words: Vec<Word>,
        corpus_size: usize,
    },
    /// No constraints were supplied; the whole corpus grouped by first letter
    Grouped {
        groups: Vec<LetterGroup>,
        corpus_size: usize,
    },
}

impl FilterResult {
    /// Total number of words in the filtered corpus
    #[must_use]
    pub const fn corpus_size(&self) -> usize {
        match self {
            Self::Matches { corpus_size, .. } | Self::Grouped { corpus_size, .. } => *corpus_size,
        }
    }

    /// Number of words listed in the result
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Matches { words, .. } => words.len(),
            Self::Grouped { groups, .. } => groups.iter().map(|g| g.words.len()).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for the no-constraint fallback listing
    #[must_use]
    pub const fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped { .. })
    }
}

/// Filter a corpus by the three raw constraint strings
///
/// If all three strings are blank the corpus is returned grouped
/// alphabetically. Otherwise the constraints are compiled once and every
/// word is checked in corpus order; matches keep that order.
///
/// # Examples
/// ```
/// use wordle_filter::core::Word;
/// use wordle_filter::filter::{FilterResult, filter};
///
/// let corpus: Vec<Word> = ["crane", "crate", "grape"].into_iter().map(Word::new).collect();
/// let result = filter(&corpus, "_ r a t e", "", "");
///
/// let FilterResult::Matches { words, corpus_size } = result else {
///     panic!("expected matches");
/// };
/// assert_eq!(corpus_size, 3);
/// assert_eq!(words, [Word::new("crate")]);
/// ```
#[must_use]
pub fn filter(corpus: &[Word], pattern: &str, loose: &str, exclude: &str) -> FilterResult {
    let corpus_size = corpus.len();

    if pattern.trim().is_empty() && loose.trim().is_empty() && exclude.trim().is_empty() {
        log::debug!("no constraints, grouping {corpus_size} words");
        return FilterResult::Grouped {
            groups: group_alphabetically(corpus),
            corpus_size,
        };
    }

    let request = FilterRequest::parse(pattern, loose, exclude);
    let words = filter_with(corpus, &request);

    log::debug!(
        "pattern '{}' ({} slots), {} loose, {} excluded: {}/{corpus_size} match",
        request.pattern(),
        request.word_len(),
        request.loose().len(),
        request.excluded().len(),
        words.len()
    );

    FilterResult::Matches { words, corpus_size }
}

/// Apply a compiled request to a corpus, keeping corpus order
#[must_use]
pub fn filter_with(corpus: &[Word], request: &FilterRequest) -> Vec<Word> {
    corpus
        .iter()
        .filter(|word| request.matches(word))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t)).collect()
    }

    fn matched(result: &FilterResult) -> Vec<&str> {
        match result {
            FilterResult::Matches { words, .. } => words.iter().map(Word::text).collect(),
            FilterResult::Grouped { .. } => panic!("expected matches, got grouped"),
        }
    }

    #[test]
    fn no_constraints_groups_corpus() {
        let words = corpus(&["apple", "banana", "cherry", "avocado"]);
        let result = filter(&words, "", "", "");

        let FilterResult::Grouped {
            groups,
            corpus_size,
        } = &result
        else {
            panic!("expected grouped fallback");
        };
        assert_eq!(*corpus_size, 4);
        let keys: Vec<char> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, ['A', 'B', 'C']);
        assert_eq!(groups[0].words, corpus(&["apple", "avocado"]));
        assert_eq!(result.len(), 4);
        assert!(result.is_grouped());
    }

    #[test]
    fn whitespace_only_inputs_count_as_empty() {
        let words = corpus(&["crane"]);
        assert!(filter(&words, "  ", "\t", " ").is_grouped());
    }

    #[test]
    fn wildcard_positions_accept_all() {
        let words = corpus(&["crane", "crate", "grape", "brake", "drape"]);
        let result = filter(&words, "_ r a _ e", "", "");
        assert_eq!(matched(&result), ["crane", "crate", "grape", "brake", "drape"]);
    }

    #[test]
    fn full_pattern_narrows_to_one() {
        let words = corpus(&["crane", "crate", "grape", "brake", "drape"]);
        let result = filter(&words, "_ r a t e", "", "");
        assert_eq!(matched(&result), ["crate"]);
        assert_eq!(result.corpus_size(), 5);
    }

    #[test]
    fn loose_letter_forbidden_position() {
        let words = corpus(&["grape", "crane", "bread"]);
        let result = filter(&words, "_____", "a(3)", "");
        assert_eq!(matched(&result), ["bread"]);
    }

    #[test]
    fn exclusion_removes_words() {
        let words = corpus(&["crane", "grape"]);
        let result = filter(&words, "_____", "", "g");
        assert_eq!(matched(&result), ["crane"]);
    }

    #[test]
    fn exclusion_without_pattern_matches_nothing() {
        // zero-length pattern rejects every real word
        let words = corpus(&["crane", "grape"]);
        let result = filter(&words, "", "", "g");
        assert!(!result.is_grouped());
        assert!(result.is_empty());
        assert_eq!(result.corpus_size(), 2);
    }

    #[test]
    fn combined_constraints() {
        let words = corpus(&[
            "stare", "share", "shake", "snake", "slate", "spare", "shape", "crane",
        ]);
        // s fixed first, e fixed last; a must appear but not 3rd; no r, no l
        let result = filter(&words, "s _ _ _ e", "a(3)", "r, l");
        assert!(matched(&result).is_empty());

        let result = filter(&words, "s _ _ _ e", "h(3) a(1)", "r l");
        assert_eq!(matched(&result), ["shake", "shape"]);
    }

    #[test]
    fn preserves_corpus_order() {
        let words = corpus(&["zesty", "apple", "mango", "adapt"]);
        let result = filter(&words, "_____", "a(5)", "");
        assert_eq!(matched(&result), ["apple", "mango", "adapt"]);
    }

    #[test]
    fn longer_words_with_longer_pattern() {
        let words = corpus(&["planet", "plants", "planes", "crane"]);
        let result = filter(&words, "p l a n _ _", "", "s");
        assert_eq!(matched(&result), ["planet"]);
    }

    #[test]
    fn empty_corpus_yields_empty_matches() {
        let result = filter(&[], "_____", "", "");
        assert!(result.is_empty());
        assert_eq!(result.corpus_size(), 0);
        assert!(!result.is_grouped());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let words = corpus(&["crane", "crate", "grape", "brake", "drape"]);
        let first = filter(&words, "_ r a _ e", "e(1) c(2)", "b");
        let second = filter(&words, "_ r a _ e", "e(1) c(2)", "b");
        assert_eq!(first, second);
        assert_eq!(matched(&first), ["crane", "crate"]);
    }

    #[test]
    fn filter_with_reuses_request() {
        let words = corpus(&["crane", "grape"]);
        let request = FilterRequest::parse("_ r a _ e", "", "g");
        assert_eq!(filter_with(&words, &request), corpus(&["crane"]));
    }
}
