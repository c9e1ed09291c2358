//! Word explanation command
//!
//! Reports whether a single word passes the constraints, and which rule it
//! breaks if it does not.

use super::search::SearchConfig;
use crate::core::Word;
use crate::filter::{FilterRequest, Rejection};

/// Result of explaining a word
pub struct Explanation {
    pub word: Word,
    pub request: FilterRequest,
    pub in_corpus: bool,
    /// `Ok` when the word would be listed
    pub verdict: Result<(), Rejection>,
}

impl Explanation {
    #[must_use]
    pub const fn passes(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Explain how the constraints treat a word
///
/// With blank constraints every word passes, matching the alphabetical
/// listing.
///
/// # Errors
///
/// Returns an error if the word is empty.
pub fn explain_word(
    word: &str,
    config: &SearchConfig,
    corpus: &[Word],
) -> Result<Explanation, String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err("Word to explain must not be empty".to_string());
    }

    let word = Word::new(trimmed);
    let in_corpus = corpus.contains(&word);
    let request = config.request();

    let verdict = if config.is_blank() {
        Ok(())
    } else {
        request.evaluate(&word)
    };

    Ok(Explanation {
        word,
        request,
        in_corpus,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Vec<Word> {
        words_from_slice(&["crane", "grape", "bread"])
    }

    #[test]
    fn passing_word() {
        let config = SearchConfig::new("_____", "a(3)", "");
        let explanation = explain_word("BREAD", &config, &corpus()).unwrap();

        assert!(explanation.passes());
        assert!(explanation.in_corpus);
        assert_eq!(explanation.word.text(), "bread");
    }

    #[test]
    fn rejected_word_reports_rule() {
        let config = SearchConfig::new("_____", "a(3)", "");
        let explanation = explain_word("grape", &config, &corpus()).unwrap();

        assert_eq!(
            explanation.verdict,
            Err(Rejection::ForbiddenPosition {
                letter: 'a',
                position: 2
            })
        );
    }

    #[test]
    fn word_outside_corpus_is_still_evaluated() {
        let config = SearchConfig::new("_ _ _ _ e", "", "");
        let explanation = explain_word("slate", &config, &corpus()).unwrap();

        assert!(explanation.passes());
        assert!(!explanation.in_corpus);
    }

    #[test]
    fn blank_constraints_pass() {
        let explanation = explain_word("zesty", &SearchConfig::default(), &corpus()).unwrap();
        assert!(explanation.passes());
    }

    #[test]
    fn empty_word_is_error() {
        assert!(explain_word("  ", &SearchConfig::default(), &corpus()).is_err());
    }
}
