//! Word lists for filtering
//!
//! Corpus sources, their configuration and the loader that merges them.

pub mod config;
mod embedded;
pub mod loader;

pub use config::{CorpusConfig, WordSource};
pub use embedded::{EMBEDDED, EMBEDDED_COUNT};
pub use loader::{Corpus, CorpusError, load_corpus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(EMBEDDED.len(), EMBEDDED_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for &word in EMBEDDED {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_five_letters() {
        for &word in EMBEDDED {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
        }
    }

    #[test]
    fn embedded_is_sorted_and_unique() {
        assert!(EMBEDDED.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
