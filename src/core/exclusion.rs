//! Excluded letter set
//!
//! Letters confirmed absent from the answer (gray tiles), given as a string of
//! letters optionally separated by commas and whitespace: `a,b,c`, `a b c` and
//! `abc` are equivalent.

use super::Word;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    letters: FxHashSet<char>,
}

impl ExclusionSet {
    /// Build the set from raw input
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::ExclusionSet;
    ///
    /// let excluded = ExclusionSet::parse("A, b c");
    /// assert!(excluded.contains('a'));
    /// assert!(excluded.contains('c'));
    /// assert_eq!(excluded.len(), 3);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let letters = raw
            .to_lowercase()
            .chars()
            .filter(|&c| c != ',' && !c.is_whitespace())
            .collect();

        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Excluded letters in ascending order
    #[must_use]
    pub fn sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// First excluded letter found in the word, scanning left to right
    #[must_use]
    pub fn first_hit(&self, word: &Word) -> Option<char> {
        if self.letters.is_empty() {
            return None;
        }
        word.chars().iter().copied().find(|c| self.letters.contains(c))
    }

    /// Check if a word contains none of the excluded letters
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.first_hit(word).is_none()
    }
}
