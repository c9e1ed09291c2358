//! Position pattern compilation and matching
//!
//! A pattern describes the letters confirmed at specific positions:
//! - `_` marks an unknown position (wildcard)
//! - any other character is a required letter at that position
//!
//! Whitespace is insignificant and case is normalised, so `"_ A _ b _"` and
//! `"_a_b_"` compile to the same 5-slot pattern.

use super::Word;
use std::fmt;

/// Placeholder character for an unknown position
pub const WILDCARD: char = '_';

/// A single pattern position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A letter that must appear at this position
    Fixed(char),
    /// Any single letter
    Wildcard,
}

impl Slot {
    /// Check whether a word character satisfies this slot
    #[inline]
    #[must_use]
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::Fixed(required) => required == ch,
            Self::Wildcard => true,
        }
    }
}

/// Compiled fixed-length position pattern
///
/// The length is fixed at compile time and equals the number of
/// non-whitespace characters in the source string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Slot>,
}

impl Pattern {
    /// Compile a pattern string
    ///
    /// An input that is empty after stripping whitespace compiles to a
    /// zero-length pattern, which matches no real word.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Pattern, Slot};
    ///
    /// let pattern = Pattern::compile("_ a _ B _");
    /// assert_eq!(pattern.len(), 5);
    /// assert_eq!(pattern.slots()[1], Slot::Fixed('a'));
    /// assert_eq!(pattern.slots()[3], Slot::Fixed('b'));
    /// ```
    #[must_use]
    pub fn compile(raw: &str) -> Self {
        let slots = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .map(|c| {
                if c == WILDCARD {
                    Slot::Wildcard
                } else {
                    Slot::Fixed(c)
                }
            })
            .collect();

        Self { slots }
    }

    /// Number of slots (the required word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Count the slots holding a required letter
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Fixed(_)))
            .count()
    }

    /// Check if a word matches this pattern
    ///
    /// True iff the lengths are equal and every slot accepts the word's
    /// character at the same position.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::compile("_ r a _ e");
    /// assert!(pattern.matches(&Word::new("crane")));
    /// assert!(!pattern.matches(&Word::new("crank")));
    /// assert!(!pattern.matches(&Word::new("cranes")));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len() && self.first_mismatch(word).is_none()
    }

    /// Find the first position where a same-length word breaks the pattern
    ///
    /// Positions past the end of either side are not compared; callers check
    /// length separately.
    #[must_use]
    pub fn first_mismatch(&self, word: &Word) -> Option<usize> {
        self.slots
            .iter()
            .zip(word.chars())
            .position(|(slot, &ch)| !slot.accepts(ch))
    }
}

impl fmt::Display for Pattern {
    /// Canonical spaced form, e.g. `_ a _ b _`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Slot::Fixed(c) => write!(f, "{c}")?,
                Slot::Wildcard => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}
