//! Compiled filter request
//!
//! Bundles the pattern, loose constraints and exclusions built from one set of
//! raw inputs, and evaluates words against all of them.

use crate::core::{ExclusionSet, LooseConstraints, LooseViolation, Pattern, Word};
use std::fmt;

/// The first rule a word breaks, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Word length differs from the pattern length
    Length { expected: usize, actual: usize },
    /// Word letter at this zero-based position breaks a fixed slot
    Pattern { position: usize },
    /// Word contains an excluded letter
    Excluded(char),
    /// Word is missing a loose letter
    MissingLetter(char),
    /// A loose letter sits at one of its forbidden zero-based positions
    ForbiddenPosition { letter: char, position: usize },
}

impl From<LooseViolation> for Rejection {
    fn from(violation: LooseViolation) -> Self {
        match violation {
            LooseViolation::Missing(letter) => Self::MissingLetter(letter),
            LooseViolation::Forbidden { letter, position } => {
                Self::ForbiddenPosition { letter, position }
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { expected, actual } => {
                write!(f, "length is {actual}, pattern needs {expected}")
            }
            Self::Pattern { position } => {
                write!(f, "letter {} does not match the pattern", position + 1)
            }
            Self::Excluded(letter) => write!(f, "contains excluded letter '{letter}'"),
            Self::MissingLetter(letter) => write!(f, "does not contain '{letter}'"),
            Self::ForbiddenPosition { letter, position } => {
                write!(f, "'{letter}' is not allowed at position {}", position + 1)
            }
        }
    }
}

/// One filter invocation's compiled constraints
///
/// Built once from the three raw strings and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    pattern: Pattern,
    loose: LooseConstraints,
    excluded: ExclusionSet,
}

impl FilterRequest {
    #[must_use]
    pub const fn new(pattern: Pattern, loose: LooseConstraints, excluded: ExclusionSet) -> Self {
        Self {
            pattern,
            loose,
            excluded,
        }
    }

    /// Compile all three mini-languages
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Word;
    /// use wordle_filter::filter::FilterRequest;
    ///
    /// let request = FilterRequest::parse("_ r a _ e", "", "g");
    /// assert_eq!(request.word_len(), 5);
    /// assert!(request.matches(&Word::new("crane")));
    /// assert!(!request.matches(&Word::new("grape")));
    /// ```
    #[must_use]
    pub fn parse(pattern: &str, loose: &str, exclude: &str) -> Self {
        Self::new(
            Pattern::compile(pattern),
            LooseConstraints::parse(loose),
            ExclusionSet::parse(exclude),
        )
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn loose(&self) -> &LooseConstraints {
        &self.loose
    }

    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> &ExclusionSet {
        &self.excluded
    }

    /// Target word length, taken from the pattern
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.pattern.len()
    }

    /// True when no constraint of any kind was parsed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty() && self.loose.is_empty() && self.excluded.is_empty()
    }

    /// Evaluate a word, reporting the first broken rule
    ///
    /// Rules are checked in order: length, pattern, exclusions, loose letters.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] for the first rule the word breaks.
    pub fn evaluate(&self, word: &Word) -> Result<(), Rejection> {
        if word.len() != self.word_len() {
            return Err(Rejection::Length {
                expected: self.word_len(),
                actual: word.len(),
            });
        }

        if let Some(position) = self.pattern.first_mismatch(word) {
            return Err(Rejection::Pattern { position });
        }

        if let Some(letter) = self.excluded.first_hit(word) {
            return Err(Rejection::Excluded(letter));
        }

        self.loose.check(word).map_err(Rejection::from)
    }

    /// Check if a word satisfies every constraint
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.evaluate(word).is_ok()
    }
}
