//! Loose letter constraints
//!
//! A loose letter is known to be in the answer but not at certain positions
//! (a yellow tile). The input mini-language is a sequence of tokens like
//! `a(1,4) b(3,4)`, using 1-based positions.
//!
//! Parsing is best-effort: the input is scanned for the token shape and
//! anything else, including malformed tokens, is skipped without error.

use super::Word;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// A single letter followed by a parenthesised list of digits and commas
static LOOSE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z])\(([0-9,]+)\)").expect("loose token regex is valid")
});

/// Letter to forbidden zero-based positions
///
/// Every letter in the map must appear in a matching word and must not sit at
/// any of its forbidden positions. Forbidden positions past the end of a word
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LooseConstraints {
    letters: BTreeMap<char, BTreeSet<usize>>,
}

/// Why a word fails a loose constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LooseViolation {
    /// The letter does not occur in the word
    Missing(char),
    /// The letter occurs at a forbidden zero-based position
    Forbidden { letter: char, position: usize },
}

impl LooseConstraints {
    /// Parse the loose letter mini-language
    ///
    /// A repeated letter replaces the positions of its earlier token. A token
    /// whose list has an empty entry (`a(1,,2)`) or an out-of-range number is
    /// dropped. Position `0` has no zero-based equivalent and is discarded,
    /// but the letter is still required.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::LooseConstraints;
    ///
    /// let loose = LooseConstraints::parse("a(1,4) B(3,4)");
    /// assert_eq!(loose.forbidden_positions('a').unwrap().iter().copied().collect::<Vec<_>>(), [0, 3]);
    /// assert_eq!(loose.forbidden_positions('b').unwrap().iter().copied().collect::<Vec<_>>(), [2, 3]);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut letters = BTreeMap::new();

        for caps in LOOSE_TOKEN_RE.captures_iter(raw) {
            let Some(letter) = caps[1].chars().next() else {
                continue;
            };
            let letter = letter.to_ascii_lowercase();

            let Some(positions) = parse_positions(&caps[2]) else {
                log::debug!("skipping malformed loose token '{}'", &caps[0]);
                continue;
            };

            if letters.insert(letter, positions).is_some() {
                log::debug!("loose letter '{letter}' repeated, later token wins");
            }
        }

        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Number of distinct constrained letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Forbidden zero-based positions for a letter, if it is constrained
    #[must_use]
    pub fn forbidden_positions(&self, letter: char) -> Option<&BTreeSet<usize>> {
        self.letters.get(&letter)
    }

    /// Iterate over constrained letters in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (char, &BTreeSet<usize>)> {
        self.letters.iter().map(|(&letter, positions)| (letter, positions))
    }

    /// Check a word against every constraint, reporting the first violation
    ///
    /// Letters are checked in ascending order.
    ///
    /// # Errors
    ///
    /// Returns the first [`LooseViolation`] found.
    pub fn check(&self, word: &Word) -> Result<(), LooseViolation> {
        for (&letter, forbidden) in &self.letters {
            if !word.has_letter(letter) {
                return Err(LooseViolation::Missing(letter));
            }

            // positions_of only yields in-bounds indices
            if let Some(&position) = word
                .positions_of(letter)
                .iter()
                .find(|&&pos| forbidden.contains(&pos))
            {
                return Err(LooseViolation::Forbidden { letter, position });
            }
        }

        Ok(())
    }

    /// Check if a word satisfies every constraint
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.check(word).is_ok()
    }
}

/// Convert a comma-separated 1-based list to zero-based positions
fn parse_positions(list: &str) -> Option<BTreeSet<usize>> {
    let mut positions = BTreeSet::new();
    for part in list.split(',') {
        let one_based: usize = part.parse().ok()?;
        if let Some(zero_based) = one_based.checked_sub(1) {
            positions.insert(zero_based);
        }
    }
    Some(positions)
}
