//! Formatting utilities for terminal output

use crate::core::{ExclusionSet, LooseConstraints, Pattern, Slot};

/// Render a pattern as uppercase tiles, e.g. `_ A _ B _`
#[must_use]
pub fn pattern_tiles(pattern: &Pattern) -> String {
    pattern
        .slots()
        .iter()
        .map(|slot| match slot {
            Slot::Fixed(c) => c.to_uppercase().collect::<String>(),
            Slot::Wildcard => "_".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tiles followed by how many slots are fixed, e.g. `_ A _ B _  (2 of 5 fixed)`
///
/// An empty pattern renders as `(any length)`.
#[must_use]
pub fn pattern_summary(pattern: &Pattern) -> String {
    if pattern.is_empty() {
        return "(any length)".to_string();
    }
    format!(
        "{}  ({} of {} fixed)",
        pattern_tiles(pattern),
        pattern.fixed_count(),
        pattern.len()
    )
}

/// Render loose constraints back in 1-based token form, e.g. `a(1,4) b(3)`
#[must_use]
pub fn loose_summary(loose: &LooseConstraints) -> String {
    loose
        .iter()
        .map(|(letter, positions)| {
            let list = positions
                .iter()
                .map(|p| (p + 1).to_string())
                .collect::<Vec<_>>()
                .join(",");
            format!("{letter}({list})")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render excluded letters sorted and comma separated
#[must_use]
pub fn exclusion_summary(excluded: &ExclusionSet) -> String {
    excluded
        .sorted()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Lay words out in fixed-width columns
///
/// Each row holds `columns` words padded to the longest word.
#[must_use]
pub fn word_columns(words: &[&str], columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);

    words
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// `1 word`, `3 words`
#[must_use]
pub fn word_count(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{count} words")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_tiles_uppercase() {
        assert_eq!(pattern_tiles(&Pattern::compile("_a_b_")), "_ A _ B _");
        assert_eq!(pattern_tiles(&Pattern::compile("")), "");
    }

    #[test]
    fn pattern_summary_counts_fixed_slots() {
        assert_eq!(
            pattern_summary(&Pattern::compile("_ a _ b _")),
            "_ A _ B _  (2 of 5 fixed)"
        );
        assert_eq!(
            pattern_summary(&Pattern::compile("_____")),
            "_ _ _ _ _  (0 of 5 fixed)"
        );
        assert_eq!(pattern_summary(&Pattern::compile("  ")), "(any length)");
    }

    #[test]
    fn loose_summary_one_based() {
        let loose = LooseConstraints::parse("b(3,4) a(1,4)");
        assert_eq!(loose_summary(&loose), "a(1,4) b(3,4)");
    }

    #[test]
    fn exclusion_summary_sorted() {
        assert_eq!(exclusion_summary(&ExclusionSet::parse("s y,a")), "a,s,y");
    }

    #[test]
    fn word_columns_pads_and_wraps() {
        let rows = word_columns(&["ab", "abcd", "a"], 2);
        assert_eq!(rows, ["ab    abcd", "a"]);
    }

    #[test]
    fn word_columns_zero_columns_is_one() {
        let rows = word_columns(&["ab", "cd"], 0);
        assert_eq!(rows, ["ab", "cd"]);
    }

    #[test]
    fn word_count_plural() {
        assert_eq!(word_count(0), "0 words");
        assert_eq!(word_count(1), "1 word");
        assert_eq!(word_count(12), "12 words");
    }
}
