//! Alphabetical grouping fallback
//!
//! When no constraints are supplied the whole corpus is listed, sorted and
//! split into runs sharing the same first letter.

use crate::core::Word;

/// A run of words sharing a first letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGroup {
    /// Uppercased first letter shared by every word in the group
    pub key: char,
    pub words: Vec<Word>,
}

/// Sort words and group them by first letter (case-insensitive)
///
/// Group keys and words within each group are both in ascending order.
/// Empty words have no first letter and are skipped.
///
/// # Examples
/// ```
/// use wordle_filter::core::Word;
/// use wordle_filter::filter::group_alphabetically;
///
/// let corpus: Vec<Word> = ["cherry", "apple", "avocado"].into_iter().map(Word::new).collect();
/// let groups = group_alphabetically(&corpus);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].key, 'A');
/// assert_eq!(groups[0].words[1].text(), "avocado");
/// ```
#[must_use]
pub fn group_alphabetically(corpus: &[Word]) -> Vec<LetterGroup> {
    let mut sorted: Vec<&Word> = corpus.iter().collect();
    sorted.sort();

    let mut groups: Vec<LetterGroup> = Vec::new();
    for word in sorted {
        let Some(first) = word.first_char() else {
            continue;
        };
        let key = first.to_uppercase().next().unwrap_or(first);

        match groups.last_mut() {
            Some(group) if group.key == key => group.words.push(word.clone()),
            _ => groups.push(LetterGroup {
                key,
                words: vec![word.clone()],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t)).collect()
    }

    fn texts(group: &LetterGroup) -> Vec<&str> {
        group.words.iter().map(Word::text).collect()
    }

    #[test]
    fn groups_sorted_within_and_across() {
        let corpus = words(&["apple", "banana", "cherry", "avocado"]);
        let groups = group_alphabetically(&corpus);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key, 'A');
        assert_eq!(texts(&groups[0]), ["apple", "avocado"]);
        assert_eq!(groups[1].key, 'B');
        assert_eq!(texts(&groups[1]), ["banana"]);
        assert_eq!(groups[2].key, 'C');
        assert_eq!(texts(&groups[2]), ["cherry"]);
    }

    #[test]
    fn mixed_case_input_groups_together() {
        let corpus = words(&["Zebra", "zoo", "ant"]);
        let groups = group_alphabetically(&corpus);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].key, 'Z');
        assert_eq!(texts(&groups[1]), ["zebra", "zoo"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let corpus = words(&["crane", "crane"]);
        let groups = group_alphabetically(&corpus);
        assert_eq!(texts(&groups[0]), ["crane", "crane"]);
    }

    #[test]
    fn empty_corpus_no_groups() {
        assert!(group_alphabetically(&[]).is_empty());
        assert!(group_alphabetically(&words(&[""])).is_empty());
    }
}
