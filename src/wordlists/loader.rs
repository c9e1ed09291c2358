//! Word list loading utilities
//!
//! Reads one-word-per-line sources and merges them into a corpus according to
//! a [`CorpusConfig`].

use super::EMBEDDED;
use super::config::{CorpusConfig, WordSource};
use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for corpus loading
#[derive(Debug)]
pub enum CorpusError {
    /// A source exists but could not be read
    Io { path: PathBuf, source: io::Error },
    /// Every source was missing or empty
    Empty,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list '{}': {source}", path.display())
            }
            Self::Empty => write!(f, "No words could be loaded from any word list"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// What happened to one source during a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Loaded(usize),
    Missing,
}

/// Per-source record of a corpus merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub source: WordSource,
    pub status: SourceStatus,
}

/// Merged word sequence plus where it came from
#[derive(Debug, Clone)]
pub struct Corpus {
    pub words: Vec<Word>,
    pub sources: Vec<SourceReport>,
}

impl Corpus {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parse word list text
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped. Surviving lines are trimmed and lowercased.
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::parse_words;
///
/// let words = parse_words("# five letters\nCrane\n\n  slate  \n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(Word::new(trimmed))
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Convert embedded string slice to Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().map(|&s| Word::new(s)).collect()
}

/// Read a file source, mapping "not found" to `None`
fn read_optional(path: &Path) -> Result<Option<Vec<Word>>, CorpusError> {
    match load_from_file(path) {
        Ok(words) => Ok(Some(words)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CorpusError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load and merge the sources described by a config
///
/// The primary list comes first, then user additions. A missing primary file
/// is logged as a warning; a missing user additions file is skipped quietly.
/// Words are concatenated without deduplication.
///
/// # Errors
///
/// Returns [`CorpusError::Io`] if a source exists but cannot be read, and
/// [`CorpusError::Empty`] if the merged corpus has no words.
pub fn load_corpus(config: &CorpusConfig) -> Result<Corpus, CorpusError> {
    let mut words = Vec::new();
    let mut sources = Vec::with_capacity(2);

    let primary = config.primary();
    let primary_words = match &primary {
        WordSource::Embedded => Some(words_from_slice(EMBEDDED)),
        WordSource::File(path) => read_optional(path)?,
    };
    let status = match primary_words {
        Some(list) => {
            log::info!("loaded {} words from {primary}", list.len());
            let status = SourceStatus::Loaded(list.len());
            words.extend(list);
            status
        }
        None => {
            log::warn!("word list '{primary}' does not exist");
            SourceStatus::Missing
        }
    };
    sources.push(SourceReport {
        source: primary,
        status,
    });

    let user_source = WordSource::File(config.user_path().to_path_buf());
    let status = match read_optional(config.user_path())? {
        Some(list) => {
            log::info!("loaded {} user words from {user_source}", list.len());
            let status = SourceStatus::Loaded(list.len());
            words.extend(list);
            status
        }
        None => {
            log::debug!("no user word list at {user_source}");
            SourceStatus::Missing
        }
    };
    sources.push(SourceReport {
        source: user_source,
        status,
    });

    if words.is_empty() {
        return Err(CorpusError::Empty);
    }

    Ok(Corpus { words, sources })
}
