//! Corpus source selection
//!
//! Which word lists make up the corpus is an explicit value handed to the
//! loader. Switching to the extended list builds a new config.

use std::fmt;
use std::path::{Path, PathBuf};

/// Default location of the extended word pack
pub const DEFAULT_EXTENDED_PATH: &str = "extended_words.txt";

/// Default location of the user's own additions
pub const DEFAULT_USER_PATH: &str = "user_words.txt";

/// Where the base word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// List compiled into the binary
    Embedded,
    /// One word per line text file
    File(PathBuf),
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "built-in list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Immutable description of the sources merged into a corpus
///
/// The primary list is either `base` or, when `use_extended` is set, the file
/// at `extended_path`. The user additions file is always appended if present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    pub base: WordSource,
    pub extended_path: PathBuf,
    pub use_extended: bool,
    pub user_path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            base: WordSource::Embedded,
            extended_path: PathBuf::from(DEFAULT_EXTENDED_PATH),
            use_extended: false,
            user_path: PathBuf::from(DEFAULT_USER_PATH),
        }
    }
}

impl CorpusConfig {
    /// Same sources with the extended pack switched on or off
    #[must_use]
    pub fn with_extended(&self, use_extended: bool) -> Self {
        Self {
            use_extended,
            ..self.clone()
        }
    }

    /// The list loaded before user additions
    #[must_use]
    pub fn primary(&self) -> WordSource {
        if self.use_extended {
            WordSource::File(self.extended_path.clone())
        } else {
            self.base.clone()
        }
    }

    #[must_use]
    pub fn user_path(&self) -> &Path {
        &self.user_path
    }
}
