//! Word search command
//!
//! Runs one filter pass over the corpus with the raw constraint strings.

use crate::core::Word;
use crate::filter::{FilterRequest, FilterResult, filter};

/// Raw constraint strings for one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub pattern: String,
    pub loose: String,
    pub exclude: String,
}

impl SearchConfig {
    #[must_use]
    pub fn new(
        pattern: impl Into<String>,
        loose: impl Into<String>,
        exclude: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            loose: loose.into(),
            exclude: exclude.into(),
        }
    }

    /// True when every field is empty after trimming
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pattern.trim().is_empty()
            && self.loose.trim().is_empty()
            && self.exclude.trim().is_empty()
    }

    /// Compile the constraint strings
    #[must_use]
    pub fn request(&self) -> FilterRequest {
        FilterRequest::parse(&self.pattern, &self.loose, &self.exclude)
    }
}

/// Filter the corpus with the given constraints
#[must_use]
pub fn run_search(config: &SearchConfig, corpus: &[Word]) -> FilterResult {
    filter(corpus, &config.pattern, &config.loose, &config.exclude)
}
