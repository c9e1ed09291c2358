//! Wordle Filter
//!
//! Narrow a word list to the candidates consistent with what a Wordle board
//! has revealed: letters fixed in place, letters present but misplaced, and
//! letters ruled out.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::core::Word;
//! use wordle_filter::filter::{FilterResult, filter};
//!
//! let corpus: Vec<Word> = ["crane", "crate", "grape", "brake"]
//!     .into_iter()
//!     .map(Word::new)
//!     .collect();
//!
//! // R and A confirmed, E somewhere but not last, no G
//! let result = filter(&corpus, "_ r a _ _", "e(4)", "g");
//! if let FilterResult::Matches { words, .. } = result {
//!     assert_eq!(words.len(), 3);
//! }
//! ```

// Core domain types
pub mod core;

// Constraint filtering
pub mod filter;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod log;
