//! Core domain types for word filtering
//!
//! The three constraint mini-languages and the word type they are checked
//! against. Everything here is pure: no I/O, no shared state.

mod exclusion;
mod loose;
mod pattern;
mod word;

pub use exclusion::ExclusionSet;
pub use loose::{LooseConstraints, LooseViolation};
pub use pattern::{Pattern, Slot, WILDCARD};
pub use word::Word;
