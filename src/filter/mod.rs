//! Word filtering
//!
//! Composes the core constraints into a single predicate and applies it to a
//! corpus, with an alphabetical listing when no constraints are given.

mod engine;
mod grouping;
mod request;

pub use engine::{FilterResult, filter, filter_with};
pub use grouping::{LetterGroup, group_alphabetically};
pub use request::{FilterRequest, Rejection};
