//! Command implementations

pub mod explain;
pub mod search;
pub mod simple;

pub use explain::{Explanation, explain_word};
pub use search::{SearchConfig, run_search};
pub use simple::run_simple;
