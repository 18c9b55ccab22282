//! Command implementations

pub mod explain;
pub mod filter;

pub use explain::{ExplainResult, explain_word};
pub use filter::{
    ConstraintConfig, Diagnostic, FilterConfig, FilterReport, filter_candidates,
    find_compatible_words, parse_misplaced, run_filter,
};
