//! Terminal output formatting
//!
//! Display utilities for CLI results and diagnostics.

pub mod display;
pub mod formatters;

pub use display::{print_diagnostic, print_explanation, print_filter_report};
