//! Wordle Filter
//!
//! Filters a word list down to the words consistent with Wordle feedback: letters known to be
//! absent, letters present but misplaced, and letters fixed at an exact position.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::core::{Constraints, Word};
//!
//! // Gray N, I, U; yellow E and C at position 2; yellow E at position 5; green S at position 4
//! let constraints = Constraints::parse("niu", &["", "ec", "", "", "e"], "---s-").unwrap();
//!
//! assert!(constraints.matches(&Word::new("crest").unwrap()));
//! assert!(!constraints.matches(&Word::new("ogres").unwrap()));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
