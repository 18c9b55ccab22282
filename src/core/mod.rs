//! Core domain types for Wordle filtering
//!
//! Words and the constraint descriptors they are checked against.
//! All types here are pure and free of I/O.

mod constraints;
mod word;

pub use constraints::{
    AbsentLetters, ConfigError, Constraints, ExactLetters, MisplacedLetters, Rejection,
};
pub use word::{WORD_LENGTH, Word, WordError};
