//! Word lists for Wordle filtering
//!
//! Dictionaries are flat text files with one word per line.

pub mod loader;

pub use loader::{LoadError, load_from_file, read_words, words_from_slice};
