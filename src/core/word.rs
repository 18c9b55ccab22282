//! Dictionary word representation
//!
//! A Word stores a normalized 5-character entry along with the set of letters it contains.

use rustc_hash::FxHashSet;
use std::fmt;

/// Number of letters in every candidate word
pub const WORD_LENGTH: usize = 5;

/// A 5-character dictionary word
///
/// Stores the lowercased characters by position and the distinct letters for presence checks.
/// Characters are not required to be alphabetic: any entry of the right length is a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} characters, got {len}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Length is counted in characters, not bytes, before lowercasing. Each character is
    /// lowercased to a single character so the length never changes.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the text is not exactly 5 characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Word;
    ///
    /// let word = Word::new("CREST").unwrap();
    /// assert_eq!(word.text(), "crest");
    ///
    /// assert!(Word::new("too long").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let collected: Vec<char> = text.chars().map(lowercase).collect();
        let chars: [char; WORD_LENGTH] = collected
            .try_into()
            .map_err(|rejected: Vec<char>| WordError::InvalidLength(rejected.len()))?;

        let text = chars.iter().collect();
        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the characters by position
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
