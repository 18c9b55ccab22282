//! Constraint descriptors built from game feedback
//!
//! Three kinds of feedback are tracked: letters absent from the solution, letters present
//! but misplaced at a given position, and letters fixed at an exact position.

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// Error type for malformed constraint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ExactLength(usize),
    MisplacedLength(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactLength(len) => write!(
                f,
                "Exact letters must have length {WORD_LENGTH}, got {len}"
            ),
            Self::MisplacedLength(len) => write!(
                f,
                "Misplaced letters must have {WORD_LENGTH} position entries, got {len}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Letters known not to occur anywhere in the solution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsentLetters(FxHashSet<char>);

impl AbsentLetters {
    /// Build from a string of letters; order and repeats are irrelevant
    #[must_use]
    pub fn new(letters: &str) -> Self {
        Self(letters.to_lowercase().chars().collect())
    }

    /// First absent letter found in the word, if any
    #[must_use]
    pub fn found_in(&self, word: &Word) -> Option<char> {
        word.chars().iter().copied().find(|c| self.0.contains(c))
    }
}

/// Letters known to be in the solution but not at a specific position
///
/// Holds one set per position plus the union of all sets, derived once on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MisplacedLetters {
    positions: [FxHashSet<char>; WORD_LENGTH],
    required: Vec<char>,
}

impl MisplacedLetters {
    /// Build from one letter string per position (empty string = no constraint)
    ///
    /// # Errors
    /// Returns `ConfigError::MisplacedLength` unless exactly 5 entries are given.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::MisplacedLetters;
    ///
    /// let misplaced = MisplacedLetters::from_positions(&["", "ec", "", "", "e"]).unwrap();
    /// assert_eq!(misplaced.required(), &['e', 'c']);
    ///
    /// assert!(MisplacedLetters::from_positions(&["", "ec"]).is_err());
    /// ```
    pub fn from_positions<S: AsRef<str>>(entries: &[S]) -> Result<Self, ConfigError> {
        if entries.len() != WORD_LENGTH {
            return Err(ConfigError::MisplacedLength(entries.len()));
        }

        let positions: [FxHashSet<char>; WORD_LENGTH] =
            std::array::from_fn(|i| entries[i].as_ref().to_lowercase().chars().collect());

        // Union in first-seen order, deduplicated
        let mut required = Vec::new();
        for entry in entries {
            for c in entry.as_ref().to_lowercase().chars() {
                if !required.contains(&c) {
                    required.push(c);
                }
            }
        }

        Ok(Self {
            positions,
            required,
        })
    }

    /// Letters that must appear somewhere in every matching word
    #[inline]
    #[must_use]
    pub fn required(&self) -> &[char] {
        &self.required
    }

    /// Letters forbidden at the given position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize) -> &FxHashSet<char> {
        &self.positions[position]
    }
}

/// Letters confirmed at an exact position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactLetters([Option<char>; WORD_LENGTH]);

impl ExactLetters {
    /// Required letter at the given position (0-4), if any
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Option<char> {
        self.0[position]
    }
}

impl FromStr for ExactLetters {
    type Err = ConfigError;

    /// Parse a 5-character pattern such as `---s-`
    ///
    /// Alphabetic characters are required letters; anything else leaves the slot open.
    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        let slots: Vec<Option<char>> = pattern
            .chars()
            .map(|c| c.is_alphabetic().then(|| lowercase(c)))
            .collect();

        slots
            .try_into()
            .map(Self)
            .map_err(|rejected: Vec<_>| ConfigError::ExactLength(rejected.len()))
    }
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Why a word failed the constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AbsentLetter(char),
    ExactMismatch {
        position: usize,
        expected: char,
        found: char,
    },
    MissingRequired(char),
    MisplacedAt { position: usize, letter: char },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsentLetter(c) => write!(f, "contains absent letter '{c}'"),
            Self::ExactMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "position {} is '{found}', expected '{expected}'",
                position + 1
            ),
            Self::MissingRequired(c) => write!(f, "does not contain required letter '{c}'"),
            Self::MisplacedAt { position, letter } => write!(
                f,
                "letter '{letter}' is known to be wrong at position {}",
                position + 1
            ),
        }
    }
}

/// The complete set of constraints for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    absent: AbsentLetters,
    misplaced: MisplacedLetters,
    exact: ExactLetters,
}

impl Constraints {
    #[must_use]
    pub const fn new(
        absent: AbsentLetters,
        misplaced: MisplacedLetters,
        exact: ExactLetters,
    ) -> Self {
        Self {
            absent,
            misplaced,
            exact,
        }
    }

    /// Build constraints from their textual configuration
    ///
    /// The exact pattern is validated before the misplaced entries.
    ///
    /// # Errors
    /// Returns `ConfigError` if the exact pattern or misplaced list does not have 5 entries.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Constraints, Word};
    ///
    /// let constraints = Constraints::parse("niu", &["", "ec", "", "", "e"], "---s-").unwrap();
    /// assert!(constraints.matches(&Word::new("crest").unwrap()));
    /// assert!(!constraints.matches(&Word::new("ogres").unwrap()));
    /// ```
    pub fn parse<S: AsRef<str>>(
        absent: &str,
        misplaced: &[S],
        exact: &str,
    ) -> Result<Self, ConfigError> {
        let exact = exact.parse()?;
        let misplaced = MisplacedLetters::from_positions(misplaced)?;
        Ok(Self::new(AbsentLetters::new(absent), misplaced, exact))
    }

    /// Check a word, returning the first failed check
    ///
    /// Checks run in order: absent letters, exact positions, required presence,
    /// then per-position misplaced exclusion.
    ///
    /// # Errors
    /// Returns the `Rejection` describing the first check the word fails.
    pub fn check(&self, word: &Word) -> Result<(), Rejection> {
        if let Some(c) = self.absent.found_in(word) {
            return Err(Rejection::AbsentLetter(c));
        }

        for (position, &found) in word.chars().iter().enumerate() {
            if let Some(expected) = self.exact.at(position).filter(|&c| c != found) {
                return Err(Rejection::ExactMismatch {
                    position,
                    expected,
                    found,
                });
            }
        }

        if let Some(&c) = self.misplaced.required().iter().find(|&&c| !word.has_letter(c)) {
            return Err(Rejection::MissingRequired(c));
        }

        for (position, &letter) in word.chars().iter().enumerate() {
            if self.misplaced.at(position).contains(&letter) {
                return Err(Rejection::MisplacedAt { position, letter });
            }
        }

        Ok(())
    }

    /// Check whether a word satisfies every constraint
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.check(word).is_ok()
    }

    /// Keep the candidates that satisfy every constraint, in input order
    #[must_use]
    pub fn filter<'a>(&self, candidates: &'a [Word]) -> Vec<&'a Word> {
        candidates.iter().filter(|w| self.matches(w)).collect()
    }

    #[inline]
    #[must_use]
    pub const fn absent(&self) -> &AbsentLetters {
        &self.absent
    }

    #[inline]
    #[must_use]
    pub const fn misplaced(&self) -> &MisplacedLetters {
        &self.misplaced
    }

    #[inline]
    #[must_use]
    pub const fn exact(&self) -> &ExactLetters {
        &self.exact
    }
}

fn sorted(set: &FxHashSet<char>) -> String {
    let mut letters: Vec<char> = set.iter().copied().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let absent = sorted(&self.absent.0);
        let misplaced: Vec<String> = self
            .misplaced
            .positions
            .iter()
            .map(|set| if set.is_empty() { "-".to_string() } else { sorted(set) })
            .collect();
        let exact: String = self.exact.0.iter().map(|slot| slot.unwrap_or('-')).collect();

        write!(
            f,
            "absent: {} | misplaced: [{}] | exact: {exact}",
            if absent.is_empty() { "-" } else { absent.as_str() },
            misplaced.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn open_misplaced() -> MisplacedLetters {
        MisplacedLetters::from_positions(&["", "", "", "", ""]).unwrap()
    }

    #[test]
    fn exact_parses_letters_and_sentinels() {
        let exact: ExactLetters = "---s-".parse().unwrap();
        assert_eq!(exact.at(0), None);
        assert_eq!(exact.at(3), Some('s'));
        assert_eq!(exact.at(4), None);
    }

    #[test]
    fn exact_non_letters_are_unconstrained() {
        let exact: ExactLetters = "?.* 1".parse().unwrap();
        assert!((0..WORD_LENGTH).all(|i| exact.at(i).is_none()));
    }

    #[test]
    fn exact_letters_are_lowercased() {
        let exact: ExactLetters = "C---T".parse().unwrap();
        assert_eq!(exact.at(0), Some('c'));
        assert_eq!(exact.at(4), Some('t'));
    }

    #[test]
    fn exact_wrong_length_rejected() {
        assert_eq!(
            "---s".parse::<ExactLetters>(),
            Err(ConfigError::ExactLength(4))
        );
        assert_eq!(
            "---s--".parse::<ExactLetters>(),
            Err(ConfigError::ExactLength(6))
        );
        assert_eq!("".parse::<ExactLetters>(), Err(ConfigError::ExactLength(0)));
    }

    #[test]
    fn misplaced_wrong_length_rejected() {
        let four: [&str; 4] = ["", "", "", ""];
        assert_eq!(
            MisplacedLetters::from_positions(&four),
            Err(ConfigError::MisplacedLength(4))
        );
        let empty: [&str; 0] = [];
        assert_eq!(
            MisplacedLetters::from_positions(&empty),
            Err(ConfigError::MisplacedLength(0))
        );
    }

    #[test]
    fn misplaced_required_is_deduplicated_union() {
        let misplaced = MisplacedLetters::from_positions(&["a", "ec", "", "ca", "e"]).unwrap();
        assert_eq!(misplaced.required(), &['a', 'e', 'c']);
        assert!(misplaced.at(1).contains(&'e'));
        assert!(misplaced.at(2).is_empty());
    }

    #[test]
    fn absent_letter_excludes_word() {
        let constraints = Constraints::new(
            AbsentLetters::new("niu"),
            open_misplaced(),
            ExactLetters::default(),
        );
        assert_eq!(
            constraints.check(&word("unity")),
            Err(Rejection::AbsentLetter('u'))
        );
        assert!(constraints.matches(&word("crest")));
    }

    #[test]
    fn absent_letters_are_case_insensitive() {
        let constraints = Constraints::parse("N", &["", "", "", "", ""], "-----").unwrap();
        assert!(!constraints.matches(&word("crane")));
    }

    #[test]
    fn exact_letter_must_match_position() {
        let constraints = Constraints::parse("", &["", "", "", "", ""], "---s-").unwrap();
        assert!(constraints.matches(&word("crest")));
        assert_eq!(
            constraints.check(&word("ogres")),
            Err(Rejection::ExactMismatch {
                position: 3,
                expected: 's',
                found: 'e'
            })
        );
    }

    #[test]
    fn required_letters_must_appear_anywhere() {
        let constraints = Constraints::parse("", &["", "", "", "", "e"], "-----").unwrap();
        assert_eq!(
            constraints.check(&word("crwth")),
            Err(Rejection::MissingRequired('e'))
        );
        assert!(constraints.matches(&word("crest")));
    }

    #[test]
    fn misplaced_letter_excluded_at_its_position() {
        let constraints = Constraints::parse("", &["", "ec", "", "", ""], "-----").unwrap();
        // 'c' at position 1 even though 'e' and 'c' are both present
        assert_eq!(
            constraints.check(&word("eclat")),
            Err(Rejection::MisplacedAt {
                position: 1,
                letter: 'c'
            })
        );
        assert!(constraints.matches(&word("crest")));
    }

    #[test]
    fn presence_checked_before_position_exclusion() {
        let constraints = Constraints::parse("", &["e", "", "", "", ""], "-----").unwrap();
        // "ghost" has no 'e' at all: reported as missing, not misplaced
        assert_eq!(
            constraints.check(&word("ghost")),
            Err(Rejection::MissingRequired('e'))
        );
        assert_eq!(
            constraints.check(&word("eclat")),
            Err(Rejection::MisplacedAt {
                position: 0,
                letter: 'e'
            })
        );
    }

    #[test]
    fn filter_preserves_order_and_duplicates() {
        let constraints = Constraints::parse("", &["", "", "", "", ""], "-----").unwrap();
        let candidates = vec![word("mango"), word("apple"), word("mango")];
        let matches = constraints.filter(&candidates);
        let texts: Vec<&str> = matches.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["mango", "apple", "mango"]);
    }

    #[test]
    fn parse_reports_exact_error_first() {
        assert_eq!(
            Constraints::parse("", &["", ""], "---"),
            Err(ConfigError::ExactLength(3))
        );
    }

    #[test]
    fn display_summarizes_constraints() {
        let constraints = Constraints::parse("uni", &["", "ec", "", "", "e"], "---s-").unwrap();
        assert_eq!(
            constraints.to_string(),
            "absent: inu | misplaced: [-, ce, -, -, e] | exact: ---s-"
        );
    }

    #[test]
    fn rejection_display_is_one_based() {
        let rejection = Rejection::MisplacedAt {
            position: 1,
            letter: 'c',
        };
        assert_eq!(
            rejection.to_string(),
            "letter 'c' is known to be wrong at position 2"
        );
    }
}
