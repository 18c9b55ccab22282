//! Word filtering command
//!
//! Loads a dictionary and keeps every word consistent with the observed feedback.

use crate::core::{ConfigError, Constraints, WORD_LENGTH, Word};
use crate::wordlists::{LoadError, load_from_file};
use std::fmt;
use std::path::PathBuf;

/// Textual constraint configuration, as supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintConfig {
    pub absent: String,
    pub misplaced: Vec<String>,
    pub exact: String,
}

impl ConstraintConfig {
    #[must_use]
    pub const fn new(absent: String, misplaced: Vec<String>, exact: String) -> Self {
        Self {
            absent,
            misplaced,
            exact,
        }
    }

    /// Build the constraint descriptors for this configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the exact pattern or the misplaced list does not have 5 entries.
    pub fn constraints(&self) -> Result<Constraints, ConfigError> {
        Constraints::parse(&self.absent, &self.misplaced, &self.exact)
    }
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        Self::new(
            String::new(),
            vec![String::new(); WORD_LENGTH],
            "-".repeat(WORD_LENGTH),
        )
    }
}

/// Split a comma-separated misplaced list into one entry per position
///
/// Empty entries are kept, so `",ec,,,e"` yields five entries.
///
/// # Examples
/// ```
/// use wordle_filter::commands::parse_misplaced;
///
/// assert_eq!(parse_misplaced(",ec,,,e"), vec!["", "ec", "", "", "e"]);
/// ```
#[must_use]
pub fn parse_misplaced(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}

/// Configuration for a filter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub dictionary: PathBuf,
    pub constraints: ConstraintConfig,
}

impl FilterConfig {
    #[must_use]
    pub const fn new(dictionary: PathBuf, constraints: ConstraintConfig) -> Self {
        Self {
            dictionary,
            constraints,
        }
    }
}

/// A recoverable problem reported during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Configuration(ConfigError),
    SourceNotFound(PathBuf),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "{err}"),
            Self::SourceNotFound(path) => {
                write!(f, "Dictionary file {} does not exist", path.display())
            }
        }
    }
}

/// Result of a filter run
#[derive(Debug, Clone, Default)]
pub struct FilterReport {
    pub constraints: Option<Constraints>,
    pub total_candidates: usize,
    pub matches: Vec<Word>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Find all candidates consistent with the observed feedback
///
/// Output keeps candidate order and does not deduplicate.
///
/// # Errors
///
/// Returns `ConfigError` if `exact` is not 5 characters or `misplaced` does not have
/// 5 entries. No candidate is examined in that case.
///
/// # Examples
/// ```
/// use wordle_filter::commands::find_compatible_words;
/// use wordle_filter::wordlists::words_from_slice;
///
/// let candidates = words_from_slice(&["crest", "ogres"]);
/// let misplaced = ["", "ec", "", "", "e"];
/// let matches = find_compatible_words("niu", &misplaced, "---s-", &candidates).unwrap();
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].text(), "crest");
/// ```
pub fn find_compatible_words<'a, S: AsRef<str>>(
    absent: &str,
    misplaced: &[S],
    exact: &str,
    candidates: &'a [Word],
) -> Result<Vec<&'a Word>, ConfigError> {
    let constraints = Constraints::parse(absent, misplaced, exact)?;
    Ok(constraints.filter(candidates))
}

/// Filter an already loaded candidate list
///
/// A malformed configuration is reported as a diagnostic and yields no matches.
#[must_use]
pub fn filter_candidates(config: &ConstraintConfig, candidates: &[Word]) -> FilterReport {
    let mut report = FilterReport {
        total_candidates: candidates.len(),
        ..FilterReport::default()
    };

    match config.constraints() {
        Ok(constraints) => {
            report.matches = constraints.filter(candidates).into_iter().cloned().collect();
            report.constraints = Some(constraints);
        }
        Err(err) => report.diagnostics.push(Diagnostic::Configuration(err)),
    }

    report
}

/// Load the dictionary and filter it
///
/// A missing dictionary is reported and the run continues with no candidates.
///
/// # Errors
///
/// Returns `LoadError::Io` if the dictionary exists but cannot be read.
pub fn run_filter(config: &FilterConfig) -> Result<FilterReport, LoadError> {
    let (candidates, not_found) = match load_from_file(&config.dictionary) {
        Ok(words) => (words, None),
        Err(LoadError::NotFound(path)) => (Vec::new(), Some(Diagnostic::SourceNotFound(path))),
        Err(err) => return Err(err),
    };

    let mut report = filter_candidates(&config.constraints, &candidates);
    if let Some(diagnostic) = not_found {
        report.diagnostics.insert(0, diagnostic);
    }

    Ok(report)
}
