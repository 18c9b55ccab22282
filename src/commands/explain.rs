//! Word explanation command
//!
//! Reports which constraint, if any, rules out a specific word.

use super::filter::ConstraintConfig;
use crate::core::{Constraints, Rejection, Word};

/// Result of explaining a word
pub struct ExplainResult {
    pub word: Word,
    pub constraints: Constraints,
    pub verdict: Result<(), Rejection>,
}

impl ExplainResult {
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Check a single word against the configured constraints
///
/// # Errors
///
/// Returns an error if:
/// - The word is not 5 characters long
/// - The constraint configuration is malformed
pub fn explain_word(word: &str, config: &ConstraintConfig) -> Result<ExplainResult, String> {
    let word = Word::new(word.trim()).map_err(|e| format!("Invalid word: {e}"))?;
    let constraints = config
        .constraints()
        .map_err(|e| format!("Invalid constraints: {e}"))?;

    let verdict = constraints.check(&word);

    Ok(ExplainResult {
        word,
        constraints,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed() -> ConstraintConfig {
        ConstraintConfig::new(
            "niu".to_string(),
            ["", "ec", "", "", "e"].map(String::from).to_vec(),
            "---s-".to_string(),
        )
    }

    #[test]
    fn explain_matching_word() {
        let result = explain_word("CREST", &observed()).unwrap();

        assert_eq!(result.word.text(), "crest");
        assert!(result.is_match());
    }

    #[test]
    fn explain_exact_mismatch() {
        let result = explain_word("ogres", &observed()).unwrap();

        assert_eq!(
            result.verdict,
            Err(Rejection::ExactMismatch {
                position: 3,
                expected: 's',
                found: 'e'
            })
        );
    }

    #[test]
    fn explain_absent_letter_reported_first() {
        // "unset" also misses the exact 's', but the absent check runs first
        let result = explain_word("unset", &observed()).unwrap();
        assert_eq!(result.verdict, Err(Rejection::AbsentLetter('u')));
    }

    #[test]
    fn explain_invalid_word() {
        assert!(explain_word("abc", &observed()).is_err());
    }

    #[test]
    fn explain_invalid_constraints() {
        let config =
            ConstraintConfig::new(String::new(), vec![String::new(); 3], "-----".to_string());
        let err = explain_word("crest", &config).err().unwrap();

        assert!(err.starts_with("Invalid constraints"));
    }
}
