//! Formatting utilities for terminal output

use crate::core::{Constraints, WORD_LENGTH, Word};

/// Horizontal rule used around section headers
#[must_use]
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Mark each position of a word by how the constraints see it
///
/// `=` exact letter, `+` required letter, `x` letter ruled out at that position,
/// `.` anything else.
#[must_use]
pub fn position_marks(word: &Word, constraints: &Constraints) -> String {
    (0..WORD_LENGTH)
        .map(|i| {
            let c = word.char_at(i);
            if constraints.exact().at(i) == Some(c) {
                '='
            } else if constraints.misplaced().at(i).contains(&c) {
                'x'
            } else if constraints.misplaced().required().contains(&c) {
                '+'
            } else {
                '.'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_has_requested_width() {
        assert_eq!(rule(3), "───");
        assert!(rule(0).is_empty());
    }

    #[test]
    fn position_marks_for_match() {
        let constraints = Constraints::parse("niu", &["", "ec", "", "", "e"], "---s-").unwrap();
        let word = Word::new("crest").unwrap();
        assert_eq!(position_marks(&word, &constraints), "+.+=.");
    }

    #[test]
    fn position_marks_flag_forbidden_position() {
        let constraints = Constraints::parse("", &["", "ec", "", "", ""], "-----").unwrap();
        let word = Word::new("eclat").unwrap();
        assert_eq!(position_marks(&word, &constraints), "+x...");
    }
}
