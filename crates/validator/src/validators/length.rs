//! String length validators
//!
//! Length is measured according to a [`LengthMode`]. The default counts
//! Unicode scalar values; [`LengthMode::Graphemes`] counts user-perceived
//! characters, which is what a text field shows its user.

use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
    /// Count extended grapheme clusters ("é" typed as `e` + combining
    /// accent is one).
    Graphemes,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
            LengthMode::Graphemes => input.graphemes(true).count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Whitespace counts as content.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::min_length("", self.min, self.mode.measure(input)) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Returns the same bound measured with `mode`.
    #[must_use]
    pub fn with_mode(self, mode: LengthMode) -> Self {
        Self { mode, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, 0, 0)]
    #[case("abc", 3, 3, 3)]
    #[case("héllo", 6, 5, 5)]
    #[case("e\u{301}", 3, 2, 1)]
    #[case("👍🏽", 8, 2, 1)]
    fn test_measure(
        #[case] input: &str,
        #[case] bytes: usize,
        #[case] chars: usize,
        #[case] graphemes: usize,
    ) {
        assert_eq!(LengthMode::Bytes.measure(input), bytes);
        assert_eq!(LengthMode::Chars.measure(input), chars);
        assert_eq!(LengthMode::Graphemes.measure(input), graphemes);
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty().validate("a").is_ok());
        assert!(not_empty().validate(" ").is_ok());
        assert!(not_empty().validate("").is_err());
    }

    #[test]
    fn test_min_length_boundary() {
        let validator = min_length(6);
        assert!(validator.validate("short").is_err());
        assert!(validator.validate("short1").is_ok());
    }

    #[test]
    fn test_min_length_error_params() {
        let err = min_length(2).validate("A").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("min"), Some("2"));
        assert_eq!(err.param("actual"), Some("1"));
    }

    #[test]
    fn test_min_length_graphemes() {
        let combining = "e\u{301}";
        assert!(min_length(2).validate(combining).is_ok());
        assert!(
            min_length(2)
                .with_mode(LengthMode::Graphemes)
                .validate(combining)
                .is_err()
        );
    }
}
