//! Equality validator against a reference value

use crate::foundation::{Validate, ValidationError};

/// Validates that a string equals a borrowed reference value.
///
/// Comparison is exact: no trimming and no case folding.
///
/// ```rust
/// use formflow_validator::validators::matches;
/// use formflow_validator::foundation::Validate;
///
/// assert!(matches("secret1").validate("secret1").is_ok());
/// assert!(matches("secret1").validate("Secret1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matches<'a> {
    expected: &'a str,
}

impl<'a> Matches<'a> {
    /// Creates a validator comparing against `expected`.
    #[must_use]
    pub fn new(expected: &'a str) -> Self {
        Self { expected }
    }
}

impl Validate for Matches<'_> {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input == self.expected {
            Ok(())
        } else {
            Err(ValidationError::mismatch(""))
        }
    }
}

/// Creates a [`Matches`] validator.
#[must_use]
pub fn matches(expected: &str) -> Matches<'_> {
    Matches::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(matches("abc").validate("abc").is_ok());
        assert!(matches("").validate("").is_ok());
    }

    #[test]
    fn test_mismatch_code() {
        let err = matches("abc").validate("abd").unwrap_err();
        assert_eq!(err.code, "matches");
    }
}
