//! Error type for validation failures
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages never allocates.

use std::borrow::Cow;
use std::fmt;

/// A structured validation error.
///
/// # Examples
///
/// ```rust
/// use formflow_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "String is too short")
///     .with_field("password")
///     .with_param("min", "6")
///     .with_param("actual", "5");
///
/// assert_eq!(error.param("actual"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "min_length", "not_empty", "divisible_by"
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Optional field name the error belongs to.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "min length" error.
    pub fn min_length(field: impl Into<Cow<'static, str>>, min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_field(field)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "mismatch" error for two values that must be equal.
    pub fn mismatch(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new("matches", "Values do not match").with_field(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_field() {
        let err = ValidationError::new("custom", "Something went wrong");
        assert_eq!(err.to_string(), "custom: Something went wrong");
    }

    #[test]
    fn test_display_with_field_and_params() {
        let err = ValidationError::min_length("password", 6, 5);
        assert_eq!(
            err.to_string(),
            "[password] min_length: Must be at least 6 characters (min=6, actual=5)"
        );
    }

    #[test]
    fn test_param_lookup() {
        let err = ValidationError::new("x", "y").with_param("divisor", "3");
        assert_eq!(err.param("divisor"), Some("3"));
        assert_eq!(err.param("missing"), None);
    }
}
