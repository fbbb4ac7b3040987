//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Generic over the input type so a validator only ever sees the values it
/// was written for. All validators return `Result<(), ValidationError>`.
///
/// # Examples
///
/// ```rust
/// use formflow_validator::foundation::{Validate, ValidationError};
///
/// struct StartsUpper;
///
/// impl Validate for StartsUpper {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().next().is_some_and(char::is_uppercase) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("starts_upper", "Must start with a capital"))
///         }
///     }
/// }
///
/// assert!(StartsUpper.is_valid("Anna"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when [`validate`](Self::validate) succeeds.
    ///
    /// Predicates that only need a yes/no answer use this instead of
    /// building and discarding an error.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing the `.and()` combinator method.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// ```rust
    /// use formflow_validator::prelude::*;
    ///
    /// let validator = not_empty().and(min_length(6));
    /// assert!(validator.validate("secret").is_ok());
    /// assert!(validator.validate("").is_err());
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysValid.is_valid("test"));
    }

    #[test]
    fn test_reference_is_a_validator() {
        let validator = &AlwaysValid;
        assert!(validator.and(AlwaysValid).is_valid("x"));
    }
}
