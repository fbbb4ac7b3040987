//! Divisibility validators

use std::fmt::Display;
use std::ops::Rem;

use crate::foundation::{Validate, ValidationError};
use crate::validators::LengthMode;

// ============================================================================
// DIVISIBLE BY
// ============================================================================

/// Validates that a number is divisible by a given divisor.
///
/// ```rust
/// use formflow_validator::validators::divisible_by;
/// use formflow_validator::foundation::Validate;
///
/// let validator = divisible_by(3);
/// assert!(validator.validate(&9).is_ok());
/// assert!(validator.validate(&7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivisibleBy<T> {
    /// The divisor.
    pub divisor: T,
}

impl<T> DivisibleBy<T> {
    /// Creates a new divisibility validator.
    #[must_use]
    pub fn new(divisor: T) -> Self {
        Self { divisor }
    }
}

impl<T> Validate for DivisibleBy<T>
where
    T: Copy + Rem<Output = T> + PartialEq + Default + Display,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if *input % self.divisor == T::default() {
            Ok(())
        } else {
            Err(ValidationError::new(
                "divisible_by",
                format!("Value must be divisible by {}", self.divisor),
            )
            .with_param("divisor", self.divisor.to_string())
            .with_param("actual", input.to_string()))
        }
    }
}

/// Creates a validator that checks if a number is divisible by `divisor`.
#[must_use]
pub fn divisible_by<T>(divisor: T) -> DivisibleBy<T>
where
    T: Copy + Rem<Output = T> + PartialEq + Default + Display,
{
    DivisibleBy::new(divisor)
}

// ============================================================================
// LENGTH DIVISIBLE BY
// ============================================================================

/// Validates that the measured length of a string is divisible by a divisor.
///
/// The empty string has length 0 and therefore passes; pair with
/// [`NotEmpty`](crate::validators::NotEmpty) when emptiness must fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthDivisibleBy {
    /// Length is checked against this divisor.
    pub inner: DivisibleBy<usize>,
    /// How to count length.
    pub mode: LengthMode,
}

impl LengthDivisibleBy {
    /// Creates a validator counting Unicode scalar values.
    ///
    /// A zero divisor is treated as one, so every length passes.
    #[must_use]
    pub fn new(divisor: usize) -> Self {
        Self {
            inner: DivisibleBy::new(divisor.max(1)),
            mode: LengthMode::Chars,
        }
    }

    /// Returns the same divisor measured with `mode`.
    #[must_use]
    pub fn with_mode(self, mode: LengthMode) -> Self {
        Self { mode, ..self }
    }
}

impl Validate for LengthDivisibleBy {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(&self.mode.measure(input))
    }
}

/// Creates a validator that checks the string length is a multiple of `divisor`.
#[must_use]
pub fn length_divisible_by(divisor: usize) -> LengthDivisibleBy {
    LengthDivisibleBy::new(divisor)
}
