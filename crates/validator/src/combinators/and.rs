//! AND combinator - both validators must pass

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// The left validator runs first; its error is returned without running the
/// right one.
///
/// ```rust
/// use formflow_validator::combinators::And;
/// use formflow_validator::prelude::*;
///
/// let validator = And::new(not_empty(), min_length(6));
/// assert_eq!(validator.validate("").unwrap_err().code, "not_empty");
/// assert_eq!(validator.validate("abc").unwrap_err().code, "min_length");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}
