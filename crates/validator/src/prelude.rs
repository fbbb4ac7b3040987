//! Prelude module for convenient imports.
//!
//! ```rust
//! use formflow_validator::prelude::*;
//!
//! let code = not_empty().and(length_divisible_by(3));
//! assert!(code.validate("abc").is_ok());
//! ```

pub use crate::combinators::And;
pub use crate::foundation::{Validate, ValidateExt, ValidationError};
pub use crate::validators::{
    DivisibleBy, LengthDivisibleBy, LengthMode, Matches, MinLength, NotEmpty, divisible_by,
    length_divisible_by, matches, min_length, not_empty,
};
