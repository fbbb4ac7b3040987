//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type and compose with `.and()`:
//!
//! ```rust
//! use formflow_validator::prelude::*;
//!
//! let validator = not_empty().and(min_length(2));
//! assert!(validator.validate("Anna").is_ok());
//! assert!(validator.validate("A").is_err());
//! ```
//!
//! Errors are structured and carry the parameters that caused them:
//!
//! ```rust
//! use formflow_validator::foundation::ValidationError;
//!
//! let error = ValidationError::min_length("username", 2, 1);
//! assert_eq!(error.param("min"), Some("2"));
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
