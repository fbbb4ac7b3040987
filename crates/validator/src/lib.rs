//! # formflow-validator
//!
//! Small, composable validation primitives used by the formflow field rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use formflow_validator::prelude::*;
//!
//! // Compose validators with .and()
//! let password = not_empty().and(min_length(6));
//! assert!(password.validate("secret1").is_ok());
//! assert!(password.validate("short").is_err());
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for validators
//! that borrow their configuration.
//!
//! ## Built-in Validators
//!
//! - **Length**: [`NotEmpty`](validators::NotEmpty), [`MinLength`](validators::MinLength)
//! - **Divisibility**: [`DivisibleBy`](validators::DivisibleBy),
//!   [`LengthDivisibleBy`](validators::LengthDivisibleBy)
//! - **Equality**: [`Matches`](validators::Matches)

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
