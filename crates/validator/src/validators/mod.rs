//! Built-in validators
//!
//! - **Length**: [`NotEmpty`], [`MinLength`] with a configurable [`LengthMode`]
//! - **Divisibility**: [`DivisibleBy`] for numbers, [`LengthDivisibleBy`] for
//!   the measured length of a string
//! - **Equality**: [`Matches`] against a borrowed reference value

pub mod divisibility;
pub mod equality;
pub mod length;

pub use divisibility::{DivisibleBy, LengthDivisibleBy, divisible_by, length_divisible_by};
pub use equality::{Matches, matches};
pub use length::{LengthMode, MinLength, NotEmpty, min_length, not_empty};
