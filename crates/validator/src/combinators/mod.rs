//! Logical combinators over validators.
//!
//! Also reachable through [`ValidateExt::and`](crate::foundation::ValidateExt::and).

pub mod and;

pub use and::And;
