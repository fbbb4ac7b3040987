//! Macros for creating validators with minimal boilerplate.
//!
//! ```rust
//! use formflow_validator::validator;
//! use formflow_validator::foundation::{Validate, ValidationError};
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NoSpaces for str;
//!     rule(input) { !input.contains(' ') }
//!     error(input) { ValidationError::new("no_spaces", "must not contain spaces") }
//!     fn no_spaces();
//! }
//!
//! // Struct with fields and a constructor
//! validator! {
//!     pub MaxBytes { max: usize } for str;
//!     rule(self, input) { input.len() <= self.max }
//!     error(self, input) { ValidationError::new("max_bytes", "too long") }
//!     new(max: usize) { Self { max } }
//!     fn max_bytes(max: usize);
//! }
//!
//! assert!(no_spaces().validate("anna").is_ok());
//! assert!(max_bytes(2).validate("abc").is_err());
//! ```

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied to field structs; unit
/// validators additionally derive `Copy, PartialEq, Eq, Hash`.
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    crate::validator! {
        /// Test-only validator.
        Lowercase for str;
        rule(input) { input.chars().all(char::is_lowercase) }
        error(input) { ValidationError::new("lowercase", format!("'{input}' is not lowercase")) }
        fn lowercase();
    }

    crate::validator! {
        Exactly { len: usize } for str;
        rule(self, input) { input.len() == self.len }
        error(self, input) {
            ValidationError::new("exactly", "wrong length")
                .with_param("expected", self.len.to_string())
                .with_param("actual", input.len().to_string())
        }
        new(len: usize) { Self { len } }
        fn exactly(len: usize);
    }

    #[test]
    fn test_unit_validator() {
        assert!(lowercase().validate("anna").is_ok());
        let err = lowercase().validate("Anna").unwrap_err();
        assert_eq!(err.message, "'Anna' is not lowercase");
    }

    #[test]
    fn test_field_validator() {
        let validator = exactly(3);
        assert_eq!(validator.len, 3);
        assert!(validator.validate("abc").is_ok());
        let err = validator.validate("ab").unwrap_err();
        assert_eq!(err.param("actual"), Some("2"));
    }
}
