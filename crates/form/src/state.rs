//! Field validation states and their user-facing messages.
//!
//! Every state maps to at most one message through an exhaustive `match`;
//! adding a variant without deciding its message does not compile.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of a field rule that can gate a form.
///
/// A field is valid when it carries no error message. Plain `bool`
/// predicates are verdicts without messages.
pub trait Verdict: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Whether this outcome lets the form be submitted.
    fn is_valid(&self) -> bool;

    /// Message to show next to the field, `None` when there is nothing to say.
    fn error_message(&self) -> Option<&'static str> {
        None
    }
}

impl Verdict for bool {
    fn is_valid(&self) -> bool {
        *self
    }
}

// ============================================================================
// FIELD
// ============================================================================

/// The four inputs of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Username text field
    Username,
    /// Security code text field
    SecurityCode,
    /// Password text field
    Password,
    /// Repeat-password text field
    ConfirmPassword,
}

impl Field {
    /// All fields, in gate slot order.
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::SecurityCode,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Stable name used in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::SecurityCode => "security_code",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }

    /// Position of the field in a gate.
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Field::Username => 0,
            Field::SecurityCode => 1,
            Field::Password => 2,
            Field::ConfirmPassword => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "username" | "name" => Ok(Field::Username),
            "security_code" | "code" => Ok(Field::SecurityCode),
            "password" => Ok(Field::Password),
            "confirm_password" | "confirm" => Ok(Field::ConfirmPassword),
            other => Err(Error::config(format!("unknown field '{other}'"))),
        }
    }
}

// ============================================================================
// STATES
// ============================================================================

/// Validation state of the username field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsernameState {
    /// Nothing typed yet
    Empty,
    /// Shorter than the minimum length
    Short,
    /// Acceptable
    Valid,
}

impl Verdict for UsernameState {
    fn is_valid(&self) -> bool {
        self.error_message().is_none()
    }

    fn error_message(&self) -> Option<&'static str> {
        match self {
            UsernameState::Empty => Some("Please enter username"),
            UsernameState::Short => Some("Username should be at least 2 characters long"),
            UsernameState::Valid => None,
        }
    }
}

/// Validation state of the security code field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityCodeState {
    /// Nothing typed yet
    Empty,
    /// Length is not a multiple of the divisor
    Incorrect,
    /// Acceptable
    Correct,
}

impl Verdict for SecurityCodeState {
    fn is_valid(&self) -> bool {
        self.error_message().is_none()
    }

    fn error_message(&self) -> Option<&'static str> {
        match self {
            SecurityCodeState::Empty => Some("Please enter security code"),
            SecurityCodeState::Incorrect => Some("Please enter correct security code"),
            SecurityCodeState::Correct => None,
        }
    }
}

/// Strength state of the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordState {
    /// Nothing typed yet
    Empty,
    /// Shorter than the minimum length
    Short,
    /// Acceptable
    Valid,
}

impl Verdict for PasswordState {
    fn is_valid(&self) -> bool {
        self.error_message().is_none()
    }

    fn error_message(&self) -> Option<&'static str> {
        match self {
            PasswordState::Empty => Some("Please enter password"),
            PasswordState::Short => Some("Password should be longer than 6 characters"),
            PasswordState::Valid => None,
        }
    }
}

/// State of the repeat-password field.
///
/// Derived from comparing both raw values, never from password strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmPasswordState {
    /// Confirmation not typed yet
    ConfirmEmpty,
    /// Confirmation differs from the password
    NotMatching,
    /// Confirmation equals the password
    Valid,
}

impl Verdict for ConfirmPasswordState {
    fn is_valid(&self) -> bool {
        self.error_message().is_none()
    }

    fn error_message(&self) -> Option<&'static str> {
        match self {
            ConfirmPasswordState::ConfirmEmpty => Some("Please confirm password"),
            ConfirmPasswordState::NotMatching => Some("Passwords do not match"),
            ConfirmPasswordState::Valid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_only_accepting_states_are_valid() {
        assert!(UsernameState::Valid.is_valid());
        assert!(SecurityCodeState::Correct.is_valid());
        assert!(PasswordState::Valid.is_valid());
        assert!(ConfirmPasswordState::Valid.is_valid());

        assert!(!UsernameState::Short.is_valid());
        assert!(!SecurityCodeState::Empty.is_valid());
        assert!(!PasswordState::Short.is_valid());
        assert!(!ConfirmPasswordState::NotMatching.is_valid());
    }

    #[rstest]
    #[case(UsernameState::Empty.error_message(), Some("Please enter username"))]
    #[case(
        UsernameState::Short.error_message(),
        Some("Username should be at least 2 characters long")
    )]
    #[case(UsernameState::Valid.error_message(), None)]
    #[case(SecurityCodeState::Empty.error_message(), Some("Please enter security code"))]
    #[case(
        SecurityCodeState::Incorrect.error_message(),
        Some("Please enter correct security code")
    )]
    #[case(SecurityCodeState::Correct.error_message(), None)]
    #[case(PasswordState::Empty.error_message(), Some("Please enter password"))]
    #[case(
        PasswordState::Short.error_message(),
        Some("Password should be longer than 6 characters")
    )]
    #[case(PasswordState::Valid.error_message(), None)]
    #[case(ConfirmPasswordState::ConfirmEmpty.error_message(), Some("Please confirm password"))]
    #[case(ConfirmPasswordState::NotMatching.error_message(), Some("Passwords do not match"))]
    #[case(ConfirmPasswordState::Valid.error_message(), None)]
    fn test_messages(
        #[case] actual: Option<&'static str>,
        #[case] expected: Option<&'static str>,
    ) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_bool_verdict_has_no_message() {
        assert!(true.is_valid());
        assert!(!false.is_valid());
        assert_eq!(false.error_message(), None);
    }

    #[rstest]
    #[case("username", Field::Username)]
    #[case("Code", Field::SecurityCode)]
    #[case("security_code", Field::SecurityCode)]
    #[case("password", Field::Password)]
    #[case("confirm", Field::ConfirmPassword)]
    fn test_field_from_str(#[case] input: &str, #[case] expected: Field) {
        assert_eq!(input.parse::<Field>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_field() {
        assert!("email".parse::<Field>().is_err());
    }

    #[test]
    fn test_slots_follow_all() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.slot(), i);
        }
    }
}
