//! Field rules: pure classifiers from raw text to field state.
//!
//! All thresholds live here and are expressed with the
//! `formflow-validator` primitives, so the full form and the simplified
//! submit gate cannot drift apart.
//!
//! Lengths count user-perceived characters ([`LengthMode::Graphemes`]).
//! The security code rule looks at how many characters were typed; it never
//! parses the code as a number.

use formflow_validator::prelude::*;

use crate::state::{ConfirmPasswordState, PasswordState, SecurityCodeState, UsernameState};

/// How every field rule measures text.
pub const LENGTH_MODE: LengthMode = LengthMode::Graphemes;

/// Minimum username length.
pub const USERNAME_MIN_LENGTH: usize = 2;

/// Minimum password length.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// The security code length must be a multiple of this.
pub const SECURITY_CODE_DIVISOR: usize = 3;

/// Raw password and confirmation, the input of the confirm-password stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PasswordPair {
    /// Current password text
    pub password: String,
    /// Current confirmation text
    pub confirm: String,
}

impl PasswordPair {
    /// Creates a pair from both raw values.
    pub fn new(password: impl Into<String>, confirm: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            confirm: confirm.into(),
        }
    }
}

fn username_length() -> MinLength {
    min_length(USERNAME_MIN_LENGTH).with_mode(LENGTH_MODE)
}

fn password_length() -> MinLength {
    min_length(PASSWORD_MIN_LENGTH).with_mode(LENGTH_MODE)
}

fn security_code_length() -> LengthDivisibleBy {
    length_divisible_by(SECURITY_CODE_DIVISOR).with_mode(LENGTH_MODE)
}

// ============================================================================
// CLASSIFIERS
// ============================================================================

/// Classifies a username.
pub fn check_username(text: &str) -> UsernameState {
    if !not_empty().is_valid(text) {
        UsernameState::Empty
    } else if !username_length().is_valid(text) {
        UsernameState::Short
    } else {
        UsernameState::Valid
    }
}

/// Classifies a security code.
///
/// Empty input short-circuits to `Empty` before the divisibility rule runs.
pub fn check_security_code(text: &str) -> SecurityCodeState {
    if !not_empty().is_valid(text) {
        SecurityCodeState::Empty
    } else if !security_code_length().is_valid(text) {
        SecurityCodeState::Incorrect
    } else {
        SecurityCodeState::Correct
    }
}

/// Classifies a password by length.
pub fn check_password(text: &str) -> PasswordState {
    if !not_empty().is_valid(text) {
        PasswordState::Empty
    } else if !password_length().is_valid(text) {
        PasswordState::Short
    } else {
        PasswordState::Valid
    }
}

/// Classifies the confirmation against the current password.
///
/// An empty confirmation is `ConfirmEmpty` whatever the password is.
pub fn check_confirm_password(current: &str, confirm: &str) -> ConfirmPasswordState {
    if !not_empty().is_valid(confirm) {
        ConfirmPasswordState::ConfirmEmpty
    } else if !matches(current).is_valid(confirm) {
        ConfirmPasswordState::NotMatching
    } else {
        ConfirmPasswordState::Valid
    }
}

/// [`check_confirm_password`] over a [`PasswordPair`].
pub fn check_password_pair(pair: &PasswordPair) -> ConfirmPasswordState {
    check_confirm_password(&pair.password, &pair.confirm)
}

// ============================================================================
// SUBMIT GATE PREDICATES
// ============================================================================

/// Submit-gate rule for the name: anything typed.
pub fn name_present(text: &str) -> bool {
    not_empty().is_valid(text)
}

/// Submit-gate rule for the code: length divisible by the divisor.
///
/// An empty code has length 0 and passes.
pub fn code_length_divisible(text: &str) -> bool {
    security_code_length().is_valid(text)
}

/// Submit-gate rule for the password: present and long enough.
pub fn password_acceptable(text: &str) -> bool {
    not_empty().and(password_length()).is_valid(text)
}

/// Submit-gate rule for the confirmation: present and equal to the password.
pub fn confirmation_matches(pair: &PasswordPair) -> bool {
    not_empty().and(matches(&pair.password)).is_valid(&pair.confirm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", UsernameState::Empty)]
    #[case("A", UsernameState::Short)]
    #[case("An", UsernameState::Valid)]
    #[case("Anna", UsernameState::Valid)]
    #[case("é", UsernameState::Short)]
    #[case("e\u{301}", UsernameState::Short)]
    fn test_check_username(#[case] input: &str, #[case] expected: UsernameState) {
        assert_eq!(check_username(input), expected);
    }

    #[rstest]
    #[case("", SecurityCodeState::Empty)]
    #[case("a", SecurityCodeState::Incorrect)]
    #[case("12", SecurityCodeState::Incorrect)]
    #[case("abc", SecurityCodeState::Correct)]
    #[case("999", SecurityCodeState::Correct)]
    #[case("abcd", SecurityCodeState::Incorrect)]
    #[case("abcdef", SecurityCodeState::Correct)]
    fn test_check_security_code(#[case] input: &str, #[case] expected: SecurityCodeState) {
        assert_eq!(check_security_code(input), expected);
    }

    #[rstest]
    #[case("", PasswordState::Empty)]
    #[case("a", PasswordState::Short)]
    #[case("short", PasswordState::Short)]
    #[case("short1", PasswordState::Valid)]
    #[case("secret1", PasswordState::Valid)]
    fn test_check_password(#[case] input: &str, #[case] expected: PasswordState) {
        assert_eq!(check_password(input), expected);
    }

    #[rstest]
    #[case("abcdef", "", ConfirmPasswordState::ConfirmEmpty)]
    #[case("", "", ConfirmPasswordState::ConfirmEmpty)]
    #[case("abcdef", "abc", ConfirmPasswordState::NotMatching)]
    #[case("", "abc", ConfirmPasswordState::NotMatching)]
    #[case("secret1", "secret1", ConfirmPasswordState::Valid)]
    #[case("abc", "abc", ConfirmPasswordState::Valid)]
    fn test_check_confirm_password(
        #[case] current: &str,
        #[case] confirm: &str,
        #[case] expected: ConfirmPasswordState,
    ) {
        assert_eq!(check_confirm_password(current, confirm), expected);
        assert_eq!(check_password_pair(&PasswordPair::new(current, confirm)), expected);
    }

    #[test]
    fn test_gate_predicates() {
        assert!(!name_present(""));
        assert!(name_present("A"));

        assert!(code_length_divisible(""));
        assert!(code_length_divisible("abc"));
        assert!(!code_length_divisible("ab"));

        assert!(!password_acceptable(""));
        assert!(!password_acceptable("short"));
        assert!(password_acceptable("short1"));

        assert!(!confirmation_matches(&PasswordPair::new("", "")));
        assert!(!confirmation_matches(&PasswordPair::new("secret1", "secret")));
        assert!(confirmation_matches(&PasswordPair::new("secret1", "secret1")));
    }
}
