//! Line-oriented input script for `formflow run`.
//!
//! ```text
//! # comments and blank lines are skipped
//! username Anna
//! code 123
//! wait 600
//! password
//! ```
//!
//! A field line without a value sets the field to the empty string.

use std::time::Duration;

use formflow_form::Field;

/// One step of an input script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Set a field to a raw value
    Set {
        /// Target field
        field: Field,
        /// Raw text, possibly empty
        value: String,
    },
    /// Let virtual or wall-clock time pass
    Wait(Duration),
}

/// Script syntax errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum ParseError {
    /// First word is neither a field nor `wait`
    #[error("line {line}: unknown command '{word}'")]
    UnknownCommand {
        /// 1-based line number
        line: usize,
        /// The offending word
        word: String,
    },

    /// `wait` without a millisecond count
    #[error("line {line}: invalid wait duration '{value}'")]
    InvalidWait {
        /// 1-based line number
        line: usize,
        /// The offending value
        value: String,
    },
}

impl Command {
    /// Parses one script line; `Ok(None)` for blank lines and comments.
    ///
    /// Only the separator after the first word is consumed, so values keep
    /// their inner and trailing spaces.
    pub(crate) fn parse_line(line_no: usize, line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            return Ok(None);
        }

        let line = line.trim_start();
        let (word, value) = line.split_once(' ').unwrap_or((line, ""));

        if word == "wait" {
            let ms = value.trim().parse::<u64>().map_err(|_| ParseError::InvalidWait {
                line: line_no,
                value: value.trim().to_string(),
            })?;
            return Ok(Some(Command::Wait(Duration::from_millis(ms))));
        }

        let field = word.parse::<Field>().map_err(|_| ParseError::UnknownCommand {
            line: line_no,
            word: word.to_string(),
        })?;
        Ok(Some(Command::Set {
            field,
            value: value.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn set(field: Field, value: &str) -> Option<Command> {
        Some(Command::Set {
            field,
            value: value.to_string(),
        })
    }

    #[rstest]
    #[case("username Anna", set(Field::Username, "Anna"))]
    #[case("name A", set(Field::Username, "A"))]
    #[case("code 123", set(Field::SecurityCode, "123"))]
    #[case("password", set(Field::Password, ""))]
    #[case("confirm two words ", set(Field::ConfirmPassword, "two words "))]
    #[case("  security_code 12\r\n", set(Field::SecurityCode, "12"))]
    #[case("wait 600", Some(Command::Wait(Duration::from_millis(600))))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("# username Anna", None)]
    fn test_parse_line(#[case] line: &str, #[case] expected: Option<Command>) {
        assert_eq!(Command::parse_line(1, line).unwrap(), expected);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse_line(3, "email a@b.c"),
            Err(ParseError::UnknownCommand {
                line: 3,
                word: "email".to_string(),
            })
        );
    }

    #[test]
    fn test_invalid_wait() {
        let err = Command::parse_line(7, "wait soon").unwrap_err();
        assert_eq!(err.to_string(), "line 7: invalid wait duration 'soon'");
        assert!(Command::parse_line(8, "wait").is_err());
    }
}
