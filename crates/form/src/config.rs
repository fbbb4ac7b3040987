//! Stream timing configuration of a signup form.
//!
//! ```toml
//! [username]
//! debounce_ms = 500
//! dedup = "before_debounce"
//!
//! [confirm_password]
//! debounce_ms = 0
//! dedup = "off"
//! ```
//!
//! Missing tables and keys fall back to the field's own entry in
//! [`FormConfig::default`], so a partial `[confirm_password]` table keeps the
//! immediate window.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::Field;
use crate::stream::{Dedup, StreamSettings};

/// Longest accepted debounce window.
pub const MAX_DEBOUNCE: Duration = Duration::from_secs(60);

/// Default debounce of the text fields, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Timing of one field stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Quiescence window in milliseconds; `0` settles immediately.
    pub debounce_ms: u64,
    /// Duplicate filter placement.
    pub dedup: Dedup,
}

impl FieldConfig {
    /// A field with the given window and filter.
    #[must_use]
    pub const fn new(debounce_ms: u64, dedup: Dedup) -> Self {
        Self { debounce_ms, dedup }
    }

    /// Debounced text field defaults.
    #[must_use]
    pub const fn text() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS, Dedup::BeforeDebounce)
    }

    /// No window, no filter.
    #[must_use]
    pub const fn immediate() -> Self {
        Self::new(0, Dedup::Off)
    }

    /// Debounce window as a duration.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Stream settings for this field.
    #[must_use]
    pub const fn settings(&self) -> StreamSettings {
        StreamSettings::debounced(self.debounce(), self.dedup)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::text()
    }
}

/// Per-field stream configuration of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FormDocument")]
pub struct FormConfig {
    /// Username stream
    pub username: FieldConfig,
    /// Security code stream
    pub security_code: FieldConfig,
    /// Password stream
    pub password: FieldConfig,
    /// Confirm-password stream
    pub confirm_password: FieldConfig,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            username: FieldConfig::text(),
            security_code: FieldConfig::text(),
            password: FieldConfig::text(),
            confirm_password: FieldConfig::immediate(),
        }
    }
}

/// A field table as written; absent keys stay `None`.
#[derive(Debug, Default, Deserialize)]
struct FieldPatch {
    debounce_ms: Option<u64>,
    dedup: Option<Dedup>,
}

impl FieldPatch {
    fn apply(self, base: FieldConfig) -> FieldConfig {
        FieldConfig {
            debounce_ms: self.debounce_ms.unwrap_or(base.debounce_ms),
            dedup: self.dedup.unwrap_or(base.dedup),
        }
    }
}

/// A configuration document as written, merged onto [`FormConfig::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FormDocument {
    username: FieldPatch,
    security_code: FieldPatch,
    password: FieldPatch,
    confirm_password: FieldPatch,
}

impl From<FormDocument> for FormConfig {
    fn from(doc: FormDocument) -> Self {
        let base = Self::default();
        Self {
            username: doc.username.apply(base.username),
            security_code: doc.security_code.apply(base.security_code),
            password: doc.password.apply(base.password),
            confirm_password: doc.confirm_password.apply(base.confirm_password),
        }
    }
}

impl FormConfig {
    /// Every field settles immediately with no filtering.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            username: FieldConfig::immediate(),
            security_code: FieldConfig::immediate(),
            password: FieldConfig::immediate(),
            confirm_password: FieldConfig::immediate(),
        }
    }

    /// Configuration of one field.
    #[must_use]
    pub const fn field(&self, field: Field) -> &FieldConfig {
        match field {
            Field::Username => &self.username,
            Field::SecurityCode => &self.security_code,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Mutable configuration of one field.
    pub fn field_mut(&mut self, field: Field) -> &mut FieldConfig {
        match field {
            Field::Username => &mut self.username,
            Field::SecurityCode => &mut self.security_code,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Checks every window against [`MAX_DEBOUNCE`].
    pub fn validate(&self) -> Result<()> {
        for field in Field::ALL {
            let debounce = self.field(field).debounce();
            if debounce > MAX_DEBOUNCE {
                return Err(Error::config(format!(
                    "{field}: debounce of {}ms exceeds the {}s ceiling",
                    debounce.as_millis(),
                    MAX_DEBOUNCE.as_secs()
                )));
            }
        }
        Ok(())
    }
}
