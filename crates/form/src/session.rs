//! The signup form session.
//!
//! A [`SignupForm`] owns four field streams and the gate combining them.
//! Setters record the raw text and feed the affected streams; the derived
//! signals are read synchronously or awaited through `watch` receivers.
//!
//! ```rust,no_run
//! use formflow_form::{Field, SignupForm};
//!
//! # async fn demo() -> formflow_form::Result<()> {
//! let form = SignupForm::with_defaults()?;
//! let mut errors = form.subscribe_error(Field::Username);
//! form.set_username("A")?;
//!
//! errors.changed().await.ok();
//! assert_eq!(
//!     form.username_error(),
//!     Some("Username should be at least 2 characters long")
//! );
//! # Ok(())
//! # }
//! ```

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::info;

use crate::check::{
    PasswordPair, check_password, check_password_pair, check_security_code, check_username,
};
use crate::config::FormConfig;
use crate::error::Result;
use crate::gate::{FieldHandle, Gate, GateBuilder, GateSettings};
use crate::state::{
    ConfirmPasswordState, Field, PasswordState, SecurityCodeState, UsernameState, Verdict,
};
use crate::stream::StreamSettings;

// ============================================================================
// INPUTS
// ============================================================================

/// Raw values the confirm-password stream pairs up.
#[derive(Debug, Default)]
struct RawPasswords {
    password: String,
    confirm: String,
}

/// Input side of a four-field form: one handle per field plus the raw
/// passwords the confirm stream is fed from.
#[derive(Debug)]
pub(crate) struct Inputs<U, S, P, C> {
    pub(crate) username: FieldHandle<String, U>,
    pub(crate) security_code: FieldHandle<String, S>,
    pub(crate) password: FieldHandle<String, P>,
    pub(crate) confirm: FieldHandle<PasswordPair, C>,
    raw: Mutex<RawPasswords>,
}

/// Rules of the four fields of one form flavour.
pub(crate) struct Rules<U, S, P, C> {
    pub(crate) username: fn(&String) -> U,
    pub(crate) security_code: fn(&String) -> S,
    pub(crate) password: fn(&String) -> P,
    pub(crate) confirm: fn(&PasswordPair) -> C,
}

impl<U, S, P, C> Inputs<U, S, P, C>
where
    U: Verdict,
    S: Verdict,
    P: Verdict,
    C: Verdict,
{
    /// Spawns the four streams, in [`Field::slot`] order, on `builder`.
    pub(crate) fn spawn(
        builder: &mut GateBuilder,
        settings: impl Fn(Field) -> StreamSettings,
        rules: Rules<U, S, P, C>,
    ) -> Self {
        let username = builder.field(
            Field::Username.name(),
            settings(Field::Username),
            String::new(),
            rules.username,
        );
        let security_code = builder.field(
            Field::SecurityCode.name(),
            settings(Field::SecurityCode),
            String::new(),
            rules.security_code,
        );
        let password = builder.field(
            Field::Password.name(),
            settings(Field::Password),
            String::new(),
            rules.password,
        );
        let confirm = builder.field(
            Field::ConfirmPassword.name(),
            settings(Field::ConfirmPassword),
            PasswordPair::default(),
            rules.confirm,
        );

        Self {
            username,
            security_code,
            password,
            confirm,
            raw: Mutex::new(RawPasswords::default()),
        }
    }

    /// Records a raw value and feeds every stream that depends on it.
    pub(crate) fn set(&self, field: Field, text: &str) -> Result<()> {
        match field {
            Field::Username => self.username.send(text.to_owned()),
            Field::SecurityCode => self.security_code.send(text.to_owned()),
            Field::Password => {
                let mut raw = self.raw.lock();
                self.password.send(text.to_owned())?;
                raw.password = text.to_owned();
                self.confirm
                    .send(PasswordPair::new(raw.password.clone(), raw.confirm.clone()))
            }
            Field::ConfirmPassword => {
                let mut raw = self.raw.lock();
                raw.confirm = text.to_owned();
                self.confirm
                    .send(PasswordPair::new(raw.password.clone(), raw.confirm.clone()))
            }
        }
    }

    /// How many values a field has settled so far.
    pub(crate) fn emissions(&self, field: Field) -> u64 {
        match field {
            Field::Username => self.username.emissions(),
            Field::SecurityCode => self.security_code.emissions(),
            Field::Password => self.password.emissions(),
            Field::ConfirmPassword => self.confirm.emissions(),
        }
    }

    fn subscribe_error(&self, field: Field) -> watch::Receiver<Option<&'static str>> {
        match field {
            Field::Username => self.username.subscribe_error(),
            Field::SecurityCode => self.security_code.subscribe_error(),
            Field::Password => self.password.subscribe_error(),
            Field::ConfirmPassword => self.confirm.subscribe_error(),
        }
    }
}

// ============================================================================
// SIGNUP FORM
// ============================================================================

/// A live signup form: four debounced field streams and their validity.
///
/// Validity is `None` until the first field settles, then the AND of the
/// four latest states. Each error signal is `None` until its own field
/// settles, then that field's latest message.
///
/// All tasks run on the runtime the form was created on and stop on
/// [`release`](Self::release) or drop.
#[derive(Debug)]
pub struct SignupForm {
    inputs: Inputs<UsernameState, SecurityCodeState, PasswordState, ConfirmPasswordState>,
    gate: Gate,
}

impl SignupForm {
    /// Starts a form session on the current tokio runtime.
    pub fn new(config: &FormConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = GateBuilder::new(GateSettings {
            surface_initial: false,
            report_errors: true,
        })?;
        let inputs = Inputs::spawn(
            &mut builder,
            |field| config.field(field).settings(),
            Rules {
                username: |text| check_username(text),
                security_code: |text| check_security_code(text),
                password: |text| check_password(text),
                confirm: check_password_pair,
            },
        );
        let gate = builder.build();

        info!(
            username_debounce_ms = config.username.debounce_ms,
            security_code_debounce_ms = config.security_code.debounce_ms,
            password_debounce_ms = config.password.debounce_ms,
            confirm_debounce_ms = config.confirm_password.debounce_ms,
            "signup form started"
        );

        Ok(Self { inputs, gate })
    }

    /// Starts a form session with [`FormConfig::default`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(&FormConfig::default())
    }

    // ── inputs ──────────────────────────────────────────────────────────

    /// Sets the raw username.
    pub fn set_username(&self, text: &str) -> Result<()> {
        self.inputs.set(Field::Username, text)
    }

    /// Sets the raw security code.
    pub fn set_security_code(&self, text: &str) -> Result<()> {
        self.inputs.set(Field::SecurityCode, text)
    }

    /// Sets the raw password; the confirmation is re-checked against it.
    pub fn set_password(&self, text: &str) -> Result<()> {
        self.inputs.set(Field::Password, text)
    }

    /// Sets the raw password confirmation.
    pub fn set_confirm_password(&self, text: &str) -> Result<()> {
        self.inputs.set(Field::ConfirmPassword, text)
    }

    /// Sets any field by name.
    pub fn set(&self, field: Field, text: &str) -> Result<()> {
        self.inputs.set(field, text)
    }

    // ── outputs ─────────────────────────────────────────────────────────

    /// Latest username message.
    pub fn username_error(&self) -> Option<&'static str> {
        self.inputs.username.error()
    }

    /// Latest security code message.
    pub fn security_code_error(&self) -> Option<&'static str> {
        self.inputs.security_code.error()
    }

    /// Latest password message.
    pub fn password_error(&self) -> Option<&'static str> {
        self.inputs.password.error()
    }

    /// Latest confirmation message.
    pub fn confirm_password_error(&self) -> Option<&'static str> {
        self.inputs.confirm.error()
    }

    /// Latest message of any field.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        *self.inputs.subscribe_error(field).borrow()
    }

    /// Whether the whole form is valid; `None` until the first field settles.
    pub fn is_form_valid(&self) -> Option<bool> {
        self.gate.validity()
    }

    /// Receiver woken when validity changes.
    pub fn subscribe_validity(&self) -> watch::Receiver<Option<bool>> {
        self.gate.subscribe()
    }

    /// Receiver woken when a field's message changes.
    pub fn subscribe_error(&self, field: Field) -> watch::Receiver<Option<&'static str>> {
        self.inputs.subscribe_error(field)
    }

    // ── diagnostics ─────────────────────────────────────────────────────

    /// Latest settled username state.
    pub fn username_state(&self) -> UsernameState {
        self.inputs.username.state()
    }

    /// Latest settled security code state.
    pub fn security_code_state(&self) -> SecurityCodeState {
        self.inputs.security_code.state()
    }

    /// Latest settled password state.
    pub fn password_state(&self) -> PasswordState {
        self.inputs.password.state()
    }

    /// Latest settled confirmation state.
    pub fn confirm_password_state(&self) -> ConfirmPasswordState {
        self.inputs.confirm.state()
    }

    /// How many values a field has settled so far.
    pub fn emissions(&self, field: Field) -> u64 {
        self.inputs.emissions(field)
    }

    // ── lifecycle ───────────────────────────────────────────────────────

    /// Stops every stream. Later setters fail with
    /// [`Error::SessionClosed`](crate::Error::SessionClosed).
    pub fn release(&mut self) {
        if self.gate.is_released() {
            return;
        }
        self.gate.release();
        info!("signup form released");
    }

    /// Whether [`release`](Self::release) has run.
    pub fn is_released(&self) -> bool {
        self.gate.is_released()
    }
}
