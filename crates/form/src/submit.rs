//! The simplified submit gate.
//!
//! Four boolean predicates combined without debounce, dedup or messages:
//!
//! ```text
//! name not empty
//!   AND code length divisible by 3
//!   AND password not empty AND password length >= 6
//!   AND confirm not empty AND password == confirm
//! ```
//!
//! The predicates are the same primitives the full form uses. Unlike
//! [`SignupForm`](crate::SignupForm) the initial combination is surfaced,
//! so an empty form reads `false` right away.

use tokio::sync::watch;
use tracing::info;

use crate::check::{code_length_divisible, confirmation_matches, name_present, password_acceptable};
use crate::error::Result;
use crate::gate::{Gate, GateBuilder, GateSettings};
use crate::session::{Inputs, Rules};
use crate::state::Field;
use crate::stream::StreamSettings;

/// Single-boolean "can submit" signal over the four signup inputs.
#[derive(Debug)]
pub struct SubmitGate {
    inputs: Inputs<bool, bool, bool, bool>,
    gate: Gate,
}

impl SubmitGate {
    /// Starts the gate on the current tokio runtime.
    pub fn new() -> Result<Self> {
        let mut builder = GateBuilder::new(GateSettings {
            surface_initial: true,
            report_errors: false,
        })?;
        let inputs = Inputs::spawn(
            &mut builder,
            |_| StreamSettings::immediate(),
            Rules {
                username: |text| name_present(text),
                security_code: |text| code_length_divisible(text),
                password: |text| password_acceptable(text),
                confirm: confirmation_matches,
            },
        );
        let gate = builder.build();
        info!("submit gate started");

        Ok(Self { inputs, gate })
    }

    /// Sets the raw username.
    pub fn set_username(&self, text: &str) -> Result<()> {
        self.inputs.set(Field::Username, text)
    }

    /// Sets the raw security code.
    pub fn set_security_code(&self, text: &str) -> Result<()> {
        self.inputs.set(Field::SecurityCode, text)
    }

    /// Sets the raw password.
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

    /// Whether the form may be submitted.
    pub fn is_submit_enabled(&self) -> bool {
        self.gate.validity().unwrap_or(false)
    }

    /// Receiver woken when the submit signal changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<bool>> {
        self.gate.subscribe()
    }

    /// Stops the gate.
    pub fn release(&mut self) {
        if self.gate.is_released() {
            return;
        }
        self.gate.release();
        info!("submit gate released");
    }

    /// Whether [`release`](Self::release) has run.
    pub fn is_released(&self) -> bool {
        self.gate.is_released()
    }
}
