//! # formflow-form
//!
//! Reactive validation core of a signup form.
//!
//! Four raw text inputs (username, security code, password, password
//! confirmation) each run through their own stream: an optional duplicate
//! filter, a trailing debounce, and a pure rule mapping the text to a field
//! state. A gate combines the latest states into one validity signal and
//! publishes each field's message on its own channel.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formflow_form::SignupForm;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> formflow_form::Result<()> {
//!     let form = SignupForm::with_defaults()?;
//!     form.set_username("Anna")?;
//!     form.set_security_code("123")?;
//!     form.set_password("secret")?;
//!     form.set_confirm_password("secret")?;
//!
//!     let mut validity = form.subscribe_validity();
//!     while *validity.borrow_and_update() != Some(true) {
//!         validity.changed().await.ok();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Building Blocks
//!
//! - [`check`]: pure classifiers and gate predicates
//! - [`stream`]: [`Debouncer`](stream::Debouncer) and stream settings
//! - [`gate`]: the combine-N [`Gate`](gate::Gate)
//! - [`SignupForm`]: the full form with messages
//! - [`SubmitGate`]: the simplified single-boolean form
//!
//! Everything runs on the caller's tokio runtime. Tests drive time with
//! `#[tokio::test(start_paused = true)]`.

#![forbid(unsafe_code)]

pub mod check;
pub mod config;
pub mod error;
pub mod gate;
mod session;
pub mod state;
pub mod stream;
mod submit;
pub mod subscription;

pub use check::PasswordPair;
pub use config::{FieldConfig, FormConfig};
pub use error::{Error, Result};
pub use session::SignupForm;
pub use state::{
    ConfirmPasswordState, Field, PasswordState, SecurityCodeState, UsernameState, Verdict,
};
pub use stream::{Dedup, StreamSettings};
pub use submit::SubmitGate;
pub use subscription::Subscriptions;
