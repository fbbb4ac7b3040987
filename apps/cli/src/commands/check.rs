//! Check command

use clap::Args;
use formflow_form::check::{
    check_confirm_password, check_password, check_security_code, check_username,
};
use formflow_form::{Field, Verdict};

#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Field to classify (username, code, password, confirm)
    #[arg(value_name = "FIELD")]
    pub field: Field,

    /// Raw value
    #[arg(value_name = "VALUE", default_value = "")]
    pub value: String,

    /// Password to compare a confirmation against
    #[arg(long, value_name = "PASSWORD", default_value = "")]
    pub password: String,
}

/// One classified value, ready to print.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub state: String,
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl Outcome {
    fn of(state: &impl Verdict) -> Self {
        Self {
            state: format!("{state:?}"),
            valid: state.is_valid(),
            message: state.error_message(),
        }
    }
}

pub(crate) fn classify(field: Field, value: &str, password: &str) -> Outcome {
    match field {
        Field::Username => Outcome::of(&check_username(value)),
        Field::SecurityCode => Outcome::of(&check_security_code(value)),
        Field::Password => Outcome::of(&check_password(value)),
        Field::ConfirmPassword => Outcome::of(&check_confirm_password(password, value)),
    }
}

/// Classify one value and print the result
pub(crate) fn execute(args: CheckArgs) -> anyhow::Result<()> {
    let outcome = classify(args.field, &args.value, &args.password);
    println!("{}: {}", args.field, outcome.state);
    println!("message: {}", outcome.message.unwrap_or("-"));
    println!("valid: {}", outcome.valid);
    Ok(())
}
