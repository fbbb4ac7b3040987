//! Config command

use std::path::Path;

use clap::Args;

use crate::settings::{self, Overrides};

#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Override the debounce of the text fields, in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}

/// Print the effective configuration
pub(crate) fn execute(path: Option<&Path>, args: ConfigArgs) -> anyhow::Result<()> {
    let config = settings::load(
        path,
        Overrides {
            debounce_ms: args.debounce_ms,
        },
    )?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
