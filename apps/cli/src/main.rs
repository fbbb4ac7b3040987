//! formflow command-line driver
//!
//! ```bash
//! printf 'username Anna\ncode 123\npassword secret\nconfirm secret\n' | formflow run
//! formflow check password short
//! formflow config --config form.toml
//! ```

mod commands;
mod script;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "formflow")]
#[command(about = "Drive a reactive signup-form validation session", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Form configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE", env = "FORMFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Read `field value` lines from stdin and print every published change
    Run(commands::run::RunArgs),

    /// Classify a single value without starting a session
    Check(commands::check::CheckArgs),

    /// Print the effective form configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let mut config = formflow_log::Config::from_env();
    match verbose {
        0 => {}
        1 => config.level = "debug".to_string(),
        _ => config.level = "trace".to_string(),
    }
    formflow_log::init_with(config)?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(cli.config.as_deref(), args).await,
        Commands::Check(args) => commands::check::execute(args),
        Commands::Config(args) => commands::config::execute(cli.config.as_deref(), args),
    }
}
