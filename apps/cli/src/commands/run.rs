//! Run command

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use formflow_form::{Field, FormConfig, SignupForm, SubmitGate};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::script::Command;
use crate::settings::{self, Overrides};

/// Extra time given to the last window before the session is released.
const DRAIN_MARGIN: Duration = Duration::from_millis(10);

#[derive(Args)]
pub(crate) struct RunArgs {
    /// Drive the simplified submit gate instead of the full form
    #[arg(long)]
    pub gate: bool,

    /// Override the debounce of the text fields, in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}

/// Anything the script can drive.
trait Target {
    fn set(&self, field: Field, value: &str) -> formflow_form::Result<()>;
}

impl Target for SignupForm {
    fn set(&self, field: Field, value: &str) -> formflow_form::Result<()> {
        SignupForm::set(self, field, value)
    }
}

impl Target for SubmitGate {
    fn set(&self, field: Field, value: &str) -> formflow_form::Result<()> {
        SubmitGate::set(self, field, value)
    }
}

/// Feed stdin into a session and print every published change
pub(crate) async fn execute(path: Option<&Path>, args: RunArgs) -> anyhow::Result<()> {
    if args.gate {
        let mut gate = SubmitGate::new()?;
        let printers = vec![print_changes("submit", gate.subscribe())];
        feed(&gate).await?;
        tokio::time::sleep(DRAIN_MARGIN).await;
        gate.release();
        join(printers).await;
        println!("submit enabled: {}", gate.is_submit_enabled());
        return Ok(());
    }

    let config = settings::load(
        path,
        Overrides {
            debounce_ms: args.debounce_ms,
        },
    )?;
    let mut form = SignupForm::new(&config)?;

    let mut printers: Vec<_> = Field::ALL
        .into_iter()
        .map(|field| print_messages(field, form.subscribe_error(field)))
        .collect();
    printers.push(print_changes("valid", form.subscribe_validity()));

    feed(&form).await?;
    tokio::time::sleep(longest_window(&config) + DRAIN_MARGIN).await;
    form.release();
    join(printers).await;

    let verdict = form
        .is_form_valid()
        .map_or_else(|| "unknown".to_string(), |valid| valid.to_string());
    println!("form valid: {verdict}");
    Ok(())
}

async fn feed(target: &impl Target) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0;

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        line_no += 1;
        match Command::parse_line(line_no, &line)? {
            Some(Command::Set { field, value }) => target.set(field, &value)?,
            Some(Command::Wait(duration)) => tokio::time::sleep(duration).await,
            None => {}
        }
    }

    info!(lines = line_no, "input exhausted");
    Ok(())
}

fn longest_window(config: &FormConfig) -> Duration {
    Field::ALL
        .into_iter()
        .map(|field| config.field(field).debounce())
        .max()
        .unwrap_or_default()
}

fn print_messages(
    field: Field,
    mut rx: watch::Receiver<Option<&'static str>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let message = *rx.borrow_and_update();
            println!("{field}: {}", message.unwrap_or("ok"));
        }
    })
}

fn print_changes(label: &'static str, mut rx: watch::Receiver<Option<bool>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            if let Some(value) = *rx.borrow_and_update() {
                println!("{label}: {value}");
            }
        }
    })
}

async fn join(printers: Vec<JoinHandle<()>>) {
    for printer in printers {
        // printers end when the session drops its senders
        let _ = printer.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formflow_form::{Dedup, FieldConfig};

    #[test]
    fn test_longest_window() {
        let mut config = FormConfig::immediate();
        assert_eq!(longest_window(&config), Duration::ZERO);

        config.password = FieldConfig::new(750, Dedup::Off);
        assert_eq!(longest_window(&config), Duration::from_millis(750));
    }
}
