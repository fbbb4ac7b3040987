//! Layered form configuration: defaults, then an optional TOML file, then
//! `FORMFLOW_` environment variables, then command-line flags.

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use formflow_form::FormConfig;

/// Environment prefix; nested keys use `__`, e.g.
/// `FORMFLOW_USERNAME__DEBOUNCE_MS=250`.
pub(crate) const ENV_PREFIX: &str = "FORMFLOW_";

/// Flag-level overrides applied on top of every other source.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Overrides {
    /// Debounce of the three text fields, in milliseconds.
    pub debounce_ms: Option<u64>,
}

pub(crate) fn figment(path: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(FormConfig::default()));
    if let Some(path) = path {
        figment = figment.merge(Toml::file_exact(path));
    }
    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Loads and validates the effective configuration.
pub(crate) fn load(path: Option<&Path>, overrides: Overrides) -> anyhow::Result<FormConfig> {
    let mut config: FormConfig = figment(path)
        .extract()
        .context("failed to load form configuration")?;

    if let Some(debounce_ms) = overrides.debounce_ms {
        config.username.debounce_ms = debounce_ms;
        config.security_code.debounce_ms = debounce_ms;
        config.password.debounce_ms = debounce_ms;
    }

    config.validate()?;
    tracing::debug!(?config, "form configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formflow_form::{Dedup, FieldConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_without_sources() {
        figment::Jail::expect_with(|_jail| {
            let config = load(None, Overrides::default()).map_err(|e| e.to_string())?;
            assert_eq!(config, FormConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_then_flags() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "form.toml",
                r#"
                [username]
                debounce_ms = 300
                dedup = "after_debounce"

                [confirm_password]
                debounce_ms = 0
                dedup = "off"
                "#,
            )?;
            jail.set_env("FORMFLOW_PASSWORD__DEBOUNCE_MS", "250");

            let path = Path::new("form.toml");
            let config = load(Some(path), Overrides::default()).map_err(|e| e.to_string())?;
            assert_eq!(config.username, FieldConfig::new(300, Dedup::AfterDebounce));
            assert_eq!(config.password.debounce_ms, 250);
            assert_eq!(config.confirm_password, FieldConfig::immediate());

            let flagged = load(
                Some(path),
                Overrides {
                    debounce_ms: Some(0),
                },
            )
            .map_err(|e| e.to_string())?;
            assert_eq!(flagged.username.debounce_ms, 0);
            assert_eq!(flagged.password.debounce_ms, 0);
            Ok(())
        });
    }

    #[test]
    fn test_partial_table_keeps_field_default() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "form.toml",
                r#"
                [confirm_password]
                dedup = "after_debounce"
                "#,
            )?;

            let config = load(Some(Path::new("form.toml")), Overrides::default())
                .map_err(|e| e.to_string())?;
            assert_eq!(
                config.confirm_password,
                FieldConfig::new(0, Dedup::AfterDebounce)
            );
            assert_eq!(config.username, FieldConfig::text());
            Ok(())
        });
    }

    #[test]
    fn test_rejects_out_of_range_debounce() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("FORMFLOW_USERNAME__DEBOUNCE_MS", "600000");
            assert!(load(None, Overrides::default()).is_err());
            Ok(())
        });
    }
}
