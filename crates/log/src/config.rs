//! Logger configuration and presets

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directive (e.g. "info", "formflow_form=debug,warn")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Display configuration
    pub display: DisplayConfig,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable multi-line output
    Pretty,
    /// Compact single-line output
    #[default]
    Compact,
    /// Structured JSON output
    Json,
}

impl Format {
    /// Parses a format name; unknown names fall back to [`Format::Compact`].
    #[must_use]
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "pretty" => Format::Pretty,
            "json" => Format::Json,
            _ => Format::Compact,
        }
    }
}

/// What each event line shows besides the message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DisplayConfig {
    /// ANSI colors
    pub colors: bool,
    /// Timestamps
    pub time: bool,
    /// Event target (module path)
    pub target: bool,
    /// Source file and line
    pub source: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: true,
            time: true,
            target: true,
            source: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            display: DisplayConfig::default(),
        }
    }
}

fn flag(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false")
}

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// `FORMFLOW_LOG` wins over `RUST_LOG`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("FORMFLOW_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }
        if let Some(format) = lookup("FORMFLOW_LOG_FORMAT") {
            config.format = Format::parse_lossy(&format);
        }
        if let Some(v) = lookup("FORMFLOW_LOG_TIME") {
            config.display.time = flag(&v);
        }
        if let Some(v) = lookup("FORMFLOW_LOG_COLORS") {
            config.display.colors = flag(&v);
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                ..DisplayConfig::default()
            },
        }
    }
}
