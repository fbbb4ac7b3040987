//! Subscriber assembly

use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::{Config, Error, Format, Result};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parses the filter directive without installing anything.
    pub fn filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| Error::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber.
    ///
    /// Fails with [`Error::Init`] if a global subscriber is already set.
    pub fn build(self) -> Result<()> {
        let filter = self.filter()?;

        Registry::default()
            .with(self.format_layer())
            .with(filter)
            .try_init()
            .map_err(|e| Error::Init(e.to_string()))
    }

    fn format_layer(&self) -> BoxedLayer {
        let display = &self.config.display;
        let base = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source);

        match (self.config.format, display.time) {
            (Format::Pretty, true) => base.pretty().boxed(),
            (Format::Pretty, false) => base.pretty().without_time().boxed(),
            (Format::Compact, true) => base.compact().boxed(),
            (Format::Compact, false) => base.compact().without_time().boxed(),
            (Format::Json, true) => base.json().flatten_event(true).boxed(),
            (Format::Json, false) => base.json().flatten_event(true).without_time().boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_reported() {
        let builder = LoggerBuilder::from_config(Config {
            level: "formflow=loud".to_string(),
            ..Config::default()
        });
        match builder.filter() {
            Err(Error::Filter { filter, .. }) => assert_eq!(filter, "formflow=loud"),
            other => panic!("expected filter error, got {other:?}"),
        }
    }

    #[test]
    fn test_presets_parse() {
        for config in [Config::default(), Config::development(), Config::production()] {
            assert!(LoggerBuilder::from_config(config).filter().is_ok());
        }
    }
}
