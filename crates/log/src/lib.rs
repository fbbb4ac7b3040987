//! # formflow-log
//!
//! Logging bootstrap shared by the formflow binaries and test harnesses.
//! Library crates log through `tracing` directly; only executables call
//! [`init`] / [`init_with`].
//!
//! ```rust,no_run
//! fn main() -> Result<(), formflow_log::Error> {
//!     formflow_log::init_with(formflow_log::Config::development())?;
//!     formflow_log::info!(field = "username", "session started");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for logger operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filter parsing error
    #[error("Invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected filter directive
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed
    #[error("Logger initialization failed: {0}")]
    Init(String),
}

/// Initialize from `FORMFLOW_LOG` / `RUST_LOG` and `FORMFLOW_LOG_FORMAT`.
pub fn init() -> Result<()> {
    init_with(Config::from_env())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> Result<()> {
    LoggerBuilder::from_config(config).build()
}
