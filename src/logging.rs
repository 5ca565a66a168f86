//! Tracing subscriber setup for the binary.
//!
//! Events go to stderr so stdout carries only the report.

use crate::error::{LoopError, Result};
use tracing_subscriber::EnvFilter;

/// How the global subscriber should behave.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Explicit filter directives. Takes precedence over `RUST_LOG`.
    pub directives: Option<String>,
    /// Used when neither `directives` nor `RUST_LOG` yields a filter.
    pub default_directive: String,
    pub ansi: bool,
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directives: None,
            default_directive: "warn".to_string(),
            ansi: true,
            include_targets: false,
        }
    }
}

impl LoggingConfig {
    fn resolve_filter(&self) -> Result<EnvFilter> {
        if let Some(directives) = &self.directives {
            return parse_filter(directives);
        }
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => parse_filter(&self.default_directive),
        }
    }
}

fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|err| LoopError::Tracing(err.to_string()))
}

/// Install the configured subscriber as the process-wide default.
///
/// Fails if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.resolve_filter()?)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(config.include_targets)
        .try_init()
        .map_err(|err| LoopError::Tracing(err.to_string()))
}
