//! Application configuration
//!
//! Verbosity and log filtering for programs embedding dictmap.

use crate::error::{DictError, ErrorCode, Result};

/// Environment variable holding the verbosity level
pub const VERBOSE_ENV: &str = "DICTMAP_VERBOSE";

/// Environment variable holding a full log filter directive
pub const LOG_FILTER_ENV: &str = "DICTMAP_LOG";

/// Application configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Filter directive that replaces the verbosity-derived level
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            log_filter: None,
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let verbose = match lookup(VERBOSE_ENV) {
            Some(raw) => raw.trim().parse::<u8>().map_err(|e| {
                DictError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VERBOSITY,
                    format!("{} must be between 0 and 255, got '{}'", VERBOSE_ENV, raw),
                )
                .with_source(e)
            })?,
            None => 0,
        };

        let log_filter = lookup(LOG_FILTER_ENV).filter(|filter| !filter.trim().is_empty());

        Ok(Self {
            verbose,
            log_filter,
        })
    }

    /// Set the log filter directive
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// The directive handed to the tracing filter
    pub fn filter_directive(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(self.log_level())
    }
}
