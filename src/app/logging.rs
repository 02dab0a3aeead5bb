//! Logging configuration and initialization

use crate::app::config::AppConfig;
use crate::error::{DictError, ErrorCode, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install a global tracing subscriber configured from `config`
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_new(config.filter_directive()).map_err(|e| {
        DictError::config_with_code(
            ErrorCode::CONFIG_INVALID_FILTER,
            format!("invalid log filter '{}'", config.filter_directive()),
        )
        .with_source(e)
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(config.verbose >= 3)
        .with_line_number(config.verbose >= 3)
        .try_init()
        .map_err(|e| {
            DictError::config_with_code(
                ErrorCode::CONFIG_LOGGING_ALREADY_SET,
                "tracing subscriber already initialized",
            )
            .with_source(e)
        })?;

    debug!("dictmap logging initialized at verbosity {}", config.verbose);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = AppConfig::new(0).with_log_filter("dictmap=loudest");
        let err = init_logging(&config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_FILTER);
    }

    #[test]
    fn test_second_initialization_fails() {
        let config = AppConfig::new(2);

        init_logging(&config).unwrap();
        let err = init_logging(&config).unwrap_err();

        assert_eq!(err.code(), ErrorCode::CONFIG_LOGGING_ALREADY_SET);
    }
}
