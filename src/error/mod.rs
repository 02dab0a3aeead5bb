use std::fmt::Display;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for dictmap
#[derive(Error, Debug)]
pub enum DictError {
    #[error("[E{code:04}] Parse error: {message}")]
    Parse {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Serialization error: {message}")]
    Serialize {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        key: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DictError {
    /// Create a parse error with default code
    pub fn parse(message: impl Into<String>) -> Self {
        Self::parse_with_code(ErrorCode::PARSE_GENERIC, message)
    }

    /// Create a parse error with specific code
    pub fn parse_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Parse {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a serialization error with specific code
    pub fn serialize_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Serialize {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a validation error with default code
    pub fn validation(message: impl Into<String>) -> Self {
        Self::validation_with_code(ErrorCode::VALIDATION_GENERIC, message, None)
    }

    /// Create a validation error with specific code and offending key
    pub fn validation_with_code(code: u16, message: impl Into<String>, key: Option<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            key,
            source: None,
        }
    }

    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message)
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Parse { source: src, .. }
            | Self::Serialize { source: src, .. }
            | Self::Validation { source: src, .. }
            | Self::Config { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Parse { message, .. }
            | Self::Serialize { message, .. }
            | Self::Validation { message, .. }
            | Self::Config { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Parse { code, .. }
            | Self::Serialize { code, .. }
            | Self::Validation { code, .. }
            | Self::Config { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse { message, .. } => format!("Could not read dictionary: {}", message),
            Self::Serialize { message, .. } => {
                format!("Could not write dictionary: {}", message)
            }
            Self::Validation { message, key, .. } => {
                if let Some(k) = key {
                    format!("Invalid entry '{}': {}", k, message)
                } else {
                    format!("Invalid entries: {}", message)
                }
            }
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
        }
    }

    /// The key an error refers to, when there is one
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Validation { key, .. } => key.as_deref(),
            _ => None,
        }
    }
}

/// Type alias for Results using DictError
pub type Result<T> = std::result::Result<T, DictError>;

impl From<serde_json::Error> for DictError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let (code, message) = match err.classify() {
            Category::Syntax | Category::Eof => (ErrorCode::PARSE_INVALID_JSON, "Invalid JSON syntax"),
            Category::Data => (ErrorCode::PARSE_INVALID_SHAPE, "Unexpected JSON shape"),
            Category::Io => (ErrorCode::PARSE_GENERIC, "Failed to read JSON input"),
        };

        DictError::parse_with_code(code, message).with_source(err)
    }
}
