//! Error types and result aliases for logweave operations.
//!
//! Provides a unified error type that covers every error condition surfaced
//! by configuration loading and merging, with actionable messages.

use thiserror::Error;

/// Unified error type for all logweave operations
#[derive(Error, Debug)]
pub enum LogweaveError {
    // Composition errors
    #[error("Composite configuration requires at least one source")]
    NoSources,

    // Source errors
    #[error("Configuration source '{locator}' could not be resolved")]
    UnresolvableLocator { locator: String },

    #[error("Failed to parse configuration '{locator}': {message}")]
    Parse { locator: String, message: String },

    #[error("Failed to render configuration '{target}': {message}")]
    Render { target: String, message: String },

    #[error("Unsupported configuration format '{extension}' for '{locator}'")]
    UnsupportedFormat { locator: String, extension: String },

    #[error("Attribute '{key}' has invalid value '{value}': {reason}")]
    InvalidAttribute {
        key: String,
        value: String,
        reason: String,
    },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for logweave operations
pub type LogweaveResult<T> = Result<T, LogweaveError>;

impl LogweaveError {
    /// Create a parse error for the given locator
    pub fn parse(locator: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            locator: locator.into(),
            message: message.to_string(),
        }
    }

    /// Create a render error for the element or value being written
    pub fn render(target: impl Into<String>, message: impl ToString) -> Self {
        Self::Render {
            target: target.into(),
            message: message.to_string(),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Check if this error is recoverable.
    ///
    /// Only an empty composite is fatal; every source-level failure can be
    /// absorbed by keeping the previously loaded tree.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LogweaveError::NoSources)
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            LogweaveError::NoSources => {
                Some("Pass at least one configuration document to compose")
            },
            LogweaveError::UnresolvableLocator { .. } => {
                Some("Check that the configuration file exists and is readable")
            },
            LogweaveError::UnsupportedFormat { .. } => {
                Some("Use a .json or .toml configuration document")
            },
            LogweaveError::Parse { .. } => {
                Some("Each element needs a 'name' and optional 'attributes' and 'children'")
            },
            _ => None,
        }
    }
}
