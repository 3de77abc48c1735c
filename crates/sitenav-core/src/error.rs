//! Error types for the sitenav core library.

use thiserror::Error;

/// Result type alias using `NavError`.
pub type Result<T> = std::result::Result<T, NavError>;

/// Errors raised while setting up section navigation.
///
/// Navigation itself never fails: an unknown section is a silent no-op.
/// These variants only cover configuration and page binding.
#[derive(Error, Debug)]
pub enum NavError {
    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A section group name that cannot be addressed by the id scheme.
    #[error("Invalid group '{name}': {reason}")]
    InvalidGroup { name: String, reason: String },

    /// The browser document could not be reached.
    #[error("DOM error: {0}")]
    Dom(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl NavError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new invalid group error.
    pub fn invalid_group(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGroup {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new DOM error.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }
}
