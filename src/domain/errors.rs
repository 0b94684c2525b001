// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Missing sources, missing keys and failed conversions are distinct variants so
//! callers can decide per variant whether a failure is fatal. Malformed lines in
//! a configuration file are never errors; the grammar skips them.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// # Examples
///
/// ```
/// use kvconf::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::ConfigKeyNotFound {
///         key: "database.host".to_string(),
///     })
/// }
///
/// assert!(matches!(lookup(), Err(ConfigError::ConfigKeyNotFound { .. })));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A typed read without a default asked for a key the store does not hold.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// A removal asked for a key the store does not hold.
    #[error("Cannot remove configuration key '{key}': key is not present")]
    KeyAbsentOnRemove {
        /// The key that was not present
        key: String,
    },

    /// A stored value could not be fully parsed as the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The backing file or stream could not be opened or read.
    #[error("Configuration source '{location}' unavailable: {message}")]
    SourceUnavailable {
        /// Path or name of the source
        location: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading lines from an open source.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `TypeConversionError` for target type `T`.
    pub fn conversion<T, E>(key: &str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::TypeConversionError {
            key: key.to_string(),
            target_type: std::any::type_name::<T>().to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a `SourceUnavailable` error wrapping an I/O failure.
    pub fn unavailable(
        location: impl Into<String>,
        message: impl Into<String>,
        err: std::io::Error,
    ) -> Self {
        ConfigError::SourceUnavailable {
            location: location.into(),
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    /// Returns `true` for errors a caller can recover from by falling back
    /// to a default.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, ConfigError::ConfigKeyNotFound { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
