//! Crate-level error types.
//!
//! The text transforms report their own narrow errors
//! ([`SanitizeError`], [`LocaleError`]); this type gathers them together
//! with configuration and I/O failures for callers that deal with all of them.

use crate::capitalizer::LocaleError;
use crate::sanitizer::SanitizeError;

/// Result type for configuration and front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors with structured context.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Strict sanitization rejected a filename.
    #[error(transparent)]
    Sanitize(#[from] SanitizeError),

    /// A locale tag could not be parsed.
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// Configuration is well-formed TOML but semantically invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file is not valid TOML for the expected schema.
    #[error("failed to parse {origin}: {source}")]
    TomlParse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// IO error with context.
    #[error("IO error in {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }
}
