//! Configuration for the `legendary` command-line front end.
//!
//! Settings are read (never written) from a TOML file:
//!
//! ```toml
//! [sanitizer]
//! mode = "pretty"            # strict | safe | pretty
//!
//! [capitalizer]
//! locale = "tr-TR"           # BCP-47 tag, root locale when absent
//!
//! [[capitalizer.delimiters]]
//! behavior = "after"         # after | before | before_and_after
//! marker = " "
//! ```
//!
//! - [`Config`] - Root configuration struct
//! - [`SanitizerConfig`] - Default sanitization mode
//! - [`CapitalizerConfig`] - Delimiters and locale, convertible into a [`Capitalizer`]
//!
//! Every section is optional; an empty file yields the defaults.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::capitalizer::{Behavior, Capitalizer, Delimiter, Locale, single_char};
use crate::error::{Error, Result};
use crate::sanitizer::Mode;

/// File looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "legendary.toml";

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Non-fatal warnings that should be logged but don't prevent operation.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Returns true if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// legendary.toml configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub sanitizer: SanitizerConfig,
    #[serde(default)]
    pub capitalizer: CapitalizerConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SanitizerConfig {
    #[serde(default)]
    pub mode: Mode,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapitalizerConfig {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub delimiters: Vec<DelimiterConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DelimiterConfig {
    pub behavior: Behavior,
    /// Exactly one character.
    pub marker: String,
}

impl Config {
    /// Load `legendary.toml` from the current directory, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Option<Self>> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file found, using defaults");
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    /// Load configuration from the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (IO error)
    /// - The file contains invalid TOML syntax
    /// - Required fields are missing, unknown, or have invalid types
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("reading {}", path.display()), e))?;

        let config = parse(&content, &path.display().to_string())?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Validate configuration with comprehensive checks.
    ///
    /// Returns a `ValidationResult` containing any non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if a marker is not exactly one character or the
    /// locale tag cannot be parsed.
    pub fn validate(&self) -> Result<ValidationResult> {
        let mut result = ValidationResult::default();
        let delimiters = self.capitalizer.delimiters()?;
        self.capitalizer.locale()?;

        let mut seen = HashSet::new();
        for delimiter in &delimiters {
            if !seen.insert(delimiter.marker()) {
                result.warnings.push(format!(
                    "marker {:?} is declared more than once; its behaviors are combined",
                    delimiter.marker()
                ));
            }
        }

        Ok(result)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s, "configuration string")
    }
}

fn parse(content: &str, origin: &str) -> Result<Config> {
    toml::from_str(content).map_err(|source| Error::TomlParse {
        origin: origin.to_string(),
        source,
    })
}

impl CapitalizerConfig {
    /// Configured delimiters, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a marker is not exactly one character.
    pub fn delimiters(&self) -> Result<Vec<Delimiter>> {
        self.delimiters
            .iter()
            .map(|d| {
                single_char(&d.marker)
                    .map(|marker| Delimiter::new(d.behavior, marker))
                    .ok_or_else(|| {
                        Error::config(format!(
                            "delimiter marker {:?} must be exactly one character",
                            d.marker
                        ))
                    })
            })
            .collect()
    }

    /// Configured locale, root when absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Locale`] if the tag cannot be parsed.
    pub fn locale(&self) -> Result<Locale> {
        match &self.locale {
            Some(tag) => Ok(Locale::parse(tag)?),
            None => Ok(Locale::root()),
        }
    }

    /// Build a [`Capitalizer`] from these settings.
    ///
    /// # Errors
    ///
    /// Same as [`delimiters`](Self::delimiters) and [`locale`](Self::locale).
    pub fn build(&self) -> Result<Capitalizer> {
        Ok(Capitalizer::new()
            .with_delimiters(self.delimiters()?)
            .with_locale(self.locale()?))
    }
}
