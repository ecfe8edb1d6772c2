//! Case-mapping locale.
//!
//! Only the language subtag affects case mapping. Turkish (`tr`) and Azeri
//! (`az`) fold `I`/`i` differently from every other language, and Lithuanian
//! (`lt`) keeps combining dots above lowercase `i`.

use std::fmt;
use std::str::FromStr;

use icu_locale_core::{LanguageIdentifier, langid};
use thiserror::Error;

/// A BCP-47 language tag could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid locale '{tag}': {reason}")]
pub struct LocaleError {
    pub tag: String,
    pub reason: String,
}

/// Locale used to pick language-specific case mappings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(LanguageIdentifier);

impl Locale {
    /// The root locale: plain Unicode case mapping, no language tailoring.
    #[must_use]
    pub fn root() -> Self {
        Self(langid!("und"))
    }

    /// Turkish, where `I` lowercases to `ı` and `i` uppercases to `İ`.
    #[must_use]
    pub fn turkish() -> Self {
        Self(langid!("tr"))
    }

    /// Parses a BCP-47 tag such as `tr-TR`, `az` or `und`.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the tag is not well formed.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        tag.parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|e| LocaleError {
                tag: tag.to_string(),
                reason: e.to_string(),
            })
    }

    pub(crate) fn language_identifier(&self) -> &LanguageIdentifier {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::root()
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(id: LanguageIdentifier) -> Self {
        Self(id)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(Locale::parse("tr").unwrap(), Locale::turkish());
        assert_eq!(Locale::parse("und").unwrap(), Locale::root());
        assert_eq!(Locale::parse("tr-TR").unwrap().to_string(), "tr-TR");
        assert_eq!(Locale::default(), Locale::root());
    }

    #[test]
    fn test_parse_invalid_tag() {
        let err = Locale::parse("not a locale!").unwrap_err();
        assert_eq!(err.tag, "not a locale!");
        assert!(err.to_string().starts_with("invalid locale 'not a locale!'"));
    }
}
