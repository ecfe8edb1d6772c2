//! Word capitalization driven by delimiter characters.
//!
//! A [`Delimiter`] pairs a marker character with a [`Behavior`]: capitalize
//! the letter after the marker, the letter before it, or both. The first
//! letter of the text is always capitalized; every other letter is lowercased
//! unless a delimiter says otherwise. Markers themselves are never altered.
//!
//! Case mapping is locale aware and delegated to ICU4X, so Turkish dotted and
//! dotless `i`, Greek final sigma and characters outside the Basic
//! Multilingual Plane come out right.
//!
//! # Examples
//!
//! ```
//! use legendary::capitalizer::{Capitalizer, Delimiter, Locale, capitalize_every_word};
//!
//! assert_eq!(
//!     capitalize_every_word("cApItAlIzE this string after WHITE SPACES"),
//!     "Capitalize This String After White Spaces"
//! );
//!
//! let capitalizer = Capitalizer::new()
//!     .with_delimiters([Delimiter::after(' '), Delimiter::before_and_after('-')])
//!     .with_locale(Locale::turkish());
//! assert_eq!(capitalizer.capitalize("iSTANBUL-izmir"), "İstanbuL-İzmir");
//! ```

mod delimiter;
mod locale;

use std::borrow::Cow;

use icu_casemap::{CaseMapper, CaseMapperBorrowed};
use icu_locale_core::LanguageIdentifier;
use tracing::trace;

pub use delimiter::{Behavior, DEFAULT_DELIMITERS, Delimiter};
pub use locale::{Locale, LocaleError};

pub(crate) use delimiter::single_char;

/// Capitalize the first letter of every whitespace-separated word, root locale.
#[must_use]
pub fn capitalize_every_word(input: &str) -> String {
    Capitalizer::new().capitalize(input)
}

/// Capitalize every whitespace-separated word using the given locale's case rules.
#[must_use]
pub fn capitalize_every_word_in(input: &str, locale: &Locale) -> String {
    capitalize_words(input, DEFAULT_DELIMITERS, locale.language_identifier())
}

/// Capitalize with explicit delimiters and locale.
///
/// An empty `delimiters` slice means [`DEFAULT_DELIMITERS`]; `None` means
/// the root locale.
#[must_use]
pub fn capitalize_every_word_with(
    input: &str,
    delimiters: &[Delimiter],
    locale: Option<&Locale>,
) -> String {
    let delimiters = if delimiters.is_empty() {
        DEFAULT_DELIMITERS
    } else {
        delimiters
    };
    let root = Locale::root();
    let locale = locale.unwrap_or(&root);
    capitalize_words(input, delimiters, locale.language_identifier())
}

/// Reusable capitalization settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capitalizer {
    delimiters: Cow<'static, [Delimiter]>,
    locale: Locale,
}

impl Default for Capitalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Capitalizer {
    /// Whitespace delimiters, root locale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiters: Cow::Borrowed(DEFAULT_DELIMITERS),
            locale: Locale::root(),
        }
    }

    /// Replaces the delimiter set. An empty set restores the defaults.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: impl IntoIterator<Item = Delimiter>) -> Self {
        let delimiters: Vec<Delimiter> = delimiters.into_iter().collect();
        self.delimiters = if delimiters.is_empty() {
            Cow::Borrowed(DEFAULT_DELIMITERS)
        } else {
            Cow::Owned(delimiters)
        };
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn delimiters(&self) -> &[Delimiter] {
        &self.delimiters
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    #[must_use]
    pub fn capitalize(&self, input: &str) -> String {
        capitalize_words(input, &self.delimiters, self.locale.language_identifier())
    }
}

/// How a character acts as a marker, once every delimiter sharing it is merged.
#[derive(Debug, Clone, Copy, Default)]
struct MarkerEffect {
    before: bool,
    after: bool,
}

fn marker_effect(delimiters: &[Delimiter], c: char) -> Option<MarkerEffect> {
    delimiters
        .iter()
        .filter(|d| d.marker() == c)
        .fold(None, |acc: Option<MarkerEffect>, d| {
            let acc = acc.unwrap_or_default();
            Some(MarkerEffect {
                before: acc.before || d.behavior().capitalizes_before(),
                after: acc.after || d.behavior().capitalizes_after(),
            })
        })
}

fn capitalize_words(input: &str, delimiters: &[Delimiter], langid: &LanguageIdentifier) -> String {
    let mut output = String::with_capacity(input.len());
    // Text awaiting lowercasing, mapped in one go so contextual rules see neighbours
    let mut pending = String::new();
    let mut capitalize_next = true;
    let mut chars = input.chars().peekable();
    let case_mapper = CaseMapper::new();

    while let Some(c) = chars.next() {
        if let Some(effect) = marker_effect(delimiters, c) {
            flush_lowercase(&case_mapper, &mut output, &mut pending, langid);
            output.push(c);
            capitalize_next |= effect.after;
            continue;
        }

        if !c.is_alphabetic() {
            pending.push(c);
            continue;
        }

        let precedes_marker = chars
            .peek()
            .and_then(|&next| marker_effect(delimiters, next))
            .is_some_and(|effect| effect.before);

        if capitalize_next || precedes_marker {
            flush_lowercase(&case_mapper, &mut output, &mut pending, langid);
            let mut buf = [0; 4];
            output.push_str(&case_mapper.uppercase_to_string(c.encode_utf8(&mut buf), langid));
            capitalize_next = false;
        } else {
            pending.push(c);
        }
    }
    flush_lowercase(&case_mapper, &mut output, &mut pending, langid);

    trace!(input = %input, output = %output, locale = %langid, "Words capitalized");
    output
}

fn flush_lowercase(
    case_mapper: &CaseMapperBorrowed<'_>,
    output: &mut String,
    pending: &mut String,
    langid: &LanguageIdentifier,
) {
    if pending.is_empty() {
        return;
    }
    output.push_str(&case_mapper.lowercase_to_string(pending.as_str(), langid));
    pending.clear();
}
