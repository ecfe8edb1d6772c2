//! Filename sanitization for every modern file system.
//!
//! Disallowed characters are replaced with a safe token (an underscore):
//!
//! - control codes `U+0000` to `U+001F`
//! - `<` `>` `:` `"` `/` `\` `|` `?` `*`
//!
//! Leading and trailing whitespace is trimmed, and names matching a Windows
//! reserved device name (CON, PRN, AUX, NUL, COM1-9, LPT1-9), with or without
//! extension, are prefixed with the token.
//!
//! Three entry points form a strictness ladder:
//!
//! - [`sanitize`] rejects absent, blank and over-long input.
//! - [`sanitize_safely`] repairs it instead: absent or blank input becomes a
//!   generated placeholder, over-long input is truncated to [`MAX_LENGTH`].
//! - [`sanitize_prettily`] also strips trailing dots and spaces, then leading
//!   hyphens, dots and spaces (trailing dots upset Windows, leading hyphens
//!   read as command options, leading dots hide files on Unix).
//!
//! Lengths are counted in UTF-16 code units, the unit Windows uses for its
//! path limit (`MAX_PATH` is 260 and includes `C:\` plus the terminating NUL).
//!
//! # Examples
//!
//! ```
//! use legendary::sanitizer::{FILENAME_EMPTY, SanitizeError, sanitize, sanitize_prettily};
//!
//! assert_eq!(sanitize("report: Q1/Q2?.pdf").unwrap(), "report_ Q1_Q2_.pdf");
//! assert_eq!(sanitize("nul.txt").unwrap(), "_nul.txt");
//! assert_eq!(sanitize(None::<&str>), Err(SanitizeError::NullInput));
//!
//! assert_eq!(sanitize_prettily(" -- notes... ").as_str(), "notes");
//! assert!(sanitize_prettily("....").starts_with(FILENAME_EMPTY));
//! ```

mod error;
mod placeholder;
mod reserved;

use std::borrow::Cow;

use serde::Deserialize;
use tracing::{debug, error, warn};

pub use error::{InvalidFilename, SanitizeError};
pub use placeholder::{EXTENSION_UNKNOWN, FILENAME_EMPTY, FILENAME_NULL};
pub use reserved::{
    RESERVED_CHARS, RESERVED_NAMES, SANITIZATION_TOKEN, is_reserved_char, is_reserved_name,
};

use placeholder::Origin;
use reserved::{escape_reserved_name, replace_reserved_chars, trim};

/// Maximum filename length, in UTF-16 code units.
pub const MAX_LENGTH: usize = 256;

/// How much repair a sanitization is allowed to perform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Reject invalid input.
    Strict,
    /// Replace invalid input with a placeholder or a truncated copy.
    Safe,
    /// Like `Safe`, and strip risky leading/trailing characters.
    #[default]
    Pretty,
}

impl Mode {
    /// Lowercase name, as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Safe => "safe",
            Self::Pretty => "pretty",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Make the filename safe to be used on basically every modern file system.
///
/// # Errors
///
/// - [`SanitizeError::NullInput`] if `filename` is `None`
/// - [`SanitizeError::InvalidArgument`] if `filename` is empty, whitespace
///   only, or longer than [`MAX_LENGTH`] UTF-16 code units
///
/// # Examples
///
/// ```
/// use legendary::sanitizer::{InvalidFilename, SanitizeError, sanitize};
///
/// assert_eq!(sanitize("  a|b  ").unwrap(), "a_b");
/// assert_eq!(
///     sanitize(" "),
///     Err(SanitizeError::InvalidArgument(InvalidFilename::Blank))
/// );
/// ```
pub fn sanitize<'a>(filename: impl Into<Option<&'a str>>) -> Result<String, SanitizeError> {
    let input = filename.into();
    let Some(name) = input else {
        error!(reason = "null_input", "Filename was absent");
        return Err(SanitizeError::NullInput);
    };

    check_unsafe(name)?;
    Ok(finish(input, name))
}

/// Make the filename safe, generating or truncating it when it is invalid.
///
/// Never fails: an absent or blank filename is replaced by a placeholder
/// starting with [`FILENAME_NULL`] or [`FILENAME_EMPTY`], and an over-long
/// one is cut to its first [`MAX_LENGTH`] UTF-16 code units.
pub fn sanitize_safely<'a>(filename: impl Into<Option<&'a str>>) -> String {
    let input = filename.into();
    let safe = make_safe(input);
    finish(input, &safe)
}

/// Like [`sanitize_safely`], and also strip trailing dots and spaces, then
/// leading hyphens, dots and spaces.
///
/// If nothing is left after stripping, a [`FILENAME_EMPTY`] placeholder is
/// generated.
pub fn sanitize_prettily<'a>(filename: impl Into<Option<&'a str>>) -> String {
    let input = filename.into();
    let pretty = make_pretty(&make_safe(input));
    finish(input, &pretty)
}

/// Sanitize with the strictness selected at runtime.
///
/// # Errors
///
/// Only in [`Mode::Strict`], under the same conditions as [`sanitize`].
pub fn sanitize_with<'a>(
    filename: impl Into<Option<&'a str>>,
    mode: Mode,
) -> Result<String, SanitizeError> {
    match mode {
        Mode::Strict => sanitize(filename),
        Mode::Safe => Ok(sanitize_safely(filename)),
        Mode::Pretty => Ok(sanitize_prettily(filename)),
    }
}

/// Shared tail of every mode: character replacement, then reserved names.
fn finish(input: Option<&str>, name: &str) -> String {
    debug_assert!(check_unsafe(name).is_ok(), "unsafe name reached the rewrite: {name:?}");

    let output = escape_reserved_name(replace_reserved_chars(name));
    debug!(input = ?input, output = %output, "Filename sanitized");
    output
}

fn check_unsafe(name: &str) -> Result<(), InvalidFilename> {
    if trim(name).is_empty() {
        error!(reason = "blank", "Input string has zero non-whitespace characters");
        return Err(InvalidFilename::Blank);
    }

    let length = utf16_len(name);
    if length > MAX_LENGTH {
        error!(
            reason = "too_long",
            length,
            max_len = MAX_LENGTH,
            "Input string is too long"
        );
        return Err(InvalidFilename::TooLong {
            length,
            max: MAX_LENGTH,
        });
    }

    Ok(())
}

fn make_safe(input: Option<&str>) -> Cow<'_, str> {
    match input {
        None => {
            let placeholder = placeholder::generate(Origin::Null);
            warn!(
                reason = "null_input",
                placeholder = %placeholder,
                "Filename was null, and a safe, unique filename has been generated"
            );
            Cow::Owned(placeholder)
        },
        // Truncate before the blank check: a long run of leading whitespace
        // can leave nothing else once cut
        Some(name) => handle_empty(handle_max_length(Cow::Borrowed(name))),
    }
}

fn make_pretty(name: &str) -> String {
    let stripped = name
        .trim_end_matches(['.', ' '])
        .trim_start_matches(['-', '.', ' ']);
    handle_empty(Cow::Borrowed(trim(stripped))).into_owned()
}

fn handle_empty(name: Cow<'_, str>) -> Cow<'_, str> {
    if trim(&name).is_empty() {
        let placeholder = placeholder::generate(Origin::Empty);
        warn!(
            reason = "empty_input",
            placeholder = %placeholder,
            "Filename was empty, and a safe, unique filename has been generated"
        );
        Cow::Owned(placeholder)
    } else {
        name
    }
}

fn handle_max_length(name: Cow<'_, str>) -> Cow<'_, str> {
    let original_len = utf16_len(&name);
    if original_len <= MAX_LENGTH {
        return name;
    }

    let shortened = truncate_utf16(&name, MAX_LENGTH).to_string();
    warn!(
        original_len,
        max_len = MAX_LENGTH,
        shortened = %shortened,
        "Filename proposed was too long, and it has been shortened"
    );
    Cow::Owned(shortened)
}

fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Longest prefix of whole characters fitting in `max` UTF-16 code units.
fn truncate_utf16(s: &str, max: usize) -> &str {
    let mut units = 0;
    for (idx, c) in s.char_indices() {
        units += c.len_utf16();
        if units > max {
            return &s[..idx];
        }
    }
    s
}
