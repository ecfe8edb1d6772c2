//! Reserved characters and reserved device names.
//!
//! This module holds the fixed tables that decide what a safe filename may
//! contain:
//! - Control codes `U+0000..=U+001F`
//! - The nine characters forbidden by Windows (`<>:"/\|?*`)
//! - Reserved device names (CON, PRN, AUX, NUL, COM1-9, LPT1-9)
//!
//! The rules are applied on **all platforms**: a name produced on Linux may
//! still end up on an NTFS volume or a FAT-formatted USB stick.
//!
//! # Examples
//!
//! ```
//! use legendary::sanitizer::{is_reserved_char, is_reserved_name};
//!
//! assert!(is_reserved_char('?'));
//! assert!(is_reserved_char('\u{1f}'));
//! assert!(!is_reserved_char('a'));
//!
//! assert!(is_reserved_name("con"));
//! assert!(is_reserved_name("LPT9.txt"));
//! assert!(!is_reserved_name("CONSOLE.txt"));
//! ```

/// Replacement for every character that is not allowed in a filename.
pub const SANITIZATION_TOKEN: char = '_';

/// Characters forbidden in filenames on Windows, in addition to control codes.
pub const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Reserved Windows device names, unusable as a file name with or without an extension.
pub const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Highest code point treated as a control code.
const LAST_CONTROL_CODE: char = '\u{1f}';

/// Returns `true` if `c` must be replaced by [`SANITIZATION_TOKEN`].
#[must_use]
pub fn is_reserved_char(c: char) -> bool {
    c <= LAST_CONTROL_CODE || RESERVED_CHARS.contains(&c)
}

/// Returns `true` if `filename`, extension excluded, is a reserved device name.
///
/// The comparison is case-insensitive. Only a dot after the first position
/// starts an extension, so `.CON` is not considered reserved while `CON.` is.
#[must_use]
pub fn is_reserved_name(filename: &str) -> bool {
    let stem = strip_extension(filename);
    RESERVED_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(stem))
}

/// Returns the part of `filename` before its last dot, if that dot is not the first character.
fn strip_extension(filename: &str) -> &str {
    match filename.find('.') {
        Some(first) if first > 0 => filename
            .rfind('.')
            .map_or(filename, |last| &filename[..last]),
        _ => filename,
    }
}

/// Replaces reserved characters and control codes, then trims the result.
///
/// Works on `char`s, so characters outside the Basic Multilingual Plane pass
/// through intact.
pub(crate) fn replace_reserved_chars(filename: &str) -> String {
    let replaced: String = filename
        .chars()
        .map(|c| {
            if is_reserved_char(c) {
                SANITIZATION_TOKEN
            } else {
                c
            }
        })
        .collect();

    trim(&replaced).to_string()
}

/// Prefixes the token when the (already substituted) filename is a reserved name.
pub(crate) fn escape_reserved_name(filename: String) -> String {
    if is_reserved_name(&filename) {
        let mut escaped = String::with_capacity(filename.len() + 1);
        escaped.push(SANITIZATION_TOKEN);
        escaped.push_str(&filename);
        escaped
    } else {
        filename
    }
}

/// Trims everything up to and including U+0020 from both ends.
pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}
