//! Filename sanitization and locale-aware word capitalization.
//!
//! Two independent, stateless text utilities:
//!
//! - [`sanitizer`] - rewrites arbitrary strings into names that are safe on
//!   every common file system, in strict, safe or pretty mode
//! - [`capitalizer`] - title-cases words according to configurable delimiter
//!   characters, with ICU4X case mapping per locale
//!
//! Supporting modules:
//!
//! - [`config`] - read-only TOML settings for the command-line front end
//! - [`error`] - crate-level error type
//!
//! Diagnostics go through [`tracing`]; without a subscriber they cost nothing.
//!
//! # Examples
//!
//! ```
//! use legendary::capitalizer::capitalize_every_word;
//! use legendary::sanitizer::sanitize_prettily;
//!
//! let title = capitalize_every_word("the QUICK brown fox");
//! assert_eq!(title, "The Quick Brown Fox");
//! assert_eq!(sanitize_prettily(format!("{title}: part 1/2.").as_str()), "The Quick Brown Fox_ part 1_2");
//! ```

pub mod capitalizer;
#[cfg(feature = "cli")]
pub mod commands;
pub mod config;
pub mod error;
pub mod sanitizer;

pub use capitalizer::{
    Behavior, Capitalizer, Delimiter, Locale, capitalize_every_word, capitalize_every_word_in,
    capitalize_every_word_with,
};
pub use error::{Error, Result};
pub use sanitizer::{Mode, SanitizeError, sanitize, sanitize_prettily, sanitize_safely, sanitize_with};
