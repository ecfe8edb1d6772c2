//! Generated names for inputs that carry no usable filename.
//!
//! A placeholder looks like
//! `Filename-parameter-was-empty-at-time-1718000000000-rnd--4095834526203475000.unknown`:
//! the prefix records why it was generated, then come the wall-clock time in
//! milliseconds and a random `i64`. Every call samples the clock and the
//! thread-local RNG independently, so uniqueness is probabilistic.

use chrono::Utc;

/// Prefix of placeholders generated for an absent filename.
pub const FILENAME_NULL: &str = "Filename-parameter-was-null-at-time-";

/// Prefix of placeholders generated for an empty or whitespace-only filename.
pub const FILENAME_EMPTY: &str = "Filename-parameter-was-empty-at-time-";

/// Extension appended to every placeholder.
pub const EXTENSION_UNKNOWN: &str = ".unknown";

/// Separator between the timestamp and the random part.
const RANDOM_SEPARATOR: &str = "-rnd-";

/// Why a placeholder had to be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    Null,
    Empty,
}

impl Origin {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Null => FILENAME_NULL,
            Self::Empty => FILENAME_EMPTY,
        }
    }
}

/// Builds a fresh placeholder filename.
pub(crate) fn generate(origin: Origin) -> String {
    let millis = Utc::now().timestamp_millis();
    let random: i64 = rand::random();
    format!(
        "{}{millis}{RANDOM_SEPARATOR}{random}{EXTENSION_UNKNOWN}",
        origin.prefix()
    )
}
