//! Delimiter rules driving capitalization.

use serde::Deserialize;

/// Which neighbour of a marker gets capitalized.
///
/// The discriminants are part of the public contract and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Behavior {
    /// Capitalize the letter right after the marker.
    #[serde(alias = "capitalize_after_marker")]
    After = 0,
    /// Capitalize the letter right before the marker.
    #[serde(alias = "capitalize_before_marker")]
    Before = 1,
    /// Capitalize the letters on both sides of the marker.
    #[serde(alias = "capitalize_before_and_after_marker", alias = "both")]
    BeforeAndAfter = 2,
}

impl Behavior {
    /// Stable numeric value: 0 for after, 1 for before, 2 for both.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn capitalizes_before(self) -> bool {
        matches!(self, Self::Before | Self::BeforeAndAfter)
    }

    #[must_use]
    pub const fn capitalizes_after(self) -> bool {
        matches!(self, Self::After | Self::BeforeAndAfter)
    }
}

impl std::str::FromStr for Behavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "after" => Ok(Self::After),
            "before" => Ok(Self::Before),
            "both" | "before_and_after" => Ok(Self::BeforeAndAfter),
            other => Err(format!(
                "unknown delimiter behavior '{other}' (expected after, before or both)"
            )),
        }
    }
}

/// A marker character and what it does to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter {
    behavior: Behavior,
    marker: char,
}

impl Delimiter {
    #[must_use]
    pub const fn new(behavior: Behavior, marker: char) -> Self {
        Self { behavior, marker }
    }

    /// Shorthand for `Delimiter::new(Behavior::After, marker)`.
    #[must_use]
    pub const fn after(marker: char) -> Self {
        Self::new(Behavior::After, marker)
    }

    /// Shorthand for `Delimiter::new(Behavior::Before, marker)`.
    #[must_use]
    pub const fn before(marker: char) -> Self {
        Self::new(Behavior::Before, marker)
    }

    /// Shorthand for `Delimiter::new(Behavior::BeforeAndAfter, marker)`.
    #[must_use]
    pub const fn before_and_after(marker: char) -> Self {
        Self::new(Behavior::BeforeAndAfter, marker)
    }

    #[must_use]
    pub const fn behavior(&self) -> Behavior {
        self.behavior
    }

    #[must_use]
    pub const fn marker(&self) -> char {
        self.marker
    }
}

/// Parses `after:C`, `before:C` or `both:C`, where `C` is a single character.
///
/// ```
/// use legendary::capitalizer::{Behavior, Delimiter};
///
/// let d: Delimiter = "both:#".parse().unwrap();
/// assert_eq!(d.behavior(), Behavior::BeforeAndAfter);
/// assert_eq!(d.marker(), '#');
/// assert!("after:ab".parse::<Delimiter>().is_err());
/// ```
impl std::str::FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (behavior, marker) = s
            .split_once(':')
            .ok_or_else(|| format!("delimiter '{s}' must look like <behavior>:<char>"))?;
        let behavior = behavior.parse()?;
        let marker = single_char(marker)
            .ok_or_else(|| format!("delimiter marker '{marker}' must be exactly one character"))?;
        Ok(Self::new(behavior, marker))
    }
}

/// Returns the only character of `s`, if it has exactly one.
pub(crate) fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Capitalize after ASCII whitespace: space, tab, line feed, carriage return, form feed.
pub const DEFAULT_DELIMITERS: &[Delimiter] = &[
    Delimiter::after(' '),
    Delimiter::after('\t'),
    Delimiter::after('\n'),
    Delimiter::after('\r'),
    Delimiter::after('\u{c}'),
];
