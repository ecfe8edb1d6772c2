//! Fuzz target for the word capitalizer.
//!
//! This fuzzer tests that:
//! 1. No input, delimiter set or locale tag causes a panic
//! 2. ASCII punctuation markers are emitted unchanged and in order
//! 3. Capitalizing ASCII text never changes its length
//!
//! Run with: `cargo +nightly fuzz run fuzz_capitalize_every_word`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use legendary::capitalizer::{Behavior, Capitalizer, Delimiter, Locale};

#[derive(Arbitrary, Debug)]
struct CapitalizeInput {
    text: String,
    delimiters: Vec<(u8, char)>,
    locale_tag: String,
}

impl CapitalizeInput {
    fn capitalizer(&self) -> Capitalizer {
        let delimiters = self.delimiters.iter().map(|&(behavior, marker)| {
            let behavior = match behavior % 3 {
                0 => Behavior::After,
                1 => Behavior::Before,
                _ => Behavior::BeforeAndAfter,
            };
            Delimiter::new(behavior, marker)
        });
        let locale = Locale::parse(&self.locale_tag).unwrap_or_default();
        Capitalizer::new().with_delimiters(delimiters).with_locale(locale)
    }
}

fuzz_target!(|data: CapitalizeInput| {
    let capitalizer = data.capitalizer();
    let output = capitalizer.capitalize(&data.text);

    let is_marker = |c: &char| capitalizer.delimiters().iter().any(|d| d.marker() == *c);
    // Case mapping can emit letters and combining marks, never ASCII punctuation
    let markers = |s: &str| {
        s.chars()
            .filter(|c| is_marker(c) && c.is_ascii() && !c.is_ascii_alphabetic())
            .collect::<String>()
    };
    assert_eq!(markers(&output), markers(&data.text));

    if data.text.is_ascii() {
        assert_eq!(output.len(), data.text.len());
        assert!(output.eq_ignore_ascii_case(&data.text));
    }
});
