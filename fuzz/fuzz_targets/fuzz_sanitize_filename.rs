//! Fuzz target for the filename sanitizer.
//!
//! This fuzzer tests that:
//! 1. No input causes a panic in any mode
//! 2. Every produced name is free of reserved characters and non-empty
//! 3. Safe and pretty names fit the length limit unless a reserved name was escaped
//! 4. Strict mode only rejects absent, blank or over-long input
//!
//! Run with: `cargo +nightly fuzz run fuzz_sanitize_filename`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use legendary::sanitizer::{
    is_reserved_char, is_reserved_name, sanitize, sanitize_prettily, sanitize_safely,
    SanitizeError, MAX_LENGTH, RESERVED_NAMES,
};

/// Structured input for more targeted fuzzing.
#[derive(Arbitrary, Debug)]
struct FilenameInput {
    /// Raw filename, `None` for an absent one
    name: Option<String>,
    /// Prefix a reserved device name
    reserved_prefix: Option<u8>,
    /// Pad with this many leading hyphens and trailing dots
    padding: u8,
}

impl FilenameInput {
    /// Build the final filename for testing.
    fn build(&self) -> Option<String> {
        let name = self.name.as_ref()?;
        let mut result = String::new();
        result.push_str(&"-".repeat(usize::from(self.padding)));
        if let Some(index) = self.reserved_prefix {
            result.push_str(RESERVED_NAMES[usize::from(index) % RESERVED_NAMES.len()]);
        }
        result.push_str(name);
        result.push_str(&".".repeat(usize::from(self.padding)));
        Some(result)
    }
}

fn check_output(output: &str, input: Option<&str>) {
    assert!(!output.is_empty(), "empty output for {input:?}");
    assert!(
        !output.chars().any(is_reserved_char),
        "reserved char in {output:?} for {input:?}"
    );
    assert!(!is_reserved_name(output), "reserved name {output:?} for {input:?}");
}

fuzz_target!(|data: FilenameInput| {
    let built = data.build();
    let input = built.as_deref();

    match sanitize(input) {
        Ok(output) => check_output(&output, input),
        Err(SanitizeError::NullInput) => assert!(input.is_none()),
        Err(SanitizeError::InvalidArgument(_)) => {
            let name = input.unwrap_or_default();
            assert!(
                name.chars().all(|c| c <= ' ') || name.encode_utf16().count() > MAX_LENGTH,
                "strict mode rejected {name:?}"
            );
        },
    }

    for output in [sanitize_safely(input), sanitize_prettily(input)] {
        check_output(&output, input);
        // Escaping a reserved name adds one token
        assert!(output.encode_utf16().count() <= MAX_LENGTH + 1);
    }
});
