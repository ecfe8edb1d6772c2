//! Filename sanitizer tests.
//!
//! Exercises the three sanitization modes through the public API only.
//!
//! ```bash
//! cargo test --test sanitizer_tests
//! ```

use legendary::sanitizer::{
    FILENAME_EMPTY, FILENAME_NULL, InvalidFilename, MAX_LENGTH, Mode, RESERVED_CHARS,
    RESERVED_NAMES, SanitizeError, sanitize, sanitize_prettily, sanitize_safely, sanitize_with,
};

const CHARS_16: &str = "1234567890abcdef";

// =============================================================================
// Pass-through
// =============================================================================

#[test]
fn test_sanitize_multilingual_input_unchanged() {
    let names = [
        "This is an English document.txt",
        "Questo è un documento Italiano.txt",
        "Это российский документ.txt",
        "这是一个中文文档.txt",
        "यह एक हिंदी दस्तावेज़ है.txt",
        "هذه وثيقة عربية.txt",
    ];
    for name in names {
        assert_eq!(sanitize(name).unwrap(), name);
    }
}

#[test]
fn test_sanitize_surrogate_pair_unchanged() {
    let name = "This is a document with a Surrogate Pair (\u{10402}) in it.txt";
    assert_eq!(sanitize(name).unwrap(), name);
}

// =============================================================================
// Character replacement
// =============================================================================

#[test]
fn test_sanitize_control_codes_replaced_with_underscore() {
    for code in 0u32..32 {
        let c = char::from_u32(code).unwrap();
        assert_eq!(
            sanitize(format!("A filename with control code n.{code}[{c}]").as_str()).unwrap(),
            format!("A filename with control code n.{code}[_]")
        );
    }
}

#[test]
fn test_sanitize_reserved_chars_replaced_with_underscore() {
    let cases = [
        ("A filename with a [<] less-than sign", "A filename with a [_] less-than sign"),
        ("A filename with a [>] more-than sign", "A filename with a [_] more-than sign"),
        ("A filename with a [:] colon", "A filename with a [_] colon"),
        ("A filename with a [\"] quotation marks", "A filename with a [_] quotation marks"),
        ("A filename with a [/] slash", "A filename with a [_] slash"),
        ("A filename with a [\\] backslash", "A filename with a [_] backslash"),
        ("A filename with a [|] vertical bar", "A filename with a [_] vertical bar"),
        ("A filename with a [?] question mark", "A filename with a [_] question mark"),
        ("A filename with a [*] asterisk", "A filename with a [_] asterisk"),
    ];
    assert_eq!(cases.len(), RESERVED_CHARS.len());
    for (input, expected) in cases {
        assert_eq!(sanitize(input).unwrap(), expected);
    }
}

#[test]
fn test_sanitize_trims_surrounding_spaces() {
    assert_eq!(sanitize("   padded name.txt  ").unwrap(), "padded name.txt");
}

// =============================================================================
// Reserved names
// =============================================================================

#[test]
fn test_sanitize_reserved_names_prefixed_with_underscore() {
    assert_eq!(RESERVED_NAMES.len(), 22);
    for name in RESERVED_NAMES {
        assert_eq!(sanitize(*name).unwrap(), format!("_{name}"));
        assert_eq!(
            sanitize(format!("{name}.txt").as_str()).unwrap(),
            format!("_{name}.txt")
        );
    }
}

#[test]
fn test_sanitize_reserved_name_detected_after_replacement() {
    // Trailing control code becomes '_' so "AUX_" is no longer reserved
    assert_eq!(sanitize("AUX\u{7}").unwrap(), "AUX_");
    // Surrounding spaces are trimmed before the reserved-name check
    assert_eq!(sanitize("  lpt1.doc ").unwrap(), "_lpt1.doc");
}

// =============================================================================
// Length and emptiness
// =============================================================================

#[test]
fn test_sanitize_too_long_returns_error() {
    let max = CHARS_16.repeat(16);
    let over = CHARS_16.repeat(17);

    assert_eq!(sanitize(max.as_str()).unwrap(), max);
    assert!(matches!(
        sanitize(over.as_str()),
        Err(SanitizeError::InvalidArgument(InvalidFilename::TooLong { length: 272, max: MAX_LENGTH }))
    ));
}

#[test]
fn test_sanitize_safely_too_long_is_shortened() {
    let max = CHARS_16.repeat(16);
    let over = CHARS_16.repeat(17);

    assert_eq!(sanitize_safely(over.as_str()), max);
    assert_eq!(sanitize_safely(over.as_str()), sanitize(&over[..MAX_LENGTH]).unwrap());
}

#[test]
fn test_sanitize_empty_or_whitespace_returns_error() {
    for blank in ["", " "] {
        assert_eq!(
            sanitize(blank),
            Err(SanitizeError::InvalidArgument(InvalidFilename::Blank))
        );
    }
}

#[test]
fn test_sanitize_safely_empty_or_whitespace_generates_placeholder() {
    assert!(sanitize_safely("").starts_with(FILENAME_EMPTY));
    assert!(sanitize_safely(" ").starts_with(FILENAME_EMPTY));
}

#[test]
fn test_sanitize_safely_whitespace_prefix_longer_than_limit_generates_placeholder() {
    let input = format!("{}a", " ".repeat(300));
    assert!(sanitize_safely(input.as_str()).starts_with(FILENAME_EMPTY));
    assert!(sanitize_prettily(input.as_str()).starts_with(FILENAME_EMPTY));
}

#[test]
fn test_sanitize_null_returns_error() {
    assert_eq!(sanitize(None::<&str>), Err(SanitizeError::NullInput));
}

#[test]
fn test_sanitize_safely_null_generates_placeholder() {
    let name = sanitize_safely(None::<&str>);
    assert!(name.starts_with(FILENAME_NULL));
    assert!(name.ends_with(".unknown"));
}

// =============================================================================
// Pretty mode
// =============================================================================

#[test]
fn test_sanitize_prettily_trailing_dots_stripped() {
    let expected = "A filename ending in dot";

    assert_eq!(sanitize_prettily("A filename ending in dot."), expected);
    assert_eq!(sanitize_prettily("A filename ending in dot...."), expected);
    assert_eq!(sanitize_prettily(" - A filename ending in dot .. .. "), expected);

    assert!(sanitize_prettily("....").starts_with(FILENAME_EMPTY));
}

#[test]
fn test_sanitize_prettily_leading_hyphens_stripped() {
    let expected = "A filename starting with hypen";

    assert_eq!(sanitize_prettily("-A filename starting with hypen"), expected);
    assert_eq!(sanitize_prettily("----A filename starting with hypen"), expected);
    assert_eq!(sanitize_prettily(" --. -- A filename starting with hypen . "), expected);
    assert_eq!(sanitize_prettily(".---- A filename starting with hypen."), expected);

    assert!(sanitize_prettily("----").starts_with(FILENAME_EMPTY));
}

#[test]
fn test_sanitize_prettily_keeps_inner_dots_and_hyphens() {
    assert_eq!(sanitize_prettily("archive-2024.tar.gz"), "archive-2024.tar.gz");
}

// =============================================================================
// Mode dispatch
// =============================================================================

#[test]
fn test_sanitize_with_matches_entry_points() {
    let input = " -report: final.";
    assert_eq!(sanitize_with(input, Mode::Strict), sanitize(input));
    assert_eq!(sanitize_with(input, Mode::Safe).unwrap(), sanitize_safely(input));
    assert_eq!(sanitize_with(input, Mode::Pretty).unwrap(), sanitize_prettily(input));
    assert_eq!(sanitize_prettily(input), "report_ final");
}
