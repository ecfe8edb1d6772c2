//! Configuration loading and command handler tests.
//!
//! Drives the same path as the `legendary` binary: load a TOML file, build
//! the settings, then run a command handler against an in-memory sink.
//!
//! ```bash
//! cargo test --test cli_config_tests
//! ```

use std::io::Write;

use legendary::Error;
use legendary::capitalizer::{Capitalizer, Delimiter, Locale};
use legendary::commands::{self, collect_inputs};
use legendary::config::Config;
use legendary::sanitizer::{FILENAME_NULL, Mode};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn output_lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Config file loading
// =============================================================================

#[test]
fn test_load_from_file_drives_capitalize_command() {
    let file = write_config(
        r#"
[capitalizer]
locale = "tr"

[[capitalizer.delimiters]]
behavior = "after"
marker = " "

[[capitalizer.delimiters]]
behavior = "after"
marker = "-"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert!(!config.validate().unwrap().has_warnings());

    let capitalizer = config.capitalizer.build().unwrap();
    assert_eq!(capitalizer.locale(), &Locale::turkish());

    let mut out = Vec::new();
    commands::capitalize::execute(&["izmir-istanbul hattI".to_string()], &capitalizer, &mut out)
        .unwrap();
    assert_eq!(output_lines(out), vec!["İzmir-İstanbul Hattı"]);
}

#[test]
fn test_load_from_file_drives_sanitize_command() {
    let file = write_config("[sanitizer]\nmode = \"safe\"\n");
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.sanitizer.mode, Mode::Safe);

    let mut out = Vec::new();
    commands::sanitize::execute(
        &["-keep leading hyphen.".to_string()],
        config.sanitizer.mode,
        true,
        &mut out,
    )
    .unwrap();

    let lines = output_lines(out);
    assert!(lines[0].starts_with(FILENAME_NULL));
    assert_eq!(lines[1], "-keep leading hyphen.");
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_load_from_invalid_toml_reports_origin() {
    let file = write_config("[sanitizer\nmode = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, Error::TomlParse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_unknown_mode_is_rejected() {
    assert!("[sanitizer]\nmode = \"lenient\"".parse::<Config>().is_err());
}

#[test]
fn test_unknown_section_is_rejected() {
    assert!("[renamer]\nenabled = true".parse::<Config>().is_err());
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_validate_warns_on_duplicate_marker() {
    let config: Config = r##"
[[capitalizer.delimiters]]
behavior = "before"
marker = "#"

[[capitalizer.delimiters]]
behavior = "after"
marker = "#"
"##
    .parse()
    .unwrap();

    let result = config.validate().unwrap();
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("'#'"));

    let capitalizer = config.capitalizer.build().unwrap();
    assert_eq!(capitalizer.capitalize("ab#cd"), "AB#Cd");
}

#[test]
fn test_validate_rejects_multi_char_marker() {
    let config: Config = r#"
[[capitalizer.delimiters]]
behavior = "after"
marker = "--"
"#
    .parse()
    .unwrap();

    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn test_validate_rejects_malformed_locale() {
    let config: Config = "[capitalizer]\nlocale = \"not a locale\"".parse().unwrap();
    assert!(matches!(config.validate(), Err(Error::Locale(_))));
}

// =============================================================================
// Command-line overrides
// =============================================================================

#[test]
fn test_command_line_delimiters_replace_configured_ones() {
    let config: Config = r#"
[[capitalizer.delimiters]]
behavior = "after"
marker = "_"
"#
    .parse()
    .unwrap();

    let capitalizer = config
        .capitalizer
        .build()
        .unwrap()
        .with_delimiters(["after:.".parse::<Delimiter>().unwrap()]);

    assert_eq!(capitalizer.delimiters(), &[Delimiter::after('.')]);
    assert_eq!(capitalizer.capitalize("a_b.c"), "A_b.C");
    assert_ne!(capitalizer, Capitalizer::new());
}

#[test]
fn test_inputs_read_from_stdin_when_no_arguments() {
    let inputs = collect_inputs(Vec::new(), "CON\nreport?.pdf\n".as_bytes()).unwrap();

    let mut out = Vec::new();
    commands::sanitize::execute(&inputs, Mode::Strict, false, &mut out).unwrap();
    assert_eq!(output_lines(out), vec!["_CON", "report_.pdf"]);
}
