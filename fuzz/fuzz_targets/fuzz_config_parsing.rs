//! Fuzz target for legendary.toml parsing.
//!
//! This fuzzer tests the TOML config parser to ensure:
//! 1. No input causes a panic
//! 2. Malformed TOML is gracefully rejected
//! 3. A config that validates always builds a capitalizer
//!
//! Run with: `cargo +nightly fuzz run fuzz_config_parsing`

#![no_main]

use libfuzzer_sys::fuzz_target;
use legendary::config::Config;

fuzz_target!(|data: &str| {
    let Ok(config) = data.parse::<Config>() else {
        return;
    };

    if config.validate().is_ok() {
        assert!(
            config.capitalizer.build().is_ok(),
            "validated config failed to build: {config:?}"
        );
    }
});
