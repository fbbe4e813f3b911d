use std::fs;
use std::process;

use roman_core::settings;

use super::die;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: decode.strict={}, batch.continue_on_error={}, batch.max_errors={}",
        s.decode.strict, s.batch.continue_on_error, s.batch.max_errors
    );
}

/// Install a custom settings file before anything reads `settings()`.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        settings::init_custom(content),
        "Error loading settings {file}: {}"
    );
    tracing::debug!(file, "custom settings loaded");
}
