// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::fs;
use std::path::PathBuf;

use envswitch::config::Config;
use envswitch::config::loader::ConfigLoader;
use envswitch::logging::LogLevel;
use tempfile::TempDir;

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("base.toml");
    let site = dir.path().join("site.toml");
    fs::write(
        &base,
        r#"
[global]
output_log_level = 2

[store]
path = "base-settings.toml"

[[environments]]
name = "dev"
label = "Development"
"#,
    )
    .unwrap();
    fs::write(
        &site,
        r#"
[store]
path = "site-settings.toml"
"#,
    )
    .unwrap();

    let config = Config::builder()
        .add_toml_file(&base)
        .add_toml_file(&site)
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.store.path, PathBuf::from("site-settings.toml"));
    assert_eq!(config.environments.len(), 1);
}

#[test]
fn config_missing_required_file() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_file(dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn config_missing_optional_file() {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().add_toml_file_optional(dir.path().join("absent.toml"));
    assert!(loader.loaded_files().is_empty());

    let config = loader.build().unwrap();
    assert!(config.environments.is_empty());
}

#[test]
fn config_invalid_toml() {
    assert!(Config::parse("[store\npath = 1").is_err());
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn config_set_overrides_file() {
    let config = ConfigLoader::new()
        .add_toml_str(
            r"
[global]
output_log_level = 3
interactive_hints = true
",
        )
        .set_all(&["global.output_log_level=1", "global.interactive_hints=false"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::ERROR);
    assert!(!config.global.interactive_hints);
}

#[test]
fn config_override_validated() {
    let result = ConfigLoader::new()
        .set_all(&["store.path="])
        .unwrap()
        .build();
    assert!(result.is_err());
}

// =============================================================================
// Environment definitions
// =============================================================================

#[test]
fn config_environment_unknown_field() {
    let toml = r#"
[[environments]]
name = "dev"
label = "Development"
color = "green"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn config_environment_empty_name() {
    let toml = r#"
[[environments]]
name = ""
label = "Nameless"
"#;
    let err = Config::parse(toml).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'name' in section '[environments]': environment 'Nameless' has an empty name"
    );
}

#[test]
fn config_options_listing() {
    let toml = r#"
[store]
path = "settings.toml"

[[environments]]
name = "dev"
label = "Development"
"#;
    let options = Config::parse(toml).unwrap().format_options();
    assert!(options.iter().any(|line| line == "environments.dev         = Development"));
}
