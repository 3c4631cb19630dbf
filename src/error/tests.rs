// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvError, EnvResult, RegistryError, StoreError, usage};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "store".to_string(),
        key: "path".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'path' in section '[store]'");
}

#[test]
fn test_store_error_wraps_into_env_error() {
    let err: EnvError = StoreError::NotAString {
        key: "environment".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"store error: settings key 'environment' is not a string");
}

#[test]
fn test_registry_error_display() {
    let err: EnvError = RegistryError::DuplicateName("dev".to_string()).into();
    assert_eq!(
        err.to_string(),
        "registry error: environment 'dev' is defined more than once"
    );
}

#[test]
fn test_usage_error() {
    let err = usage("environment name must not be empty");
    assert!(matches!(err, EnvError::Usage(_)));
}

#[test]
fn test_env_error_size() {
    // Box<str> variants (Usage, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<EnvError>();
    assert!(size <= 24, "EnvError is {size} bytes, expected <= 24");
}

#[test]
fn test_env_result_size() {
    let size = std::mem::size_of::<EnvResult<()>>();
    assert!(size <= 24, "EnvResult<()> is {size} bytes, expected <= 24");
}
