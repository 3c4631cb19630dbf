// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{LogConfig, LogLevel};
use crate::config::types::GlobalConfig;

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    insta::assert_snapshot!(
        LogLevel::new(7).unwrap_err().to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7"
    );
}

#[test]
fn test_log_level_filters() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(
        filters,
        [
            "off",
            "error",
            "warn",
            "warn,envswitch=info",
            "warn,envswitch=debug",
            "warn,envswitch=trace",
            "trace",
        ]
    );
}

#[test]
fn test_log_level_ordering() {
    assert!(LogLevel::DEBUG > LogLevel::INFO);
    assert_eq!(LogLevel::from_u8(7), None);
    assert_eq!(u8::from(LogLevel::WARN), 2);
}

#[test]
fn test_log_config_from_global() {
    let global = GlobalConfig {
        output_log_level: LogLevel::WARN,
        file_log_level: LogLevel::DEBUG,
        log_file: PathBuf::from("logs/switch.log"),
        ..GlobalConfig::default()
    };
    let config = LogConfig::from_global(&global);

    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("logs/switch.log"));
    assert!(!config.show_target());
}

#[test]
fn test_log_config_without_file() {
    let config = LogConfig::from_global(&GlobalConfig::default());
    assert_eq!(config.log_file(), None);
    assert_eq!(config.console_level(), LogLevel::INFO);
}
