// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envswitch", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["envswitch"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envswitch",
        "-l",
        "4",
        "-c",
        "base.toml",
        "-c",
        "site.toml",
        "--store",
        "/srv/site/settings.toml",
        "-s",
        "global.interactive_hints=false",
        "--no-default-config",
        "current",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("base.toml"), PathBuf::from("site.toml")]
    );
    assert!(cli.global.no_default_config);
    assert_eq!(
        cli.global.to_config_overrides(),
        [
            "global.interactive_hints=false",
            "global.output_log_level=4",
            "global.file_log_level=4",
            "store.path=/srv/site/settings.toml",
        ]
    );
}

#[test]
fn test_file_log_level_overrides_log_level() {
    let cli = Cli::try_parse_from([
        "envswitch",
        "-l",
        "1",
        "--file-log-level",
        "5",
        "--log-file",
        "switch.log",
        "options",
    ])
    .unwrap();

    assert_eq!(
        cli.global.to_config_overrides(),
        [
            "global.output_log_level=1",
            "global.file_log_level=5",
            "global.log_file=switch.log",
        ]
    );
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["envswitch", "-l", "7", "version"]).is_err());
}

#[test]
fn test_parse_switch() {
    let cli = Cli::try_parse_from(["envswitch", "switch", "prod", "--force", "--no-cache-clear"])
        .unwrap();
    let Some(Command::Switch(args)) = cli.command else {
        panic!("expected switch command");
    };
    assert_eq!(args.target, "prod");
    assert!(args.force);
    assert!(args.no_cache_clear);
}

#[test]
fn test_parse_switch_requires_target() {
    assert!(Cli::try_parse_from(["envswitch", "switch"]).is_err());
}

#[test]
fn test_parse_current_load() {
    let cli = Cli::try_parse_from(["envswitch", "current", "--load"]).unwrap();
    let Some(Command::Current(args)) = cli.command else {
        panic!("expected current command");
    };
    assert!(args.load);
}

#[test]
fn test_parse_list() {
    let cli = Cli::try_parse_from([
        "envswitch",
        "list",
        "--prefix",
        "Env: ",
        "--workflow",
        "release",
        "--json",
        "st*",
    ])
    .unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(args.pattern.as_deref(), Some("st*"));
    assert_eq!(args.prefix, "Env: ");
    assert_eq!(args.workflow.as_deref(), Some("release"));
    assert!(args.json);
    assert!(!args.default_workflow);
}

#[test]
fn test_parse_list_workflow_conflict() {
    let result = Cli::try_parse_from([
        "envswitch",
        "list",
        "--workflow",
        "release",
        "--default-workflow",
    ]);
    assert!(result.is_err());
}
