// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envswitch using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envswitch [global options] <command>
//! version
//! options
//! inis
//! current [--load]
//! list [--prefix P] [--workflow W | --default-workflow] [--json] [PATTERN]
//! switch <TARGET> [--force] [--no-cache-clear]
//! ```

pub mod env;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::env::{CurrentArgs, ListArgs, SwitchArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Environment Switcher
///
/// Reads and switches the current environment of a site.
#[derive(Debug, Parser)]
#[command(
    name = "envswitch",
    author,
    version,
    about = "Environment Switcher",
    long_about = "envswitch Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads and switches the current environment (dev, stage, prod, ...)\n\
                  stored in a settings file. Switches are skipped when the target is\n\
                  already current or an override is active, unless --force is given.",
    after_help = "CONFIG FILES:\n\n\
                  By default, envswitch loads `envswitch.toml` from the current\n\
                  directory if it exists. Additional files can be given with\n\
                  --config; later files override earlier ones. ENVSWITCH_*\n\
                  environment variables and --set override all files. Use\n\
                  --no-default-config to only use --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used.
    Inis,

    /// Shows the current environment.
    Current(CurrentArgs),

    /// Lists defined environments.
    List(ListArgs),

    /// Switches to another environment.
    Switch(SwitchArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
