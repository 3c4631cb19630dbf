// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Switch command implementation for envswitch.

use anyhow::bail;

use super::build_switcher;
use crate::cli::env::SwitchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::switcher::{SwitchOptions, SwitchOutcome};

/// Main handler for switch command.
///
/// Guarded no-ops that count as success (target already current) exit
/// normally; every other unswitched outcome is an error so the process
/// exits non-zero.
///
/// # Errors
///
/// Returns an error if the settings file cannot be read or written, or if
/// the switch was refused.
pub fn run_switch_command(args: &SwitchArgs, config: &Config) -> Result<()> {
    let switcher = build_switcher(config)?;
    let outcome = switcher.switch_to(&args.target, switch_options(args, config))?;

    match outcome {
        SwitchOutcome::Switched { .. } | SwitchOutcome::AlreadyCurrent => Ok(()),
        SwitchOutcome::Overridden { override_value } => {
            bail!("switch to '{}' refused, override '{override_value}' is active", args.target)
        }
        SwitchOutcome::NotFound => bail!("environment '{}' is not defined", args.target),
    }
}

/// Switch options from the command flags and `[global]` settings.
#[must_use]
pub fn switch_options(args: &SwitchArgs, config: &Config) -> SwitchOptions {
    SwitchOptions::builder()
        .force(args.force)
        .clear_cache(!args.no_cache_clear)
        .interactive_hints(config.global.interactive_hints)
        .build()
}
