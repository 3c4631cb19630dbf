// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for envswitch.
//!
//! ```text
//! --workflow W         --> workflow_options(Some(W))
//! --default-workflow   --> workflow_options(None)
//! (neither)            --> options_list (memoized)
//!        |
//!        v
//! PATTERN: exact name, else wax glob over machine names
//! ```

use anyhow::Context;
use wax::{Glob, Program};

use super::build_switcher;
use crate::cli::env::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::switcher::{EnvironmentSwitcher, OptionsList};

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if the configured environments are invalid or the
/// pattern is not a valid glob.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    let switcher = build_switcher(config)?;
    let options = list_options(&switcher, args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    if options.is_empty() {
        println!("No environments found");
    } else {
        for line in format_list(&options) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Option list selected by the list arguments.
///
/// # Errors
///
/// Returns the registry's error or an invalid-pattern error.
pub fn list_options(switcher: &EnvironmentSwitcher, args: &ListArgs) -> Result<OptionsList> {
    let options = if let Some(workflow) = &args.workflow {
        switcher.workflow_options(Some(workflow.as_str()), &args.prefix, false)?
    } else if args.default_workflow {
        switcher.workflow_options(None, &args.prefix, false)?
    } else {
        switcher.options_list(&args.prefix, false)?.as_ref().clone()
    };

    match &args.pattern {
        Some(pattern) => filter_options(options, pattern),
        None => Ok(options),
    }
}

/// Keeps the entries whose machine name matches `pattern`.
///
/// # Errors
///
/// Returns an error if `pattern` is neither a known name nor a valid glob.
pub fn filter_options(options: OptionsList, pattern: &str) -> Result<OptionsList> {
    if options.contains_key(pattern) {
        return Ok(options
            .into_iter()
            .filter(|(name, _)| name == pattern)
            .collect());
    }

    let glob = Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

    Ok(options
        .into_iter()
        .filter(|(name, _)| glob.is_match(name.as_str()))
        .collect())
}

/// `name  label` lines, names padded to a common width.
#[must_use]
pub fn format_list(options: &OptionsList) -> Vec<String> {
    let width = options.keys().map(String::len).max().unwrap_or(0);
    options
        .iter()
        .map(|(name, label)| format!("{name:<width$}  {label}").trim_end().to_string())
        .collect()
}
