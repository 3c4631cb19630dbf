// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Current command implementation for envswitch.

use tracing::warn;

use super::build_switcher;
use crate::cli::env::CurrentArgs;
use crate::config::Config;
use crate::environment::EnvironmentDefinition;
use crate::error::{EnvResult, Result};
use crate::switcher::EnvironmentSwitcher;

/// Main handler for current command.
///
/// # Errors
///
/// Returns an error if the settings file cannot be read or the configured
/// environments are invalid.
pub fn run_current_command(args: &CurrentArgs, config: &Config) -> Result<()> {
    let switcher = build_switcher(config)?;
    for line in current_lines(&switcher, args.load)? {
        println!("{line}");
    }
    Ok(())
}

/// Lines printed by the current command.
///
/// # Errors
///
/// Returns the store's or the registry's error.
pub fn current_lines(switcher: &EnvironmentSwitcher, load: bool) -> EnvResult<Vec<String>> {
    let Some(name) = switcher.current()?.filter(|name| !name.is_empty()) else {
        return Ok(vec!["No environment set".to_string()]);
    };

    if !load {
        return Ok(vec![name]);
    }

    match switcher.current_definition()? {
        Some(definition) => Ok(format_definition(&definition)),
        None => {
            warn!(environment = %name, "Current environment is not defined");
            Ok(vec![format!("{name} (not defined)")])
        }
    }
}

fn format_definition(definition: &EnvironmentDefinition) -> Vec<String> {
    vec![
        format!("name     = {}", definition.name),
        format!("label    = {}", definition.label),
        format!(
            "workflow = {}",
            definition.workflow.as_deref().unwrap_or("default")
        ),
    ]
}
