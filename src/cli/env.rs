// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the environment commands.

use clap::Args;

/// Arguments for the `current` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CurrentArgs {
    /// Prints the full definition (label, workflow) instead of the name.
    #[arg(long)]
    pub load: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Glob pattern matched against machine names (e.g. 'st*').
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Prefix prepended to every label.
    #[arg(short = 'p', long, default_value = "")]
    pub prefix: String,

    /// Only lists environments of this workflow.
    #[arg(short = 'w', long)]
    pub workflow: Option<String>,

    /// Only lists environments without a workflow.
    #[arg(long = "default-workflow", conflicts_with = "workflow")]
    pub default_workflow: bool,

    /// Prints the list as a JSON object.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `switch` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SwitchArgs {
    /// Machine name of the environment to switch to.
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Switches even if the target is already current or an override is active.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Skips flushing caches after the switch.
    #[arg(long = "no-cache-clear")]
    pub no_cache_clear: bool,
}
