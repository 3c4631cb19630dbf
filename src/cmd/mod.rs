// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, inis), current, list, switch
//!        |
//!        v
//! build_switcher(&Config)
//!   TomlFileStore(store.path) + MemoryRegistry([[environments]])
//!   TracingNotifier + HookRegistry(audit-log)
//!   DirectoryCacheInvalidator(cache.dirs)   (only if non-empty)
//! ```

pub mod config;
pub mod current;
pub mod list;
pub mod switch;


use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheInvalidator, DirectoryCacheInvalidator};
use crate::config::Config;
use crate::error::EnvResult;
use crate::hooks::{HookRegistry, SwitchEvent};
use crate::notify::TracingNotifier;
use crate::store::TomlFileStore;
use crate::switcher::EnvironmentSwitcher;

/// Name of the listener that records switch events in the log.
pub const AUDIT_LISTENER: &str = "audit-log";

/// Builds the switcher for the binary from the loaded configuration.
///
/// # Errors
///
/// Returns a `RegistryError` if the configured environments have empty or
/// duplicate names.
pub fn build_switcher(config: &Config) -> EnvResult<EnvironmentSwitcher> {
    let hooks = HookRegistry::new();
    hooks.register(AUDIT_LISTENER, log_switch_event);

    let cache = (!config.cache.dirs.is_empty()).then(|| {
        Arc::new(DirectoryCacheInvalidator::new(config.cache.dirs.clone()))
            as Arc<dyn CacheInvalidator>
    });

    Ok(EnvironmentSwitcher::builder()
        .store(Arc::new(TomlFileStore::new(config.store.path.clone())))
        .registry(Arc::new(config.registry()?))
        .notifier(Arc::new(TracingNotifier))
        .hooks(Arc::new(hooks))
        .maybe_cache(cache)
        .build())
}

fn log_switch_event(event: &SwitchEvent) {
    match serde_json::to_string(event) {
        Ok(json) => debug!(event = %json, "Switch event"),
        Err(e) => debug!(error = %e, "Switch event could not be serialized"),
    }
}
