// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envswitch.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envswitch.toml (cwd)
//! 3. --config (repeatable)
//! 4. ENVSWITCH_* env vars
//! 5. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVSWITCH_STORE__PATH=/srv/settings.toml   → store.path
//! ENVSWITCH_GLOBAL__INTERACTIVE_HINTS=false  → global.interactive_hints
//! ```
//!
//! # Environment Definitions
//!
//! ```toml
//! [[environments]]
//! name = "dev"
//! label = "Development"
//!
//! [[environments]]
//! name = "prod"
//! label = "Production"
//! workflow = "release"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::environment::{EnvironmentDefinition, MemoryRegistry};
use crate::error::{ConfigError, EnvResult, Result};

use loader::ConfigLoader;
use types::{CacheConfig, GlobalConfig, StoreConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Settings store location.
    pub store: StoreConfig,
    /// Caches flushed after a switch.
    pub cache: CacheConfig,
    /// Environment definitions, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<EnvironmentDefinition>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envswitch::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("config/default.toml")
    ///     .add_toml_file_optional("config/local.toml")
    ///     .with_env_prefix("ENVSWITCH")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the store path is empty, or if an environment
    /// has an empty name or shares its name with another environment.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingKey {
                section: "store".to_string(),
                key: "path".to_string(),
            });
        }

        let mut seen = BTreeSet::new();
        for environment in &self.environments {
            if environment.name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: "environments".to_string(),
                    key: "name".to_string(),
                    message: format!("environment '{}' has an empty name", environment.label),
                });
            }
            if !seen.insert(environment.name.as_str()) {
                return Err(ConfigError::InvalidValue {
                    section: "environments".to_string(),
                    key: "name".to_string(),
                    message: format!("'{}' is defined more than once", environment.name),
                });
            }
        }
        Ok(())
    }

    /// Build the environment registry from the configured definitions.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` for empty or duplicate names.
    pub fn registry(&self) -> EnvResult<MemoryRegistry> {
        MemoryRegistry::from_definitions(self.environments.iter().cloned())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_store_options(&mut options);
        self.format_environment_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
        options.insert(
            "global.interactive_hints".into(),
            self.global.interactive_hints.to_string(),
        );
    }

    fn format_store_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("store.path".into(), self.store.path.display().to_string());
        options.insert(
            "cache.dirs".into(),
            self.cache
                .dirs
                .iter()
                .map(|d| d.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    fn format_environment_options(&self, options: &mut BTreeMap<String, String>) {
        for environment in &self.environments {
            let value = match &environment.workflow {
                Some(workflow) => format!("{} [{workflow}]", environment.label),
                None => environment.label.clone(),
            };
            options.insert(format!("environments.{}", environment.name), value);
        }
    }
}
