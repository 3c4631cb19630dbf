// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Durable key-value store holding the current environment pointer.
//!
//! ```text
//! settings
//!   environment          = "dev"          <-- CURRENT_KEY (switch_to writes)
//!   environment_override = "maintenance"  <-- OVERRIDE_KEY (edited externally)
//! ```
//!
//! `set` is "set + save": it returns only after the value is durable.

pub mod file;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::EnvResult;

pub use file::TomlFileStore;

/// Key of the current environment pointer.
pub const CURRENT_KEY: &str = "environment";

/// Key of the administrative override.
pub const OVERRIDE_KEY: &str = "environment_override";

/// Durable key-value configuration store.
pub trait ConfigStore: Send + Sync {
    /// Read a value. Absent keys yield `None`.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store cannot be read.
    fn get(&self, key: &str) -> EnvResult<Option<String>>;

    /// Write a value and persist it before returning.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> EnvResult<()>;
}

/// Process-local store. A `set` is durable for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `values`.
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Remove a key.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.values
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(key)
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> EnvResult<Option<String>> {
        Ok(self
            .values
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> EnvResult<()> {
        self.values
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
