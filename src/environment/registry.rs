// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment registry seam and the in-memory implementation.

use std::sync::RwLock;

use super::{EnvironmentDefinition, Environments};
use crate::error::{EnvResult, RegistryError};

/// Storage for named environment definitions.
///
/// Implementors return a full snapshot on every call. Caching is the
/// caller's business.
pub trait EnvironmentRegistry: Send + Sync {
    /// Fetch every definition, keyed by machine name.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load_all(&self) -> EnvResult<Environments>;
}

/// Registry backed by an ordered in-memory map.
///
/// Hosts that edit definitions at runtime use [`insert`](Self::insert) and
/// [`remove`](Self::remove). Readers see the change on their next fetch.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    environments: RwLock<Environments>,
}

impl MemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of definitions, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if a definition has an empty name or if two
    /// definitions share a name.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = EnvironmentDefinition>,
    ) -> EnvResult<Self> {
        let mut environments = Environments::new();
        for definition in definitions {
            if definition.name.is_empty() {
                return Err(RegistryError::EmptyName {
                    label: definition.label,
                }
                .into());
            }
            if environments.contains_key(&definition.name) {
                return Err(RegistryError::DuplicateName(definition.name).into());
            }
            environments.insert(definition.name.clone(), definition);
        }
        Ok(Self {
            environments: RwLock::new(environments),
        })
    }

    /// Add or replace a definition. Replacing keeps the original position.
    pub fn insert(&self, definition: EnvironmentDefinition) {
        self.environments
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(definition.name.clone(), definition);
    }

    /// Remove a definition, returning it if it existed.
    pub fn remove(&self, name: &str) -> Option<EnvironmentDefinition> {
        self.environments
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .shift_remove(name)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.environments
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnvironmentRegistry for MemoryRegistry {
    fn load_all(&self) -> EnvResult<Environments> {
        Ok(self
            .environments
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }
}
