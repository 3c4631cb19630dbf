// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! TOML file backed store.
//!
//! ```text
//! get(key):  read file --> parse table --> table[key] (missing file = None)
//! set(key):  lock --> read table --> insert --> temp file in same dir
//!            --> write + sync_all --> rename over original
//! ```
//!
//! The file is re-read on every `get`, so edits made by other processes
//! (typically the override) are observed immediately.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::debug;

use super::ConfigStore;
use crate::error::{EnvResult, StoreError};

/// Store persisting a flat table of string values to a TOML file.
#[derive(Debug)]
pub struct TomlFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TomlFileStore {
    /// Create a store for `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> EnvResult<toml::Table> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(toml::Table::new()),
            Err(source) => {
                return Err(StoreError::ReadError {
                    path: self.path.display().to_string(),
                    source,
                }
                .into());
            }
        };

        content.parse::<toml::Table>().map_err(|e| {
            StoreError::ParseError {
                path: self.path.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn write_table(&self, table: &toml::Table) -> EnvResult<()> {
        let content =
            toml::to_string(table).map_err(|e| StoreError::Serialize(e.to_string()))?;

        let write_error = |source| StoreError::WriteError {
            path: self.path.display().to_string(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(write_error)?;

        let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
        temp.write_all(content.as_bytes()).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        temp.persist(&self.path).map_err(|e| write_error(e.error))?;

        debug!(path = %self.path.display(), "Settings persisted");
        Ok(())
    }
}

impl ConfigStore for TomlFileStore {
    fn get(&self, key: &str) -> EnvResult<Option<String>> {
        let table = self.read_table()?;
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(StoreError::NotAString {
                key: key.to_string(),
            }
            .into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> EnvResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut table = self.read_table()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        self.write_table(&table)
    }
}
