// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cache flushing after a switch.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{EnvResult, FsError};

/// Invalidates host caches after the environment changed.
pub trait CacheInvalidator: Send + Sync {
    /// Flush everything.
    ///
    /// # Errors
    ///
    /// Returns an error if some cache could not be flushed. Callers treat this
    /// as best-effort and do not undo the switch.
    fn flush_all(&self) -> EnvResult<()>;
}

/// Empties a list of cache directories, keeping the directories themselves.
#[derive(Debug, Clone, Default)]
pub struct DirectoryCacheInvalidator {
    dirs: Vec<PathBuf>,
}

impl DirectoryCacheInvalidator {
    pub fn new(dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    fn empty_dir(dir: &Path) -> EnvResult<()> {
        let io_error = |path: &Path, source| FsError::IoError {
            path: path.display().to_string(),
            source,
        };

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(dir = %dir.display(), "Cache directory missing, skipping");
                return Ok(());
            }
            Err(e) => return Err(io_error(dir, e).into()),
        };

        for entry in entries {
            let entry = entry.map_err(|e| io_error(dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| io_error(&path, e))?;
            let removed = if file_type.is_dir() {
                std::fs::remove_dir_all(&path)
            } else {
                std::fs::remove_file(&path)
            };
            removed.map_err(|e| io_error(&path, e))?;
        }
        Ok(())
    }
}

impl CacheInvalidator for DirectoryCacheInvalidator {
    /// Every directory is attempted; the first failure is returned.
    fn flush_all(&self) -> EnvResult<()> {
        let mut first_error = None;
        for dir in &self.dirs {
            if let Err(e) = Self::empty_dir(dir) {
                warn!(dir = %dir.display(), error = %e, "Failed to flush cache directory");
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
