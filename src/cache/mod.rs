// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Memoized snapshots and post-switch cache invalidation.
//!
//! ```text
//! Memo<T>:  RwLock<Option<Arc<T>>>
//!   get_or_load(reset=false) --> cached Arc (load once)
//!   get_or_load(reset=true)  --> load, swap Arc, return new
//!
//! CacheInvalidator::flush_all()
//!   DirectoryCacheInvalidator --> empty each configured dir
//! ```
//!
//! Readers clone the `Arc` and release the lock, so a reset never hands out
//! a half-built value.

pub mod invalidator;


use std::sync::{Arc, RwLock};

use crate::error::EnvResult;

pub use invalidator::{CacheInvalidator, DirectoryCacheInvalidator};

/// Strict memoization: a value stays until explicitly reset. No expiry.
#[derive(Debug)]
pub struct Memo<T> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }
}

impl<T> Memo<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value, if one has been loaded.
    #[must_use]
    pub fn peek(&self) -> Option<Arc<T>> {
        self.slot
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Return the cached value, loading it when empty or when `reset` is set.
    ///
    /// A failed load leaves the previous value in place.
    ///
    /// # Errors
    ///
    /// Returns the loader's error.
    pub fn get_or_load<F>(&self, reset: bool, load: F) -> EnvResult<Arc<T>>
    where
        F: FnOnce() -> EnvResult<T>,
    {
        self.get_or_load_if(reset, |_| false, load)
    }

    /// Like [`get_or_load`](Self::get_or_load), also reloading when `stale`
    /// returns true for the cached value.
    ///
    /// # Errors
    ///
    /// Returns the loader's error.
    pub fn get_or_load_if<P, F>(&self, reset: bool, stale: P, load: F) -> EnvResult<Arc<T>>
    where
        P: Fn(&T) -> bool,
        F: FnOnce() -> EnvResult<T>,
    {
        if !reset
            && let Some(value) = self.peek()
            && !stale(&value)
        {
            return Ok(value);
        }

        let mut slot = self
            .slot
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        // Another caller may have filled the slot while we waited.
        if !reset
            && let Some(value) = slot.as_ref()
            && !stale(value)
        {
            return Ok(Arc::clone(value));
        }

        let value = Arc::new(load()?);
        *slot = Some(Arc::clone(&value));
        Ok(value)
    }

    /// Drop the cached value.
    pub fn clear(&self) {
        *self
            .slot
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
    }
}
