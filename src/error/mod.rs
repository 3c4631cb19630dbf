// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              EnvError (~24 bytes)
//!                     |
//!   +-------+-------+-------+-------+----+-------+
//!   |       |       |       |       |    |       |
//!   v       v       v       v       v    v       v
//! Usage   Store  Registry Config   Fs   Io    Other
//! Box<str> Box    Box      Box     Box  Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Store     ReadError, ParseError, WriteError, Serialize
//!   Registry  EmptyName, DuplicateName
//!   Config    ParseError, MissingKey, InvalidValue
//!   Fs        IoError
//! ```
//!
//! Expected outcomes of a switch (already current, override active, unknown
//! target) are not errors. Only collaborator failures end up here.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Top-level error type for the switcher core.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvError {
    /// An operation was called with arguments it does not accept.
    #[error("invalid usage: {0}")]
    Usage(Box<str>),

    /// The configuration store failed.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),

    /// The environment registry failed.
    #[error("registry error: {0}")]
    Registry(#[from] Box<RegistryError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create an [`EnvError::Usage`] for a misused operation.
pub fn usage(message: impl Into<String>) -> EnvError {
    EnvError::Usage(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvError {
                fn from(err: $error) -> Self {
                    EnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    StoreError => Store,
    RegistryError => Registry,
    ConfigError => Config,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Store Errors ---

/// Failures of the durable key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the settings file.
    #[error("failed to read settings '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not a valid TOML table.
    #[error("failed to parse settings '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Failed to write or persist the settings file.
    #[error("failed to write settings '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(String),

    /// Value under a key is present but not a string.
    #[error("settings key '{key}' is not a string")]
    NotAString { key: String },
}

// --- Registry Errors ---

/// Errors raised while building an environment registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Definition without a machine name.
    #[error("environment definition with label '{label}' has no name")]
    EmptyName { label: String },

    /// Two definitions share a machine name.
    #[error("environment '{0}' is defined more than once")]
    DuplicateName(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
