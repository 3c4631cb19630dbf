// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! User-facing messages.
//!
//! ```text
//! Notifier::notify(message, level)
//!   TracingNotifier  --> tracing event (error/warn/info)
//!   MessageQueue     --> kept in memory, drained by the caller
//! ```
//!
//! Delivery is best-effort. Nothing downstream depends on a message arriving.


use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Status,
    Notice,
    Warning,
    Error,
}

impl MessageLevel {
    /// Get a short string representation for output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message with its level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

impl Message {
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Best-effort delivery of human-readable messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, level: MessageLevel);
}

/// Routes messages to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, level: MessageLevel) {
        match level {
            MessageLevel::Error => tracing::error!("{message}"),
            MessageLevel::Warning => tracing::warn!("{message}"),
            MessageLevel::Notice | MessageLevel::Status => tracing::info!("{message}"),
        }
    }
}

/// Collects messages until they are drained.
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: Mutex<Vec<Message>>,
}

impl MessageQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the queued messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Take all queued messages, leaving the queue empty.
    pub fn drain(&self) -> Vec<Message> {
        std::mem::take(
            &mut *self
                .messages
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        )
    }

    /// Queued messages of one level.
    #[must_use]
    pub fn with_level(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|m| m.level == level)
            .map(|m| m.text)
            .collect()
    }
}

impl Notifier for MessageQueue {
    fn notify(&self, message: &str, level: MessageLevel) {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(Message::new(level, message));
    }
}
