// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Switch notifications for the rest of the host.
//!
//! ```text
//! switch_to("prod") --> pointer persisted --> dispatch(SwitchEvent)
//!                                               |
//!                         listener 1, listener 2, ... (registration order)
//! ```

#[cfg(test)]
mod tests;

use std::sync::{Arc, RwLock};

use serde::Serialize;
use tracing::debug;

/// Name of the event dispatched after a switch.
pub const SWITCH_EVENT: &str = "environment_switch";

/// A completed environment switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchEvent {
    /// Event name, always [`SWITCH_EVENT`] for switches.
    pub name: &'static str,
    /// Environment that is now current.
    pub target: String,
    /// Environment that was current before, if any.
    pub previous: Option<String>,
}

impl SwitchEvent {
    pub fn new(target: impl Into<String>, previous: Option<String>) -> Self {
        Self {
            name: SWITCH_EVENT,
            target: target.into(),
            previous,
        }
    }
}

/// Fire-and-forget broadcast of switch events.
pub trait ChangeHookDispatcher: Send + Sync {
    fn dispatch(&self, event: &SwitchEvent);
}

type Listener = Arc<dyn Fn(&SwitchEvent) + Send + Sync>;

/// Dispatcher invoking registered closures in registration order.
///
/// A listener registered while an event is dispatched first runs for the
/// next event.
#[derive(Default)]
pub struct HookRegistry {
    listeners: RwLock<Vec<(String, Listener)>>,
}

impl HookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named listener.
    pub fn register<F>(&self, name: impl Into<String>, listener: F)
    where
        F: Fn(&SwitchEvent) + Send + Sync + 'static,
    {
        self.listeners
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((name.into(), Arc::new(listener)));
    }

    /// Names of registered listeners, in invocation order.
    #[must_use]
    pub fn listener_names(&self) -> Vec<String> {
        self.listeners
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("listeners", &self.listener_names())
            .finish()
    }
}

impl ChangeHookDispatcher for HookRegistry {
    fn dispatch(&self, event: &SwitchEvent) {
        // Snapshot so listeners may register further listeners.
        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();
        for (name, listener) in &listeners {
            debug!(
                listener = %name,
                event = event.name,
                environment = %event.target,
                previous = event.previous.as_deref().unwrap_or(""),
                "Dispatching hook"
            );
            listener(event);
        }
    }
}
