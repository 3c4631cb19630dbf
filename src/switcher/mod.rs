// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Current environment pointer with guarded switching.
//!
//! # Switch Decision
//!
//! ```text
//! switch_to(target, opts)
//!   !force && current == target   --> notice "already set"      --> AlreadyCurrent (true)
//!   else !force && override != "" --> error  "overridden"       --> Overridden     (false)
//!   else target unknown           --> warning "does not exist"  --> NotFound       (false)
//!   else persist pointer --> dispatch hook --> [flush caches]   --> Switched       (true)
//! ```
//!
//! The first two guards form an if/else-if pair: with `current == target`
//! and an override set, only the "already set" notice is emitted.
//!
//! # Caches
//!
//! ```text
//! load_all(reset)     --> environments Memo --> EnvironmentRegistry
//! options_list(reset) --> options Memo --> load_all(reset)
//! ```


use std::sync::Arc;

use bon::Builder;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::cache::{CacheInvalidator, Memo};
use crate::environment::{EnvironmentDefinition, EnvironmentRegistry, Environments};
use crate::error::{EnvError, EnvResult, StoreError, usage};
use crate::hooks::{ChangeHookDispatcher, SwitchEvent};
use crate::notify::{MessageLevel, Notifier};
use crate::store::{CURRENT_KEY, ConfigStore, OVERRIDE_KEY};

/// Machine name → display label, in registry order.
pub type OptionsList = IndexMap<String, String>;

/// Hint printed after a guarded switch when running interactively.
pub const FORCE_HINT: &str =
    "To force the environment switch to run anyway, use the '--force' flag.";

/// Options for [`EnvironmentSwitcher::switch_to`].
#[derive(Debug, Clone, Copy, Builder)]
pub struct SwitchOptions {
    /// Switch even if the target is current or an override is active.
    #[builder(default = false)]
    force: bool,
    /// Flush caches after a successful switch.
    #[builder(default = true)]
    clear_cache: bool,
    /// Emit the force hint after a guarded no-op.
    #[builder(default = false)]
    interactive_hints: bool,
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SwitchOptions {
    #[must_use]
    pub const fn force(&self) -> bool {
        self.force
    }

    #[must_use]
    pub const fn clear_cache(&self) -> bool {
        self.clear_cache
    }

    #[must_use]
    pub const fn interactive_hints(&self) -> bool {
        self.interactive_hints
    }
}

/// Result of a switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Pointer now names the target.
    Switched { previous: Option<String> },
    /// Target was already current; nothing changed.
    AlreadyCurrent,
    /// An override is active; nothing changed.
    Overridden { override_value: String },
    /// Target is not defined; nothing changed.
    NotFound,
}

impl SwitchOutcome {
    /// Whether the request counts as successful.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Switched { .. } | Self::AlreadyCurrent)
    }
}

/// Reads and switches the current environment.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use envswitch::environment::{EnvironmentDefinition, MemoryRegistry};
/// use envswitch::hooks::HookRegistry;
/// use envswitch::notify::MessageQueue;
/// use envswitch::store::MemoryStore;
/// use envswitch::switcher::{EnvironmentSwitcher, SwitchOptions};
///
/// let registry = MemoryRegistry::from_definitions([
///     EnvironmentDefinition::new("dev", "Development"),
///     EnvironmentDefinition::new("prod", "Production"),
/// ])?;
///
/// let switcher = EnvironmentSwitcher::builder()
///     .store(Arc::new(MemoryStore::new()))
///     .registry(Arc::new(registry))
///     .notifier(Arc::new(MessageQueue::new()))
///     .hooks(Arc::new(HookRegistry::new()))
///     .build();
///
/// let outcome = switcher.switch_to("prod", SwitchOptions::default())?;
/// assert!(outcome.succeeded());
/// assert_eq!(switcher.current()?.as_deref(), Some("prod"));
/// # Ok::<(), envswitch::error::EnvError>(())
/// ```
#[derive(Builder)]
pub struct EnvironmentSwitcher {
    store: Arc<dyn ConfigStore>,
    registry: Arc<dyn EnvironmentRegistry>,
    notifier: Arc<dyn Notifier>,
    hooks: Arc<dyn ChangeHookDispatcher>,
    cache: Option<Arc<dyn CacheInvalidator>>,
    #[builder(skip)]
    environments: Memo<Environments>,
    #[builder(skip)]
    options: Memo<OptionsList>,
}

impl std::fmt::Debug for EnvironmentSwitcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentSwitcher")
            .field("environments", &self.environments.peek())
            .field("options", &self.options.peek())
            .field("has_cache_invalidator", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl EnvironmentSwitcher {
    /// Raw pointer value. Not checked against the registry.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store cannot be read.
    pub fn current(&self) -> EnvResult<Option<String>> {
        self.store.get(CURRENT_KEY)
    }

    /// Definition the pointer names, or `None` when absent or stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the store or the registry fails.
    pub fn current_definition(&self) -> EnvResult<Option<EnvironmentDefinition>> {
        match self.current()? {
            Some(name) if !name.is_empty() => self.load(&name, false),
            _ => Ok(None),
        }
    }

    /// Active override value. Empty and non-string values count as absent.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store cannot be read.
    pub fn override_value(&self) -> EnvResult<Option<String>> {
        match self.store.get(OVERRIDE_KEY) {
            Ok(value) => Ok(value.filter(|v| !v.is_empty())),
            Err(EnvError::Store(e)) if matches!(*e, StoreError::NotAString { .. }) => {
                warn!(key = OVERRIDE_KEY, "Override is not a string, ignoring it");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// All definitions, memoized until `reset` is set.
    ///
    /// # Errors
    ///
    /// Returns the registry's error. The previous snapshot stays cached.
    pub fn load_all(&self, reset: bool) -> EnvResult<Arc<Environments>> {
        self.environments.get_or_load(reset, || {
            let environments = self.registry.load_all()?;
            debug!(count = environments.len(), "Loaded environment registry");
            Ok(environments)
        })
    }

    /// One definition by machine name.
    ///
    /// # Errors
    ///
    /// Returns a usage error for an empty name. Use [`load_all`](Self::load_all)
    /// to fetch everything.
    pub fn load(&self, name: &str, reset: bool) -> EnvResult<Option<EnvironmentDefinition>> {
        if name.is_empty() {
            return Err(usage("environment name must not be empty; use load_all"));
        }
        Ok(self.load_all(reset)?.get(name).cloned())
    }

    /// Definitions for the requested names, in request order. Unknown and
    /// repeated names are skipped.
    ///
    /// # Errors
    ///
    /// Returns the registry's error.
    pub fn load_many<S: AsRef<str>>(&self, names: &[S], reset: bool) -> EnvResult<Environments> {
        let all = self.load_all(reset)?;
        Ok(names
            .iter()
            .filter_map(|name| all.get_key_value(name.as_ref()))
            .map(|(name, definition)| (name.clone(), definition.clone()))
            .collect())
    }

    /// Definitions of one workflow. `None` selects the default workflow.
    ///
    /// # Errors
    ///
    /// Returns the registry's error.
    pub fn load_workflow(&self, workflow: Option<&str>, reset: bool) -> EnvResult<Environments> {
        Ok(self
            .load_all(reset)?
            .iter()
            .filter(|(_, definition)| definition.in_workflow(workflow))
            .map(|(name, definition)| (name.clone(), definition.clone()))
            .collect())
    }

    /// Option list for selection UIs: name → `prefix + label`.
    ///
    /// Memoized separately from the registry cache. The prefix of the call
    /// that populated the memo sticks until a reset. An empty list is
    /// rebuilt on every call.
    ///
    /// # Errors
    ///
    /// Returns the registry's error.
    pub fn options_list(&self, prefix: &str, reset: bool) -> EnvResult<Arc<OptionsList>> {
        self.options.get_or_load_if(reset, OptionsList::is_empty, || {
            let environments = self.load_all(reset)?;
            Ok(build_options(&environments, prefix))
        })
    }

    /// Option list restricted to one workflow. Not memoized.
    ///
    /// # Errors
    ///
    /// Returns the registry's error.
    pub fn workflow_options(
        &self,
        workflow: Option<&str>,
        prefix: &str,
        reset: bool,
    ) -> EnvResult<OptionsList> {
        Ok(build_options(&self.load_workflow(workflow, reset)?, prefix))
    }

    /// Switch the current environment to `target`.
    ///
    /// Guarded outcomes are reported through the notifier and the returned
    /// [`SwitchOutcome`]; they are not errors.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store or the registry fails. A failed
    /// cache flush is logged and does not fail the switch.
    pub fn switch_to(&self, target: &str, options: SwitchOptions) -> EnvResult<SwitchOutcome> {
        let target_definition = if target.is_empty() {
            None
        } else {
            self.load(target, false)?
        };
        let current = self.current()?;

        if !options.force() && current.as_deref() == Some(target) {
            self.notifier.notify(
                &format!("The current environment is already set to '{target}'."),
                MessageLevel::Notice,
            );
            self.force_hint(options);
            debug!(environment = target, "Switch skipped, environment already current");
            return Ok(SwitchOutcome::AlreadyCurrent);
        }

        if !options.force()
            && let Some(override_value) = self.override_value()?
        {
            self.notifier.notify(
                &format!("The current environment is overridden with '{override_value}'."),
                MessageLevel::Error,
            );
            self.force_hint(options);
            debug!(environment = target, %override_value, "Switch blocked by override");
            return Ok(SwitchOutcome::Overridden { override_value });
        }

        if target_definition.is_none() {
            self.notifier.notify(
                &format!("Environment {target} does not exist."),
                MessageLevel::Warning,
            );
            return Ok(SwitchOutcome::NotFound);
        }

        // Durable before any listener hears about it.
        self.store.set(CURRENT_KEY, target)?;
        info!(
            environment = target,
            previous = current.as_deref().unwrap_or(""),
            force = options.force(),
            "Environment switched"
        );

        self.hooks
            .dispatch(&SwitchEvent::new(target, current.clone()));

        if options.clear_cache()
            && let Some(cache) = &self.cache
        {
            match cache.flush_all() {
                Ok(()) => self.notifier.notify("Cleared cache.", MessageLevel::Status),
                Err(e) => {
                    warn!(error = %e, "Cache flush failed after switch");
                    self.notifier
                        .notify(&format!("Failed to clear cache: {e}"), MessageLevel::Warning);
                }
            }
        }

        Ok(SwitchOutcome::Switched { previous: current })
    }

    fn force_hint(&self, options: SwitchOptions) {
        if options.interactive_hints() {
            self.notifier.notify(FORCE_HINT, MessageLevel::Status);
        }
    }
}

fn build_options(environments: &Environments, prefix: &str) -> OptionsList {
    environments
        .iter()
        .map(|(name, definition)| (name.clone(), format!("{prefix}{}", definition.label)))
        .collect()
}
