// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment definitions and the registry that stores them.
//!
//! ```text
//! EnvironmentRegistry::load_all()
//!        |
//!        v
//!   Environments (IndexMap, fetch order)
//!     "dev"  --> { label: "Development", workflow: None }
//!     "prod" --> { label: "Production",  workflow: Some("release") }
//! ```
//!
//! A definition without a workflow belongs to the default workflow.

pub mod registry;


use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use registry::{EnvironmentRegistry, MemoryRegistry};

/// Environments keyed by machine name, in the order the registry returned them.
pub type Environments = IndexMap<String, EnvironmentDefinition>;

/// A named deployment context (e.g. `dev`, `stage`, `prod`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentDefinition {
    /// Unique machine name.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Workflow classification; `None` is the default workflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
}

impl EnvironmentDefinition {
    /// Create a definition in the default workflow.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            workflow: None,
        }
    }

    /// Assign the definition to a workflow.
    #[must_use]
    pub fn with_workflow(mut self, workflow: impl Into<String>) -> Self {
        self.workflow = Some(workflow.into());
        self
    }

    /// Check whether the definition belongs to `workflow`.
    ///
    /// `None` selects the default workflow. An empty workflow string on the
    /// definition counts as the default workflow too.
    #[must_use]
    pub fn in_workflow(&self, workflow: Option<&str>) -> bool {
        let own = self.workflow.as_deref().filter(|w| !w.is_empty());
        own == workflow
    }
}
