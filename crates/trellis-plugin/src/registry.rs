// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry for the layout plugins compiled into the host.
//!
//! The registry stores `LayoutPlugin` trait objects keyed by plugin name and
//! enforces the parent/child placement rules each plugin declares.

use std::collections::HashMap;

use tracing::debug;
use trellis_core::{Glossary, LayoutPlugin, TrellisError};

use crate::tree::{LayoutTree, NodeId};

/// Registry of compiled-in layout plugins, keyed by name.
#[derive(Default)]
pub struct PluginRegistry {
    entries: HashMap<String, Box<dyn LayoutPlugin>>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin under its declared name. A later registration with
    /// the same name replaces the earlier one.
    pub fn register(&mut self, plugin: Box<dyn LayoutPlugin>) {
        debug!(plugin = plugin.name(), "registering layout plugin");
        self.entries.insert(plugin.name().to_string(), plugin);
    }

    /// Look up a plugin by name.
    pub fn get(&self, name: &str) -> Result<&dyn LayoutPlugin, TrellisError> {
        self.entries
            .get(name)
            .map(Box::as_ref)
            .ok_or_else(|| TrellisError::PluginNotFound {
                name: name.to_string(),
            })
    }

    /// All registered plugins, sorted by name.
    pub fn list_all(&self) -> Vec<&dyn LayoutPlugin> {
        let mut plugins: Vec<&dyn LayoutPlugin> =
            self.entries.values().map(Box::as_ref).collect();
        plugins.sort_by_key(|plugin| plugin.name());
        plugins
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that `child` may be placed under `parent` (`None` = tree root),
    /// per the child plugin's `parent_classes` and `require_parent`.
    pub fn validate_parent(
        &self,
        child: &str,
        parent: Option<&str>,
    ) -> Result<(), TrellisError> {
        let plugin = self.get(child)?;
        match parent {
            None => {
                if plugin.require_parent() {
                    return Err(TrellisError::InvalidParent {
                        child: child.to_string(),
                        parent: "(root)".to_string(),
                    });
                }
            }
            Some(parent_name) => {
                if let Some(allowed) = plugin.parent_classes()
                    && !allowed.contains(&parent_name)
                {
                    return Err(TrellisError::InvalidParent {
                        child: child.to_string(),
                        parent: parent_name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Insert a plugin node into the tree, enforcing placement rules.
    pub fn insert_node(
        &self,
        tree: &mut LayoutTree,
        parent: Option<NodeId>,
        plugin: &str,
        glossary: Glossary,
    ) -> Result<NodeId, TrellisError> {
        match parent {
            None => {
                self.validate_parent(plugin, None)?;
                Ok(tree.insert_root(plugin, glossary))
            }
            Some(parent_id) => {
                let parent_plugin = tree.node(parent_id)?.plugin.clone();
                self.validate_parent(plugin, Some(&parent_plugin))?;
                tree.insert_child(parent_id, plugin, glossary)
            }
        }
    }
}
