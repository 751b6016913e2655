// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The base trait all layout plugins implement, plus the context view a
//! plugin gets over its surrounding tree.

use crate::error::TrellisError;
use crate::fields::FormField;
use crate::glossary::Glossary;

/// Read access to the layout tree around the node being edited.
///
/// Implemented by `trellis-plugin` over its node arena; plugins only ever
/// see this trait, never the arena itself.
pub trait LayoutContext {
    /// Plugin name of the node itself.
    fn plugin_name(&self) -> &str;

    /// The node's own glossary.
    fn glossary(&self) -> &Glossary;

    /// The node's glossary merged with all ancestors, nearer nodes winning.
    fn complete_glossary(&self) -> Glossary;

    /// Plugin name and glossary of each ancestor, nearest first.
    fn ancestors(&self) -> Vec<(String, Glossary)>;

    /// Number of direct children.
    fn child_count(&self) -> usize;
}

/// Child reconciliation a plugin requests after its glossary is saved.
///
/// The save pipeline converges the node's direct children on `count`:
/// missing children are appended with `seed` as their glossary, surplus
/// children are removed from the end.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildPlan {
    /// Plugin to instantiate for newly created children.
    pub plugin: String,
    /// Desired number of direct children.
    pub count: usize,
    /// Glossary pre-seeded into each newly created child.
    pub seed: Glossary,
}

/// The base trait for all Trellis layout plugins.
///
/// Plugins are synchronous: every operation runs to completion within one
/// editor-initiated request, and the host provides whatever locking a
/// single record update needs.
pub trait LayoutPlugin: Send + Sync + 'static {
    /// Unique registry name of this plugin.
    fn name(&self) -> &'static str;

    /// Plugin names this plugin may be placed under. `None` allows any parent.
    fn parent_classes(&self) -> Option<&[&str]> {
        None
    }

    /// Whether the plugin must have a parent at all.
    fn require_parent(&self) -> bool {
        true
    }

    /// CSS class every instance carries regardless of configuration.
    fn default_css_class(&self) -> Option<&'static str> {
        None
    }

    /// Build the admin form for a node. Choice lists and help text may
    /// depend on ancestor configuration, so the full context is passed.
    fn form(&self, ctx: &dyn LayoutContext) -> Result<Vec<FormField>, TrellisError>;

    /// Validate submitted form values before they reach the glossary.
    fn clean(&self, values: &Glossary) -> Result<(), TrellisError> {
        let _ = values;
        Ok(())
    }

    /// Post-save hook. A returned [`ChildPlan`] asks the save pipeline to
    /// reconcile the node's children.
    fn save(&self, ctx: &dyn LayoutContext) -> Result<Option<ChildPlan>, TrellisError> {
        let _ = ctx;
        Ok(None)
    }

    /// CSS classes derived from a node's glossary.
    fn css_classes(&self, glossary: &Glossary) -> Vec<String> {
        let _ = glossary;
        self.default_css_class()
            .map(|class| vec![class.to_string()])
            .unwrap_or_default()
    }

    /// Short human-readable summary shown in the structure tree.
    fn identifier(&self, ctx: &dyn LayoutContext) -> String;
}
