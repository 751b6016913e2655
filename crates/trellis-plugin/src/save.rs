// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The editor-save pipeline.
//!
//! One save runs synchronously to completion: clean the submitted values,
//! write them into the node's glossary, then apply whatever child plan the
//! plugin's save hook returns.

use tracing::{debug, warn};
use trellis_core::{ChildPlan, Glossary, TrellisError};

use crate::registry::PluginRegistry;
use crate::tree::{LayoutTree, NodeId};

/// Apply one form submission to a node.
///
/// Steps:
/// 1. The plugin's `clean` validates the submitted values.
/// 2. Cleaned values are written into the node's glossary, key by key.
/// 3. The plugin's `save` hook runs; a returned [`ChildPlan`] reconciles
///    the node's children.
pub fn save_node(
    tree: &mut LayoutTree,
    registry: &PluginRegistry,
    id: NodeId,
    values: Glossary,
) -> Result<(), TrellisError> {
    let plugin_name = tree.node(id)?.plugin.clone();
    let plugin = registry.get(&plugin_name)?;

    plugin.clean(&values)?;

    let node = tree.node_mut(id)?;
    for (key, value) in values {
        node.glossary.set(key, value);
    }

    let plan = {
        let ctx = tree.context(id)?;
        plugin.save(&ctx)?
    };

    if let Some(plan) = plan {
        debug!(
            plugin = %plugin_name,
            child = %plan.plugin,
            count = plan.count,
            "applying child plan"
        );
        apply_child_plan(tree, registry, id, &plugin_name, plan)?;
    }

    Ok(())
}

/// Converge a node's direct children on the plan's count.
///
/// Missing children are appended with the plan's seed glossary; surplus
/// children are removed from the end, subtrees included.
fn apply_child_plan(
    tree: &mut LayoutTree,
    registry: &PluginRegistry,
    id: NodeId,
    parent_plugin: &str,
    plan: ChildPlan,
) -> Result<(), TrellisError> {
    registry.validate_parent(&plan.plugin, Some(parent_plugin))?;

    let current = tree.children(id).len();
    if current < plan.count {
        for _ in current..plan.count {
            tree.insert_child(id, plan.plugin.clone(), plan.seed.clone())?;
        }
    } else if current > plan.count {
        let surplus: Vec<NodeId> = tree.children(id)[plan.count..].to_vec();
        warn!(
            parent = parent_plugin,
            removed = surplus.len(),
            "removing surplus children with their subtrees"
        );
        for child in surplus {
            tree.remove(child)?;
        }
    }

    Ok(())
}
