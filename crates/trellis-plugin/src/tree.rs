// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The layout tree: an arena of plugin nodes mirroring the host's
//! page-layout structure.
//!
//! Each node carries the plugin name and its glossary blob. Removal leaves
//! tombstones behind so node ids stay stable for the duration of a request.

use trellis_core::{Glossary, LayoutContext, TrellisError};

/// Identifier of a node in a [`LayoutTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw arena index, for error reporting.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One layout node: a plugin instance plus its configuration blob.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// Registry name of the plugin backing this node.
    pub plugin: String,
    /// The node's configuration blob.
    pub glossary: Glossary,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    alive: bool,
}

/// Arena-backed tree of layout nodes.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parentless node (a page-level container).
    pub fn insert_root(&mut self, plugin: impl Into<String>, glossary: Glossary) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LayoutNode {
            plugin: plugin.into(),
            glossary,
            parent: None,
            children: Vec::new(),
            alive: true,
        });
        id
    }

    /// Insert a node under `parent`, appended after its existing children.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        plugin: impl Into<String>,
        glossary: Glossary,
    ) -> Result<NodeId, TrellisError> {
        self.node(parent)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(LayoutNode {
            plugin: plugin.into(),
            glossary,
            parent: Some(parent),
            children: Vec::new(),
            alive: true,
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Remove a node and its entire subtree.
    pub fn remove(&mut self, id: NodeId) -> Result<(), TrellisError> {
        self.node(id)?;
        if let Some(parent) = self.nodes[id.0].parent {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            pending.extend(self.nodes[current.0].children.drain(..));
            self.nodes[current.0].alive = false;
            self.nodes[current.0].parent = None;
        }
        Ok(())
    }

    /// Borrow a live node.
    pub fn node(&self, id: NodeId) -> Result<&LayoutNode, TrellisError> {
        self.nodes
            .get(id.0)
            .filter(|node| node.alive)
            .ok_or(TrellisError::NodeNotFound { id: id.0 })
    }

    /// Mutably borrow a live node.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, TrellisError> {
        self.nodes
            .get_mut(id.0)
            .filter(|node| node.alive)
            .ok_or(TrellisError::NodeNotFound { id: id.0 })
    }

    /// Parent of a node, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).filter(|n| n.alive)?.parent
    }

    /// Direct children in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .filter(|n| n.alive)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Ancestor ids, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = self.parent(ancestor);
        }
        chain
    }

    /// The node's glossary merged with all ancestors, nearer nodes winning.
    pub fn complete_glossary(&self, id: NodeId) -> Result<Glossary, TrellisError> {
        let mut merged = self.node(id)?.glossary.clone();
        for ancestor in self.ancestors(id) {
            merged = merged.merge_under(&self.node(ancestor)?.glossary);
        }
        Ok(merged)
    }

    /// [`LayoutContext`] view over one node, for handing to plugins.
    pub fn context(&self, id: NodeId) -> Result<TreeContext<'_>, TrellisError> {
        self.node(id)?;
        Ok(TreeContext { tree: self, id })
    }
}

/// `LayoutContext` implementation over a [`LayoutTree`] node.
pub struct TreeContext<'a> {
    tree: &'a LayoutTree,
    id: NodeId,
}

impl LayoutContext for TreeContext<'_> {
    fn plugin_name(&self) -> &str {
        &self.tree.nodes[self.id.0].plugin
    }

    fn glossary(&self) -> &Glossary {
        &self.tree.nodes[self.id.0].glossary
    }

    fn complete_glossary(&self) -> Glossary {
        // The node was checked live when the context was created.
        self.tree
            .complete_glossary(self.id)
            .unwrap_or_default()
    }

    fn ancestors(&self) -> Vec<(String, Glossary)> {
        self.tree
            .ancestors(self.id)
            .into_iter()
            .filter_map(|ancestor| self.tree.node(ancestor).ok())
            .map(|node| (node.plugin.clone(), node.glossary.clone()))
            .collect()
    }

    fn child_count(&self) -> usize {
        self.tree.children(self.id).len()
    }
}
