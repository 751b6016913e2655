// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry, layout tree, and save pipeline for the Trellis grid
//! framework.
//!
//! The registry stores the compiled-in layout plugins; the tree mirrors the
//! host's page-layout structure and hands plugins a read-only context over
//! their ancestry; the save pipeline applies one editor submission.

pub mod registry;
pub mod save;
pub mod tree;

pub use registry::PluginRegistry;
pub use save::save_node;
pub use tree::{LayoutNode, LayoutTree, NodeId, TreeContext};
