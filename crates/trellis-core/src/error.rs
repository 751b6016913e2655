// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Trellis grid plugin framework.

use thiserror::Error;

/// The primary error type used across Trellis plugins and core operations.
#[derive(Debug, Error)]
pub enum TrellisError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Form validation failure, surfaced to the editor at save time.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Broken plugin wiring that no editor input can repair, such as a
    /// column whose ancestry does not resolve to a container.
    #[error("improperly configured: {0}")]
    ImproperlyConfigured(String),

    /// Requested plugin was not found in the registry.
    #[error("plugin not found: {name}")]
    PluginNotFound { name: String },

    /// A layout node id does not resolve to a live node.
    #[error("layout node {id} not found")]
    NodeNotFound { id: usize },

    /// A plugin was placed under a parent its `parent_classes` rejects.
    #[error("plugin `{child}` cannot be placed under `{parent}`")]
    InvalidParent { child: String, parent: String },
}

impl TrellisError {
    /// Shorthand for a [`TrellisError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        TrellisError::Validation {
            message: message.into(),
        }
    }
}
