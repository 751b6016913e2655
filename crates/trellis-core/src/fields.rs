// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative admin-form field descriptors.
//!
//! Plugins describe their forms as plain data; the host's form-rendering
//! layer turns these descriptors into actual widgets. Every field is backed
//! by exactly one glossary key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single option in a choice widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Stored glossary value. The empty string is the "unset" choice
    /// (no offset, inherit from above, default visibility).
    pub value: String,
    /// Label shown to the editor.
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The widget a form field asks the host to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    /// Single-select dropdown.
    Select { choices: Vec<Choice> },
    /// Single-select radio group.
    RadioSelect { choices: Vec<Choice> },
    /// A lone boolean checkbox.
    CheckboxInput,
    /// Multi-select checkbox group; the stored value is a string list.
    MultiCheckbox { choices: Vec<Choice> },
}

impl Widget {
    /// Choice list of this widget, empty for [`Widget::CheckboxInput`].
    pub fn choices(&self) -> &[Choice] {
        match self {
            Widget::Select { choices }
            | Widget::RadioSelect { choices }
            | Widget::MultiCheckbox { choices } => choices,
            Widget::CheckboxInput => &[],
        }
    }

    /// Whether the widget offers the empty "inherit from above" choice.
    pub fn has_inherit_choice(&self) -> bool {
        self.choices()
            .iter()
            .any(|c| c.value.is_empty() && c.label.contains("Inherit"))
    }
}

/// A declarative admin-form field backed by one glossary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Glossary key this field reads and writes.
    pub name: String,
    /// Label shown to the editor.
    pub label: String,
    /// Help text below the widget.
    pub help_text: String,
    /// Initial value for freshly created nodes.
    pub initial: Option<Value>,
    /// Widget to render.
    pub widget: Widget,
}
