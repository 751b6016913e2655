// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The key-value configuration blob attached to every layout node.
//!
//! The host CMS serializes the glossary opaquely; Trellis only agrees on the
//! key vocabulary. Per-breakpoint keys are prefixed with the breakpoint's
//! short name, e.g. `"md-column-width"`.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::breakpoint::Breakpoint;

/// Glossary key holding a container's selected breakpoint names.
pub const BREAKPOINTS_KEY: &str = "breakpoints";

/// Glossary key holding a container's fluid flag.
pub const FLUID_KEY: &str = "fluid";

/// A structured key-value blob persisted by the host on a layout node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glossary(BTreeMap<String, Value>);

impl Glossary {
    /// Create an empty glossary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value lookup. Non-string values yield `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Boolean value lookup. Missing or non-boolean values yield `false`.
    pub fn get_bool(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// String-list value lookup. Missing keys yield an empty list; non-string
    /// entries are skipped.
    pub fn get_str_list(&self, key: &str) -> Vec<String> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The container breakpoint selection, in canonical narrow-to-wide order.
    ///
    /// Entries that do not name a known breakpoint are skipped.
    pub fn breakpoints(&self) -> Vec<Breakpoint> {
        let mut selected: Vec<Breakpoint> = self
            .get_str_list(BREAKPOINTS_KEY)
            .iter()
            .filter_map(|name| Breakpoint::from_str(name).ok())
            .collect();
        selected.sort();
        selected.dedup();
        selected
    }

    /// Insert or overwrite a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Store a breakpoint selection under [`BREAKPOINTS_KEY`].
    pub fn set_breakpoints(&mut self, breakpoints: &[Breakpoint]) {
        let names: Vec<Value> = breakpoints
            .iter()
            .map(|bp| Value::String(bp.to_string()))
            .collect();
        self.set(BREAKPOINTS_KEY, names);
    }

    /// Remove a key, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge this glossary over an ancestor's: keys present here win.
    pub fn merge_under(&self, ancestor: &Glossary) -> Glossary {
        let mut merged = ancestor.0.clone();
        for (key, value) in &self.0 {
            merged.insert(key.clone(), value.clone());
        }
        Glossary(merged)
    }
}

impl IntoIterator for Glossary {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for Glossary {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Glossary(iter.into_iter().collect())
    }
}
