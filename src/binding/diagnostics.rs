/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

//! The diagnostics registry: per-binding metadata for startup logging.
//!
//! The registry is an explicit-lifecycle object: created by the schema
//! build, populated during the single synchronous binding phase, read by
//! the printer afterwards. It is never consulted by binding logic, and
//! there is no deletion API; entries live as long as the registry.

use serde::Serialize;

/// Stand-in stored and logged for values whose binding is not exposed.
pub const SECRET_MASK: &str = "******";

/// Metadata recorded for one binding, keyed by environment-variable name.
///
/// For non-exposed bindings the mask is stored instead of the raw value, so
/// a sensitive value never reaches the registry at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticsEntry {
    pub env_var: String,
    pub field: String,
    /// Actual raw value when exposed (`None` if the variable was unset),
    /// [`SECRET_MASK`] otherwise.
    pub raw_value: Option<String>,
    pub exposed: bool,
    pub parse_as_json: bool,
}

/// Insertion-ordered map from environment-variable name to the last bound
/// metadata. Binding the same variable twice overwrites in place.
///
/// No locking: writes happen only during the synchronous binding phase,
/// reads only afterwards.
#[derive(Debug, Default)]
pub struct DiagnosticsRegistry {
    entries: Vec<DiagnosticsEntry>,
}

impl DiagnosticsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `entry.env_var`, last write wins.
    pub fn set(&mut self, entry: DiagnosticsEntry) {
        match self.entries.iter_mut().find(|e| e.env_var == entry.env_var) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, env_var: &str) -> Option<&DiagnosticsEntry> {
        self.entries.iter().find(|e| e.env_var == env_var)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticsEntry> {
        self.entries.iter()
    }

    pub fn for_each(&self, mut visitor: impl FnMut(&DiagnosticsEntry)) {
        for entry in &self.entries {
            visitor(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(env_var: &str, field: &str) -> DiagnosticsEntry {
        DiagnosticsEntry {
            env_var: env_var.to_owned(),
            field: field.to_owned(),
            raw_value: Some(SECRET_MASK.to_owned()),
            exposed: false,
            parse_as_json: false,
        }
    }

    #[test]
    fn set_preserves_insertion_order() {
        let mut registry = DiagnosticsRegistry::new();
        registry.set(entry("B_VAR", "b"));
        registry.set(entry("A_VAR", "a"));
        let order: Vec<&str> = registry.iter().map(|e| e.env_var.as_str()).collect();
        assert_eq!(order, vec!["B_VAR", "A_VAR"]);
    }

    #[test]
    fn rebinding_overwrites_in_place() {
        let mut registry = DiagnosticsRegistry::new();
        registry.set(entry("VAR", "first"));
        registry.set(entry("OTHER", "other"));
        registry.set(entry("VAR", "second"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("VAR").unwrap().field, "second");
        // Overwriting keeps the original position.
        assert_eq!(registry.iter().next().unwrap().env_var, "VAR");
    }

    #[test]
    fn for_each_visits_every_entry() {
        let mut registry = DiagnosticsRegistry::new();
        registry.set(entry("A", "a"));
        registry.set(entry("B", "b"));
        let mut seen = 0;
        registry.for_each(|_| seen += 1);
        assert_eq!(seen, 2);
    }
}
