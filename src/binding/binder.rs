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

//! The field binder and the immutable bound configuration.

use super::declaration::{EnvBinding, FieldKind};
use super::diagnostics::{DiagnosticsEntry, DiagnosticsRegistry, SECRET_MASK};
use super::error::ConfigurationError;
use super::sanitize;
use super::snapshot::EnvSnapshot;
use super::value::ConfigValue;
use std::collections::HashMap;
use tracing::debug;

/// Bind one declaration: read the raw value once, record the diagnostics
/// entry, then either resolve the default or run the matching sanitizer.
///
/// The single registry write is the only side effect.
pub(crate) fn bind_field(
    binding: &EnvBinding,
    env: &EnvSnapshot,
    registry: &mut DiagnosticsRegistry,
) -> Result<ConfigValue, ConfigurationError> {
    let raw = env.get(binding.env_var());
    let kind = binding.effective_kind();

    registry.set(diagnostics_entry(binding, raw));

    let value = match raw {
        // Absent and empty are equivalent: both take the default path, and
        // the sanitizer never sees them.
        None | Some("") => match binding.default() {
            Some(default) => default.resolve(),
            None if kind == FieldKind::Array => ConfigValue::Array(Vec::new()),
            None => ConfigValue::Absent,
        },
        Some(raw) => match kind {
            FieldKind::String => ConfigValue::String(sanitize::sanitize_string(
                raw,
                binding.removes_trailing_slash(),
            )),
            FieldKind::Number => ConfigValue::Number(sanitize::sanitize_number(raw)),
            FieldKind::Boolean => ConfigValue::Boolean(sanitize::sanitize_boolean(raw)),
            FieldKind::Json => ConfigValue::Json(sanitize::sanitize_json(raw).map_err(
                |source| ConfigurationError::InvalidJson {
                    env_var: binding.env_var().to_owned(),
                    source,
                },
            )?),
            FieldKind::Array => {
                ConfigValue::Array(sanitize::sanitize_array(raw, binding.delimiter()))
            }
        },
    };

    debug!(
        "Bound field '{}' from '{}' as {}",
        binding.field(),
        binding.env_var(),
        kind
    );
    Ok(value)
}

fn diagnostics_entry(binding: &EnvBinding, raw: Option<&str>) -> DiagnosticsEntry {
    let raw_value = if binding.is_exposed() {
        raw.map(str::to_owned)
    } else {
        Some(SECRET_MASK.to_owned())
    };
    DiagnosticsEntry {
        env_var: binding.env_var().to_owned(),
        field: binding.field().to_owned(),
        raw_value,
        exposed: binding.is_exposed(),
        parse_as_json: binding.parses_as_json(),
    }
}

/// The configuration object produced by a schema build.
///
/// Computed exactly once; every reader sees the same frozen values, and the
/// environment is never consulted again.
#[derive(Debug, Clone, Default)]
pub struct BoundConfig {
    values: HashMap<String, ConfigValue>,
}

impl BoundConfig {
    pub(crate) fn new(values: HashMap<String, ConfigValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, field: &str) -> Option<&ConfigValue> {
        self.values.get(field)
    }

    pub fn string(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(ConfigValue::as_str)
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(ConfigValue::as_number)
    }

    pub fn boolean(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(ConfigValue::as_bool)
    }

    pub fn json(&self, field: &str) -> Option<&serde_json::Value> {
        self.get(field).and_then(ConfigValue::as_json)
    }

    pub fn array(&self, field: &str) -> Option<&[String]> {
        self.get(field).and_then(ConfigValue::as_array)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::defaults::DefaultValue;

    fn bind(binding: EnvBinding, env: &EnvSnapshot) -> ConfigValue {
        let mut registry = DiagnosticsRegistry::new();
        bind_field(&binding, env, &mut registry).unwrap()
    }

    #[test]
    fn present_value_goes_through_the_sanitizer() {
        let env: EnvSnapshot = [("PORT", "8080")].into_iter().collect();
        let value = bind(EnvBinding::new("PORT", "port", FieldKind::Number), &env);
        assert_eq!(value, ConfigValue::Number(8080.0));
    }

    #[test]
    fn absent_value_resolves_the_default() {
        let env = EnvSnapshot::default();
        let binding =
            EnvBinding::new("BASE_URL", "base_url", FieldKind::String).with_default("fallback");
        assert_eq!(bind(binding, &env), ConfigValue::from("fallback"));
    }

    #[test]
    fn empty_value_resolves_the_default() {
        let env: EnvSnapshot = [("BASE_URL", "")].into_iter().collect();
        let binding = EnvBinding::new("BASE_URL", "base_url", FieldKind::String)
            .with_default(DefaultValue::producer(|| "fallback"));
        assert_eq!(bind(binding, &env), ConfigValue::from("fallback"));
    }

    #[test]
    fn absent_value_without_default_is_absent() {
        let env = EnvSnapshot::default();
        let value = bind(EnvBinding::new("NAME", "name", FieldKind::String), &env);
        assert!(value.is_absent());
    }

    #[test]
    fn absent_array_without_default_is_empty() {
        let env = EnvSnapshot::default();
        let binding = EnvBinding::new("TAGS", "tags", FieldKind::Array).parse_as_array();
        assert_eq!(bind(binding, &env), ConfigValue::Array(Vec::new()));
    }

    #[test]
    fn absent_array_with_default_keeps_the_default_unchanged() {
        let env = EnvSnapshot::default();
        let binding = EnvBinding::new("TAGS", "tags", FieldKind::Array)
            .parse_as_array()
            .with_default(vec!["defaultValue"]);
        assert_eq!(bind(binding, &env), ConfigValue::from(vec!["defaultValue"]));
    }

    #[test]
    fn default_is_not_sanitized() {
        // A defaulted string keeps its trailing slash even when the binding
        // strips slashes from raw values.
        let env = EnvSnapshot::default();
        let binding = EnvBinding::new("BASE_URL", "base_url", FieldKind::String)
            .remove_trailing_slash()
            .with_default("http://localhost/");
        assert_eq!(bind(binding, &env), ConfigValue::from("http://localhost/"));
    }

    #[test]
    fn malformed_json_propagates_a_conversion_error() {
        let env: EnvSnapshot = [("JSON_VAR", "{broken")].into_iter().collect();
        let binding = EnvBinding::new("JSON_VAR", "json_var", FieldKind::Json).parse_as_json();
        let mut registry = DiagnosticsRegistry::new();
        let result = bind_field(&binding, &env, &mut registry);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidJson { env_var, .. }) if env_var == "JSON_VAR"
        ));
    }

    #[test]
    fn exposed_binding_records_the_raw_value() {
        let env: EnvSnapshot = [("PORT", "8080")].into_iter().collect();
        let mut registry = DiagnosticsRegistry::new();
        let binding = EnvBinding::new("PORT", "port", FieldKind::Number).exposed();
        bind_field(&binding, &env, &mut registry).unwrap();

        let entry = registry.get("PORT").unwrap();
        assert_eq!(entry.raw_value.as_deref(), Some("8080"));
        assert!(entry.exposed);
    }

    #[test]
    fn unexposed_binding_records_only_the_mask() {
        let env: EnvSnapshot = [("API_KEY", "s3cr3t")].into_iter().collect();
        let mut registry = DiagnosticsRegistry::new();
        let binding = EnvBinding::new("API_KEY", "api_key", FieldKind::String);
        bind_field(&binding, &env, &mut registry).unwrap();

        let entry = registry.get("API_KEY").unwrap();
        assert_eq!(entry.raw_value.as_deref(), Some(SECRET_MASK));
        assert!(!entry.exposed);
    }

    #[test]
    fn exposed_unset_binding_records_no_raw_value() {
        let env = EnvSnapshot::default();
        let mut registry = DiagnosticsRegistry::new();
        let binding = EnvBinding::new("ENV_NAME", "env_name", FieldKind::String).exposed();
        bind_field(&binding, &env, &mut registry).unwrap();
        assert_eq!(registry.get("ENV_NAME").unwrap().raw_value, None);
    }
}
