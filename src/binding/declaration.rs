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

//! Binding declarations: one environment variable, one field, one kind.

use super::defaults::DefaultValue;
use super::error::ConfigurationError;
use serde::Serialize;
use strum::{Display, EnumString};

pub const DEFAULT_DELIMITER: &str = ",";

/// The declared type of a bound field.
///
/// The kind is supplied explicitly by the integrator; nothing is inferred
/// from runtime type metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Json,
    Array,
}

/// An immutable declaration tying one configuration field to one
/// environment variable.
///
/// Built with [`EnvBinding::new`] plus the chained option setters, then
/// handed to a [`crate::ConfigSchema`]. Option conflicts are reported by
/// [`EnvBinding::validate`] before any environment value is read.
#[derive(Clone)]
pub struct EnvBinding {
    env_var: String,
    field: String,
    kind: FieldKind,
    default: Option<DefaultValue>,
    expose: bool,
    remove_trailing_slash: bool,
    parse_as_json: bool,
    parse_as_array: bool,
    delimiter: String,
}

impl EnvBinding {
    pub fn new(env_var: impl Into<String>, field: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            env_var: env_var.into(),
            field: field.into(),
            kind,
            default: None,
            expose: false,
            remove_trailing_slash: false,
            parse_as_json: false,
            parse_as_array: false,
            delimiter: DEFAULT_DELIMITER.to_owned(),
        }
    }

    /// Default used when the variable is unset or empty.
    pub fn with_default(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Show the raw and bound values in startup logs instead of the
    /// redaction mask.
    pub fn exposed(mut self) -> Self {
        self.expose = true;
        self
    }

    /// Strip exactly one trailing `/` from the raw value. String kind only.
    pub fn remove_trailing_slash(mut self) -> Self {
        self.remove_trailing_slash = true;
        self
    }

    /// Parse the raw value as JSON text. Requires [`FieldKind::Json`].
    pub fn parse_as_json(mut self) -> Self {
        self.parse_as_json = true;
        self
    }

    /// Split the raw value into an ordered list of trimmed elements.
    pub fn parse_as_array(mut self) -> Self {
        self.parse_as_array = true;
        self
    }

    /// Array element delimiter, `","` unless set.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    pub fn is_exposed(&self) -> bool {
        self.expose
    }

    pub fn removes_trailing_slash(&self) -> bool {
        self.remove_trailing_slash
    }

    pub fn parses_as_json(&self) -> bool {
        self.parse_as_json
    }

    pub fn parses_as_array(&self) -> bool {
        self.parse_as_array
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// The kind the sanitizer dispatch actually uses: `parse_as_json` and
    /// `parse_as_array` override the declared kind.
    pub fn effective_kind(&self) -> FieldKind {
        if self.parse_as_json {
            FieldKind::Json
        } else if self.parse_as_array {
            FieldKind::Array
        } else {
            self.kind
        }
    }

    /// Declaration-time checks, run for the whole schema before the first
    /// environment read.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.parse_as_json && self.parse_as_array {
            return Err(ConfigurationError::ConflictingParseOptions {
                field: self.field.clone(),
            });
        }
        if self.parse_as_json && self.kind != FieldKind::Json {
            return Err(ConfigurationError::JsonOptionOnNonJsonField {
                field: self.field.clone(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for EnvBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvBinding")
            .field("env_var", &self.env_var)
            .field("field", &self.field)
            .field("kind", &self.kind)
            .field("has_default", &self.default.is_some())
            .field("expose", &self.expose)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_kind_follows_parse_options() {
        let binding = EnvBinding::new("JSON_VAR", "json_var", FieldKind::Json).parse_as_json();
        assert_eq!(binding.effective_kind(), FieldKind::Json);

        let binding = EnvBinding::new("ARRAY_VAR", "array_var", FieldKind::String).parse_as_array();
        assert_eq!(binding.effective_kind(), FieldKind::Array);

        let binding = EnvBinding::new("PORT", "port", FieldKind::Number);
        assert_eq!(binding.effective_kind(), FieldKind::Number);
    }

    #[test]
    fn conflicting_parse_options_fail_validation() {
        let binding = EnvBinding::new("VAR", "var", FieldKind::Json)
            .parse_as_json()
            .parse_as_array();
        assert!(matches!(
            binding.validate(),
            Err(ConfigurationError::ConflictingParseOptions { field }) if field == "var"
        ));
    }

    #[test]
    fn parse_as_json_requires_json_kind() {
        let binding = EnvBinding::new("VAR", "var", FieldKind::String).parse_as_json();
        assert!(matches!(
            binding.validate(),
            Err(ConfigurationError::JsonOptionOnNonJsonField { field }) if field == "var"
        ));

        let binding = EnvBinding::new("VAR", "var", FieldKind::Json).parse_as_json();
        assert!(binding.validate().is_ok());
    }

    #[test]
    fn field_kind_round_trips_through_strum() {
        use std::str::FromStr;
        assert_eq!(FieldKind::Boolean.to_string(), "boolean");
        assert_eq!(FieldKind::from_str("array").unwrap(), FieldKind::Array);
    }
}
