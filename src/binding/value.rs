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

//! The typed value model for bound fields.

use std::fmt;

/// A resolved configuration value.
///
/// `Absent` marks a field whose raw value was missing or empty and that had
/// no default. It is a real value, not an error: optional fields stay
/// addressable on the bound configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Json(serde_json::Value),
    Array(Vec<String>),
    Absent,
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric value, including the NaN sentinel produced by the Number
    /// sanitizer on non-numeric input.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Json(v) => write!(f, "{v}"),
            Self::Array(items) => write!(f, "{}", items.join(",")),
            Self::Absent => Ok(()),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(value: Vec<String>) -> Self {
        Self::Array(value)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(value: Vec<&str>) -> Self {
        Self::Array(value.into_iter().map(str::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        assert_eq!(ConfigValue::from("url").as_str(), Some("url"));
        assert_eq!(ConfigValue::from(42.0).as_number(), Some(42.0));
        assert_eq!(ConfigValue::from(true).as_bool(), Some(true));
        assert_eq!(
            ConfigValue::from(vec!["a", "b"]).as_array(),
            Some(["a".to_owned(), "b".to_owned()].as_slice())
        );
        assert!(ConfigValue::Absent.is_absent());
    }

    #[test]
    fn accessors_reject_other_variants() {
        assert_eq!(ConfigValue::from(true).as_str(), None);
        assert_eq!(ConfigValue::from("42").as_number(), None);
        assert_eq!(ConfigValue::Absent.as_json(), None);
    }

    #[test]
    fn display_formats_each_variant() {
        assert_eq!(ConfigValue::from("value").to_string(), "value");
        assert_eq!(ConfigValue::from(1.5).to_string(), "1.5");
        assert_eq!(ConfigValue::from(false).to_string(), "false");
        assert_eq!(ConfigValue::from(vec!["a", "b"]).to_string(), "a,b");
        assert_eq!(ConfigValue::Absent.to_string(), "");
        assert_eq!(
            ConfigValue::from(serde_json::json!({"k": 1})).to_string(),
            "{\"k\":1}"
        );
    }
}
