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

//! Startup validation: the validator contract and a reusable
//! required-fields validator.

use crate::binding::binder::BoundConfig;
use crate::binding::value::ConfigValue;
use serde::Serialize;
use std::fmt;

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {}", self.field, self.message)
    }
}

/// A validation pass over the fully bound configuration.
///
/// An empty result means valid. The pass is synchronous: binding never
/// suspends, and integrators with asynchronous checks run them around
/// bootstrap.
pub trait ConfigValidator {
    fn validate(&self, config: &BoundConfig) -> Vec<ValidationError>;
}

/// Fails any listed field that is absent or an empty string.
///
/// NaN numbers also fail: they are the silent sentinel of the Number
/// sanitizer, so a required numeric field set to garbage is caught here
/// rather than surfacing as NaN at use sites.
#[derive(Debug, Clone, Default)]
pub struct RequiredFields {
    fields: Vec<String>,
}

impl RequiredFields {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl ConfigValidator for RequiredFields {
    fn validate(&self, config: &BoundConfig) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for field in &self.fields {
            let message = match config.get(field) {
                None | Some(ConfigValue::Absent) => Some("required but not set"),
                Some(ConfigValue::String(s)) if s.is_empty() => Some("required but empty"),
                Some(ConfigValue::Number(n)) if n.is_nan() => Some("required but not a number"),
                Some(_) => None,
            };
            if let Some(message) = message {
                errors.push(ValidationError::new(field.clone(), message));
            }
        }
        errors
    }
}
