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

//! Configuration error types.

use crate::startup::validators::ValidationError;
use thiserror::Error;

/// Every failure mode of the binding and startup phases.
///
/// Declaration errors are raised before any environment value is read.
/// `InvalidJson` is the only per-value conversion failure; the Number and
/// Boolean sanitizers never fail (see [`crate::binding::sanitize`]).
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(
        "options parse_as_json and parse_as_array are mutually exclusive, both set for field '{field}'"
    )]
    ConflictingParseOptions { field: String },
    #[error("option parse_as_json requires field '{field}' to be declared with FieldKind::Json")]
    JsonOptionOnNonJsonField { field: String },
    #[error("environment variable '{env_var}' does not contain valid JSON: {source}")]
    InvalidJson {
        env_var: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("config validation failed with {} error(s)", errors.len())]
    ValidationFailed { errors: Vec<ValidationError> },
}
