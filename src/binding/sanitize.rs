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

//! Per-kind sanitizers: pure conversions from a raw string to a typed value.
//!
//! Sanitizers run only when a concrete raw value is present; absent and
//! empty values go through default resolution instead and are never
//! sanitized.

/// Identity, optionally stripping exactly one trailing `/`.
pub fn sanitize_string(value: &str, remove_trailing_slash: bool) -> String {
    if remove_trailing_slash && let Some(stripped) = value.strip_suffix('/') {
        return stripped.to_owned();
    }
    value.to_owned()
}

/// Numeric parse. Non-numeric input yields `f64::NAN` instead of an error.
///
/// The silent NaN sentinel mirrors the behavior of the systems this crate
/// replaces; integrators who want strict numbers must reject NaN in their
/// validator.
pub fn sanitize_number(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// `true` iff the raw string is exactly `"true"`.
///
/// Everything else, including `"false"`, `"1"`, `"TRUE"` and arbitrary
/// text, yields `false`. This never fails; see [`sanitize_number`] for the
/// same caveat.
pub fn sanitize_boolean(value: &str) -> bool {
    value == "true"
}

/// JSON text parse. Malformed input is the one per-value failure mode of
/// the whole binding phase.
pub fn sanitize_json(value: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(value)
}

/// Split on `delimiter` and trim surrounding whitespace from each element,
/// preserving order. A value that does not contain the delimiter is a
/// single-element list.
pub fn sanitize_array(value: &str, delimiter: &str) -> Vec<String> {
    value
        .split(delimiter)
        .map(|element| element.trim().to_owned())
        .collect()
}
