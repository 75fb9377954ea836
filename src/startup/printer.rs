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

//! Redaction-aware startup printing of the diagnostics registry.

use crate::binding::binder::BoundConfig;
use crate::binding::diagnostics::{DiagnosticsRegistry, SECRET_MASK};
use tracing::info;

/// Emit one record per diagnostics entry.
///
/// Exposed entries show the real raw and bound values; everything else
/// shows [`SECRET_MASK`] for both. The output shape is diagnostic and not
/// guaranteed stable across versions.
pub fn print_config(registry: &DiagnosticsRegistry, config: &BoundConfig) {
    info!("Config values:");
    registry.for_each(|entry| {
        let (raw, bound) = if entry.exposed {
            let raw = entry.raw_value.clone().unwrap_or_default();
            let bound = config
                .get(&entry.field)
                .map(ToString::to_string)
                .unwrap_or_default();
            (raw, bound)
        } else {
            (SECRET_MASK.to_owned(), SECRET_MASK.to_owned())
        };
        info!(
            "field: '{}', env_var: '{}', raw: '{}', bound: '{}'",
            entry.field, entry.env_var, raw, bound
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::declaration::{EnvBinding, FieldKind};
    use crate::binding::schema::ConfigSchema;
    use crate::binding::snapshot::EnvSnapshot;

    // The printer only reads; this pins down that printing a mixed
    // exposed/hidden registry does not panic and touches every entry.
    #[test]
    fn print_config_handles_exposed_and_hidden_entries() {
        let schema = ConfigSchema::new()
            .bind(EnvBinding::new("PORT", "port", FieldKind::Number).exposed())
            .bind(EnvBinding::new("API_KEY", "api_key", FieldKind::String));
        let env: EnvSnapshot = [("PORT", "8080"), ("API_KEY", "s3cr3t")]
            .into_iter()
            .collect();
        let (config, registry) = schema.build(&env).unwrap();
        print_config(&registry, &config);
    }
}
