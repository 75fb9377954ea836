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

//! The configuration schema: an ordered list of binding declarations.

use super::binder::{self, BoundConfig};
use super::declaration::EnvBinding;
use super::diagnostics::DiagnosticsRegistry;
use super::error::ConfigurationError;
use super::snapshot::EnvSnapshot;
use std::collections::HashMap;
use tracing::info;

/// All binding declarations of a process, applied in declaration order.
///
/// # Example
/// ```
/// use tether::{ConfigSchema, EnvBinding, EnvSnapshot, FieldKind};
///
/// let schema = ConfigSchema::new()
///     .bind(EnvBinding::new("PORT", "port", FieldKind::Number).with_default(3000.0))
///     .bind(EnvBinding::new("API_KEY", "api_key", FieldKind::String));
///
/// let env: EnvSnapshot = [("API_KEY", "s3cr3t")].into_iter().collect();
/// let (config, _registry) = schema.build(&env).unwrap();
/// assert_eq!(config.number("port"), Some(3000.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigSchema {
    bindings: Vec<EnvBinding>,
}

impl ConfigSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, binding: EnvBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    pub fn bindings(&self) -> &[EnvBinding] {
        &self.bindings
    }

    /// Every environment-variable name the schema consumes.
    pub fn env_var_names(&self) -> Vec<&str> {
        self.bindings.iter().map(EnvBinding::env_var).collect()
    }

    /// Resolve every binding against the snapshot, exactly once.
    ///
    /// All declarations are validated first, so a declaration error aborts
    /// the build before any environment value is read. Binding is a single
    /// synchronous pass; the returned configuration is frozen.
    pub fn build(
        &self,
        env: &EnvSnapshot,
    ) -> Result<(BoundConfig, DiagnosticsRegistry), ConfigurationError> {
        for binding in &self.bindings {
            binding.validate()?;
        }

        let mut registry = DiagnosticsRegistry::new();
        let mut values = HashMap::with_capacity(self.bindings.len());
        for binding in &self.bindings {
            let value = binder::bind_field(binding, env, &mut registry)?;
            values.insert(binding.field().to_owned(), value);
        }

        info!("Bound {} config field(s) from environment.", values.len());
        Ok((BoundConfig::new(values), registry))
    }
}
