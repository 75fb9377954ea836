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

//! The startup orchestrator: dotenv, snapshot, binding, printing,
//! validation, and the process exit contract.

use super::printer::print_config;
use super::validators::ConfigValidator;
use crate::binding::binder::BoundConfig;
use crate::binding::error::ConfigurationError;
use crate::binding::schema::ConfigSchema;
use crate::binding::snapshot::EnvSnapshot;
use crate::binding::suggest;
use tracing::{error, info};

/// Integrator-supplied switches. Not read from the environment.
#[derive(Debug, Clone)]
pub struct StartupOptions {
    /// Print every diagnostics entry after binding. Off by default.
    pub print_on_startup: bool,
    /// Run the validator (when one is supplied). On by default.
    pub validate: bool,
    /// Load `.env` before capturing the snapshot; existing variables are
    /// never overwritten. Off by default.
    pub load_dotenv: bool,
    /// Warn about environment variables carrying this prefix that match no
    /// declaration.
    pub env_prefix: Option<String>,
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            print_on_startup: false,
            validate: true,
            load_dotenv: false,
            env_prefix: None,
        }
    }
}

/// Build the configuration from the process environment, then print and
/// validate per `options`.
///
/// Binding is one non-interruptible synchronous phase; nothing observes the
/// configuration before this returns.
pub fn bootstrap(
    schema: &ConfigSchema,
    validator: Option<&dyn ConfigValidator>,
    options: &StartupOptions,
) -> Result<BoundConfig, ConfigurationError> {
    if options.load_dotenv
        && let Ok(path) = dotenvy::dotenv()
    {
        info!(
            "Loaded environment variables from .env file at path: {}",
            path.display()
        );
    }
    let env = EnvSnapshot::capture();
    bootstrap_with_env(schema, validator, options, &env)
}

/// [`bootstrap`] against an explicit snapshot instead of the process
/// environment. This is the testable core; `load_dotenv` is ignored here
/// since the snapshot is already fixed.
pub fn bootstrap_with_env(
    schema: &ConfigSchema,
    validator: Option<&dyn ConfigValidator>,
    options: &StartupOptions,
    env: &EnvSnapshot,
) -> Result<BoundConfig, ConfigurationError> {
    if let Some(prefix) = &options.env_prefix {
        suggest::warn_unknown_vars(prefix, &schema.env_var_names(), env);
    }

    let (config, registry) = schema.build(env)?;

    if options.print_on_startup {
        print_config(&registry, &config);
    }

    if options.validate
        && let Some(validator) = validator
    {
        info!("Validating config...");
        let errors = validator.validate(&config);
        if !errors.is_empty() {
            for error in &errors {
                error!("{error}");
            }
            return Err(ConfigurationError::ValidationFailed { errors });
        }
        info!("Config is valid.");
    }

    Ok(config)
}

/// [`bootstrap`], terminating the process on failure.
///
/// Exit contract: the process continues with exit code 0 semantics on
/// successful (or skipped) validation; any configuration or validation
/// failure is logged and the process exits with code 1.
pub fn bootstrap_or_exit(
    schema: &ConfigSchema,
    validator: Option<&dyn ConfigValidator>,
    options: &StartupOptions,
) -> BoundConfig {
    match bootstrap(schema, validator, options) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {e}");
            std::process::exit(1);
        }
    }
}
