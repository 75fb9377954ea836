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

//! Typed environment-variable binding for process configuration.
//!
//! This crate ties configuration fields to environment variables through
//! declarative bindings:
//! - Each [`EnvBinding`] names one environment variable, one field
//!   identifier, and a declared [`FieldKind`].
//! - A [`ConfigSchema`] resolves all bindings exactly once against an
//!   [`EnvSnapshot`] of the environment, producing an immutable
//!   [`BoundConfig`] plus a [`DiagnosticsRegistry`] used only for
//!   redaction-aware startup logging.
//! - The [`startup`] module wires printing and validation into a single
//!   bootstrap step with a well-defined process exit contract.
//!
//! The environment is read once, at schema build time. Changing a variable
//! afterwards has no effect on an already built configuration.

pub mod binding;
pub mod startup;

pub use binding::binder::BoundConfig;
pub use binding::declaration::{EnvBinding, FieldKind};
pub use binding::defaults::DefaultValue;
pub use binding::diagnostics::{DiagnosticsEntry, DiagnosticsRegistry, SECRET_MASK};
pub use binding::error::ConfigurationError;
pub use binding::schema::ConfigSchema;
pub use binding::snapshot::EnvSnapshot;
pub use binding::value::ConfigValue;
pub use startup::bootstrap::{StartupOptions, bootstrap, bootstrap_or_exit, bootstrap_with_env};
pub use startup::printer::print_config;
pub use startup::validators::{ConfigValidator, RequiredFields, ValidationError};
