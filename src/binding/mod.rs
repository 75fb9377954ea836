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

//! The field-binding engine.
//!
//! Data flows one direction: environment snapshot → sanitizer → bound value
//! → diagnostics entry. The registry is consulted only for diagnostics,
//! never for binding logic.

pub mod binder;
pub mod declaration;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod sanitize;
pub mod schema;
pub mod snapshot;
pub(crate) mod suggest;
pub mod value;

pub use binder::BoundConfig;
pub use declaration::{EnvBinding, FieldKind};
pub use defaults::DefaultValue;
pub use diagnostics::{DiagnosticsEntry, DiagnosticsRegistry, SECRET_MASK};
pub use error::ConfigurationError;
pub use schema::ConfigSchema;
pub use snapshot::EnvSnapshot;
pub use value::ConfigValue;
