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

//! Default values: a literal of the field's type, or a lazy producer.

use super::value::ConfigValue;
use std::sync::Arc;

/// The default for a binding whose raw value is absent or empty.
///
/// A producer is invoked at most once per binding, lazily, only when the
/// default is actually needed. Binding itself happens exactly once per
/// declaration, so the producer can never run twice.
#[derive(Clone)]
pub enum DefaultValue {
    Literal(ConfigValue),
    Producer(Arc<dyn Fn() -> ConfigValue + Send + Sync>),
}

impl DefaultValue {
    pub fn literal(value: impl Into<ConfigValue>) -> Self {
        Self::Literal(value.into())
    }

    pub fn producer<F, V>(producer: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<ConfigValue>,
    {
        Self::Producer(Arc::new(move || producer().into()))
    }

    /// Resolve to a concrete value. Sanitizers are never applied to the
    /// result: defaults are already of the field's type.
    pub fn resolve(&self) -> ConfigValue {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Producer(producer) => producer(),
        }
    }
}

macro_rules! literal_from {
    ($($ty:ty),+ $(,)?) => {
        $(impl From<$ty> for DefaultValue {
            fn from(value: $ty) -> Self {
                Self::Literal(value.into())
            }
        })+
    };
}

literal_from!(
    ConfigValue,
    &str,
    String,
    f64,
    i64,
    bool,
    serde_json::Value,
    Vec<String>,
    Vec<&str>,
);

impl std::fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn literal_and_producer_resolve_identically() {
        let literal = DefaultValue::literal(5.0);
        let producer = DefaultValue::producer(|| 5.0);
        assert_eq!(literal.resolve(), producer.resolve());
        assert_eq!(literal.resolve(), ConfigValue::Number(5.0));
    }

    #[test]
    fn producer_is_lazy() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let default = DefaultValue::producer(|| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            "fallback"
        });
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
        assert_eq!(default.resolve(), ConfigValue::from("fallback"));
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn from_impl_builds_literals() {
        let default: DefaultValue = true.into();
        assert_eq!(default.resolve(), ConfigValue::Boolean(true));
    }
}
