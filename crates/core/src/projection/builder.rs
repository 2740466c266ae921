// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered object builder enforcing the empty-list omission rule

use super::Projection;
use serde_json::Value;

/// Builds a [`Projection`] one key at a time, in insertion order
#[derive(Debug, Default)]
pub struct ProjectionBuilder {
    map: Projection,
}

impl ProjectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.map.insert(key.to_string(), value.into());
        self
    }

    /// Put the value only when present
    pub fn put_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.put(key, v),
            None => self,
        }
    }

    /// Put the list only when it has at least one element
    pub fn put_if_non_empty<I, V>(self, key: &str, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let list: Vec<Value> = items.into_iter().map(Into::into).collect();
        if list.is_empty() {
            self
        } else {
            self.put(key, Value::Array(list))
        }
    }

    pub fn build(self) -> Projection {
        self.map
    }
}

impl From<ProjectionBuilder> for Value {
    fn from(builder: ProjectionBuilder) -> Self {
        Value::Object(builder.map)
    }
}
