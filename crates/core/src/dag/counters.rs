// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counter snapshots

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct Counter {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub display_name: String,
    #[prost(int64, tag = "3")]
    pub value: i64,
}

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct CounterGroup {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub display_name: String,
    #[prost(message, repeated, tag = "3")]
    pub counters: Vec<Counter>,
}

/// Counter groups in the order the engine reported them
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct Counters {
    #[prost(message, repeated, tag = "1")]
    pub groups: Vec<CounterGroup>,
}

impl Counter {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            value,
        }
    }
}

impl CounterGroup {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            counters: Vec::new(),
        }
    }

    pub fn with_counter(mut self, counter: Counter) -> Self {
        self.counters.push(counter);
        self
    }
}

impl Counters {
    pub fn with_group(mut self, group: CounterGroup) -> Self {
        self.groups.push(group);
        self
    }
}
