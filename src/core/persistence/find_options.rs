use std::collections::BTreeMap;

use serde_json::Value;

/// Key filters passed to the storage backend when searching issues.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    equals: BTreeMap<String, Value>,
    not_equals: BTreeMap<String, Value>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_equals(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.equals.insert(key.into(), value.into());
        self
    }

    pub fn with_key_not_equals(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.not_equals.insert(key.into(), value.into());
        self
    }

    pub fn equals(&self) -> &BTreeMap<String, Value> {
        &self.equals
    }

    pub fn not_equals(&self) -> &BTreeMap<String, Value> {
        &self.not_equals
    }
}
