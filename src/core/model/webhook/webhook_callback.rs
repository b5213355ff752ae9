use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};

/// Callback delivered to a webhook target when a user clicks a webhook button.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookCallback {
    /// ID of the clicked webhook.
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub user_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub user_real_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub channel_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub message_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub timestamp: DateTime<Utc>,

    /// Plain text input values keyed by input ID.
    #[serde_as(as = "DefaultOnNull")]
    pub input: BTreeMap<String, String>,

    /// Selected checkbox option values keyed by checkbox input ID.
    #[serde_as(as = "DefaultOnNull")]
    pub checkbox_input: BTreeMap<String, Vec<String>>,

    /// Webhook payload merged with alert metadata.
    #[serde_as(as = "DefaultOnNull")]
    pub payload: BTreeMap<String, Value>,
}

impl WebhookCallback {
    pub fn payload_value(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Payload string value, empty when missing or not a string.
    pub fn payload_string(&self, key: &str) -> &str {
        self.payload
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn payload_int(&self, key: &str, default: i64) -> i64 {
        self.payload
            .get(key)
            .and_then(Value::as_i64)
            .unwrap_or(default)
    }

    pub fn payload_bool(&self, key: &str, default: bool) -> bool {
        self.payload
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    pub fn input_value(&self, key: &str) -> &str {
        self.input.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn checkbox_selected_values(&self, key: &str) -> &[String] {
        self.checkbox_input
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
