use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::util::hash_util::hash;

/// An issue moved from one channel to another, keyed by correlation ID.
///
/// New alerts with the same correlation ID are processed in the target channel
/// rather than the original one. Storage keeps the JSON representation only
/// and must not depend on its structure.
pub trait MoveMapping: Send + Sync {
    /// Channel where the move was initiated.
    fn channel_id(&self) -> &str;

    /// Deterministic storage key over the original channel and correlation ID.
    fn unique_id(&self) -> String;

    /// Raw correlation ID. Not URL safe; see [`encoded_correlation_id`].
    fn correlation_id(&self) -> &str;

    fn to_json(&self) -> serde_json::Result<String>;
}

/// Percent-encodes a correlation ID for use in URLs and storage paths.
pub fn encoded_correlation_id(mapping: &dyn MoveMapping) -> Cow<'_, str> {
    urlencoding::encode(mapping.correlation_id())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueMoveMapping {
    pub timestamp: DateTime<Utc>,
    pub correlation_id: String,
    pub original_channel_id: String,
    pub target_channel_id: String,
}

impl IssueMoveMapping {
    pub fn new(
        correlation_id: impl Into<String>,
        original_channel_id: impl Into<String>,
        target_channel_id: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            correlation_id: correlation_id.into(),
            original_channel_id: original_channel_id.into(),
            target_channel_id: target_channel_id.into(),
        }
    }
}

impl MoveMapping for IssueMoveMapping {
    fn channel_id(&self) -> &str {
        &self.original_channel_id
    }

    fn unique_id(&self) -> String {
        hash(&[
            "movemapping",
            self.original_channel_id.as_str(),
            self.correlation_id.as_str(),
        ])
    }

    fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
