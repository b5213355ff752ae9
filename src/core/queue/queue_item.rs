use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;

/// Asynchronous acknowledgement hook supplied by the queue implementation.
pub type QueueCallback = Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Message received from a standard (non-FIFO) queue.
#[derive(Clone)]
pub struct QueueItem {
    pub message_id: String,
    pub group_id: String,
    pub receive_timestamp: DateTime<Utc>,
    pub visibility_timeout: Duration,
    pub body: String,
    ack: QueueCallback,
    extend: QueueCallback,
}

impl QueueItem {
    pub fn new(
        message_id: impl Into<String>,
        group_id: impl Into<String>,
        body: impl Into<String>,
        visibility_timeout: Duration,
        ack: QueueCallback,
        extend: QueueCallback,
    ) -> Self {
        Self {
            message_id: message_id.into(),
            group_id: group_id.into(),
            receive_timestamp: Utc::now(),
            visibility_timeout,
            body: body.into(),
            ack,
            extend,
        }
    }

    /// Decodes the JSON body, typically into an [`Alert`](crate::core::model::alert::alert::Alert).
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }

    /// Removes the message from the queue.
    pub async fn ack(&self) -> anyhow::Result<()> {
        (self.ack)().await
    }

    /// Extends the visibility timeout while the message is still being processed.
    pub async fn extend(&self) -> anyhow::Result<()> {
        (self.extend)().await
    }
}

impl fmt::Debug for QueueItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueItem")
            .field("message_id", &self.message_id)
            .field("group_id", &self.group_id)
            .field("receive_timestamp", &self.receive_timestamp)
            .field("visibility_timeout", &self.visibility_timeout)
            .field("body_len", &self.body.len())
            .finish()
    }
}
