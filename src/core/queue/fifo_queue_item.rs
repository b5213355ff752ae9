use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;

pub type FifoCallback = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Message received from a FIFO queue, ordered per channel.
#[derive(Clone)]
pub struct FifoQueueItem {
    /// Identifier assigned by the queue implementation.
    pub message_id: String,
    /// Channel the message relates to; also the FIFO group.
    pub slack_channel_id: String,
    pub receive_timestamp: DateTime<Utc>,
    pub body: String,
    ack: FifoCallback,
    nack: FifoCallback,
}

impl FifoQueueItem {
    pub fn new(
        message_id: impl Into<String>,
        slack_channel_id: impl Into<String>,
        body: impl Into<String>,
        ack: FifoCallback,
        nack: FifoCallback,
    ) -> Self {
        Self {
            message_id: message_id.into(),
            slack_channel_id: slack_channel_id.into(),
            receive_timestamp: Utc::now(),
            body: body.into(),
            ack,
            nack,
        }
    }

    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }

    /// Marks the message as processed, removing it from the queue.
    pub async fn ack(&self) {
        (self.ack)().await
    }

    /// Makes the message available for reprocessing.
    pub async fn nack(&self) {
        (self.nack)().await
    }
}

impl fmt::Debug for FifoQueueItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FifoQueueItem")
            .field("message_id", &self.message_id)
            .field("slack_channel_id", &self.slack_channel_id)
            .field("receive_timestamp", &self.receive_timestamp)
            .field("body_len", &self.body.len())
            .finish()
    }
}
