use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};

use crate::core::model::alert::alert_severity::AlertSeverity;
use crate::core::model::webhook::webhook::Webhook;
use crate::core::util::hash_util::hash;

/// A single alert sent by a producer.
///
/// Alerts with the same `correlation_id` are grouped into one issue by the
/// backend. Producers construct the alert, then call [`Alert::clean`] followed
/// by [`Alert::validate`] before handing it to delivery or storage.
///
/// List entries are optional because producers may send `null` inside any
/// list: cleaning skips such entries and validation rejects them.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Alert {
    /// Creation time. Replaced with the current time when unset or older than 7 days.
    #[serde_as(as = "DefaultOnNull")]
    pub timestamp: DateTime<Utc>,

    /// Groups related alerts into one issue. Strongly recommended; with an
    /// explicit value both header and text can change without opening a new issue.
    #[serde_as(as = "DefaultOnNull")]
    pub correlation_id: String,

    /// Case-insensitive alert type such as `security`. Used as a routing hint.
    #[serde(rename = "type")]
    #[serde_as(as = "DefaultOnNull")]
    pub alert_type: String,

    /// Title of the alert. Header and text cannot both be empty.
    #[serde_as(as = "DefaultOnNull")]
    pub header: String,

    /// Title used while the issue is resolved. Falls back to `header` when empty.
    #[serde_as(as = "DefaultOnNull")]
    pub header_when_resolved: String,

    /// Body of the alert (markdown).
    #[serde_as(as = "DefaultOnNull")]
    pub text: String,

    /// Body used while the issue is resolved. Falls back to `text` when empty.
    #[serde_as(as = "DefaultOnNull")]
    pub text_when_resolved: String,

    /// Short plain-text summary shown in notifications.
    #[serde_as(as = "DefaultOnNull")]
    pub fallback_text: String,

    #[serde_as(as = "DefaultOnNull")]
    pub author: String,
    #[serde_as(as = "DefaultOnNull")]
    pub host: String,
    #[serde_as(as = "DefaultOnNull")]
    pub footer: String,

    /// Absolute URL with more information about the alert.
    #[serde_as(as = "DefaultOnNull")]
    pub link: String,

    /// Enables issue tracking; the issue auto-resolves after `auto_resolve_seconds`.
    #[serde_as(as = "DefaultOnNull")]
    pub issue_follow_up_enabled: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub auto_resolve_seconds: i64,
    /// Auto-resolve as inconclusive rather than resolved.
    #[serde_as(as = "DefaultOnNull")]
    pub auto_resolve_as_inconclusive: bool,

    /// One of [`AlertSeverity`]. Kept as the raw wire value; empty means `error`.
    #[serde_as(as = "DefaultOnNull")]
    pub severity: String,

    /// Channel ID or name. Takes precedence over `route_key`.
    #[serde_as(as = "DefaultOnNull")]
    pub slack_channel_id: String,

    /// Case-insensitive key resolved to a channel by the routing backend.
    #[serde_as(as = "DefaultOnNull")]
    pub route_key: String,

    /// Posting identity.
    #[serde_as(as = "DefaultOnNull")]
    pub username: String,
    #[serde_as(as = "DefaultOnNull")]
    pub icon_emoji: String,

    /// Compact two-column key/value pairs.
    pub fields: Option<Vec<Option<Field>>>,

    /// Seconds to wait before posting. No post is made if the issue resolves first.
    #[serde_as(as = "DefaultOnNull")]
    pub notification_delay_seconds: i64,

    /// Seconds to wait after resolution before the issue is archived and can no longer re-open.
    #[serde_as(as = "DefaultOnNull")]
    pub archiving_delay_seconds: i64,

    /// Escalation points, triggered in delay order while the issue is unresolved.
    pub escalation: Option<Vec<Option<Escalation>>>,

    /// The alert is ignored when the text contains any of these substrings.
    #[serde_as(as = "DefaultOnNull<Vec<DefaultOnNull>>")]
    pub ignore_if_text_contains: Vec<String>,

    /// Interactive buttons on the posted message.
    pub webhooks: Option<Vec<Option<Webhook>>>,

    /// Opaque data passed through to webhook payloads.
    #[serde_as(as = "DefaultOnNull")]
    pub metadata: BTreeMap<String, Value>,

    /// No longer in use. Accepted for compatibility with older producers.
    #[serde_as(as = "DefaultOnNull")]
    pub fail_on_rate_limit_error: bool,
}

/// Alert field, rendered side by side with other fields.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Field {
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub value: String,
}

/// Escalation point for an issue.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Escalation {
    /// New issue severity. Only panic, error and warning are allowed.
    #[serde_as(as = "DefaultOnNull")]
    pub severity: String,

    /// Seconds since the issue was created.
    #[serde_as(as = "DefaultOnNull")]
    pub delay_seconds: i64,

    #[serde_as(as = "DefaultOnNull<Vec<DefaultOnNull>>")]
    pub slack_mentions: Vec<String>,

    /// Channel the issue is moved to when the escalation triggers.
    #[serde_as(as = "DefaultOnNull")]
    pub move_to_channel: String,
}

impl Alert {
    /// Returns an alert with the current timestamp and the given severity.
    pub fn new(severity: AlertSeverity) -> Self {
        Self {
            timestamp: Utc::now(),
            severity: severity.as_code().to_string(),
            ..Default::default()
        }
    }

    pub fn panic() -> Self {
        Self::new(AlertSeverity::Panic)
    }

    pub fn error() -> Self {
        Self::new(AlertSeverity::Error)
    }

    pub fn warning() -> Self {
        Self::new(AlertSeverity::Warning)
    }

    pub fn resolved() -> Self {
        Self::new(AlertSeverity::Resolved)
    }

    pub fn info() -> Self {
        Self::new(AlertSeverity::Info)
    }

    /// Parsed severity, `None` when the raw value is not a known severity.
    pub fn severity(&self) -> Option<AlertSeverity> {
        AlertSeverity::from_code(&self.severity)
    }

    /// Deterministic storage key for this alert.
    ///
    /// Computed from channel, route key, correlation ID, timestamp, header and
    /// text. Call it after [`Alert::clean`] so that the same alert always
    /// yields the same key.
    pub fn unique_id(&self) -> String {
        hash(&[
            "alert",
            self.slack_channel_id.as_str(),
            self.route_key.as_str(),
            self.correlation_id.as_str(),
            format_rfc3339_nano(&self.timestamp).as_str(),
            self.header.as_str(),
            self.text.as_str(),
        ])
    }
}

impl Escalation {
    pub fn severity(&self) -> Option<AlertSeverity> {
        AlertSeverity::from_code(&self.severity)
    }
}

/// RFC 3339 in UTC with up to nine fractional digits and trailing zeros removed.
pub fn format_rfc3339_nano(ts: &DateTime<Utc>) -> String {
    let seconds = ts.format("%Y-%m-%dT%H:%M:%S");
    let nanos = ts.timestamp_subsec_nanos();

    if nanos == 0 {
        return format!("{seconds}Z");
    }

    let fraction = format!("{nanos:09}");
    format!("{seconds}.{}Z", fraction.trim_end_matches('0'))
}
