use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::model::alert::alert::{Alert, Escalation, Field};
use crate::core::model::alert::alert_limits::*;
use crate::core::model::alert::alert_severity::AlertSeverity;
use crate::core::model::webhook::webhook::Webhook;
use crate::core::util::text_util::TextUtil;

/// Severity still sent by older producers, treated as `error`.
const LEGACY_CRITICAL_SEVERITY: &str = "critical";

/// Button style some producers send for the default style.
const DEFAULT_BUTTON_STYLE: &str = "default";

impl Alert {
    /// Normalizes all fields in place: trims whitespace, folds case, truncates
    /// display fields, applies defaults and sorts escalation points.
    ///
    /// Idempotent apart from the timestamp staleness check. Call before
    /// [`Alert::validate`].
    pub fn clean(&mut self) {
        self.clean_at(Utc::now());
    }

    /// [`Alert::clean`] with an explicit current time.
    pub fn clean_at(&mut self, now: DateTime<Utc>) {
        if now.signed_duration_since(self.timestamp) > max_timestamp_age() {
            debug!(timestamp = %self.timestamp, "replacing stale alert timestamp");
            self.timestamp = now;
        }

        self.alert_type = TextUtil::trim_lower(&self.alert_type);
        self.slack_channel_id = TextUtil::trim_upper(&self.slack_channel_id);
        self.route_key = TextUtil::trim_lower(&self.route_key);
        self.header = TextUtil::single_line(&self.header);
        self.header_when_resolved = TextUtil::single_line(&self.header_when_resolved);
        self.text = self.text.trim().to_string();
        self.text_when_resolved = self.text_when_resolved.trim().to_string();
        self.fallback_text = TextUtil::plain_summary(&self.fallback_text);
        self.correlation_id = self.correlation_id.trim().to_string();
        self.username = self.username.trim().to_string();
        self.author = self.author.trim().to_string();
        self.host = self.host.trim().to_string();
        self.link = self.link.trim().to_string();
        self.footer = self.footer.trim().to_string();
        self.icon_emoji = TextUtil::trim_lower(&self.icon_emoji);
        self.severity = TextUtil::trim_lower(&self.severity);

        self.fallback_text = TextUtil::shorten(&self.fallback_text, MAX_FALLBACK_TEXT_LENGTH);

        if self.severity.is_empty() || self.severity == LEGACY_CRITICAL_SEVERITY {
            self.severity = AlertSeverity::Error.as_code().to_string();
        }

        self.archiving_delay_seconds = self.archiving_delay_seconds.max(0);
        self.notification_delay_seconds = self.notification_delay_seconds.max(0);

        self.header = TextUtil::shorten(&self.header, MAX_HEADER_LENGTH);
        self.header_when_resolved = TextUtil::shorten(&self.header_when_resolved, MAX_HEADER_LENGTH);
        self.text = TextUtil::shorten_markdown(&self.text, MAX_TEXT_LENGTH);
        self.text_when_resolved = TextUtil::shorten_markdown(&self.text_when_resolved, MAX_TEXT_LENGTH);
        self.author = TextUtil::shorten(&self.author, MAX_AUTHOR_LENGTH);
        self.host = TextUtil::shorten(&self.host, MAX_HOST_LENGTH);
        self.username = TextUtil::shorten(&self.username, MAX_USERNAME_LENGTH);
        self.footer = TextUtil::shorten(&self.footer, MAX_FOOTER_LENGTH);

        for field in self.fields.iter_mut().flatten().flatten() {
            field.clean();
        }

        for hook in self.webhooks.iter_mut().flatten().flatten() {
            hook.clean();
        }

        if let Some(escalation) = self.escalation.as_mut().filter(|e| !e.is_empty()) {
            // Absent entries sort first.
            escalation.sort_by_key(|e| e.as_ref().map(|e| e.delay_seconds));

            for point in escalation.iter_mut().flatten() {
                point.clean();
            }
        }
    }
}

impl Field {
    fn clean(&mut self) {
        self.title = TextUtil::shorten(self.title.trim(), MAX_FIELD_TITLE_LENGTH);
        self.value = TextUtil::shorten(self.value.trim(), MAX_FIELD_VALUE_LENGTH);
    }
}

impl Webhook {
    fn clean(&mut self) {
        self.id = self.id.trim().to_string();
        self.button_text = self.button_text.trim().to_string();
        self.url = self.url.trim().to_string();
        self.confirmation_text = self.confirmation_text.trim().to_string();

        if self.button_style == DEFAULT_BUTTON_STYLE {
            self.button_style.clear();
        }

        for input in self.plain_text_input.iter_mut().flatten().flatten() {
            input.id = input.id.trim().to_string();
            input.description = input.description.trim().to_string();
            input.initial_value = input.initial_value.trim().to_string();
        }

        for input in self.checkbox_input.iter_mut().flatten().flatten() {
            input.id = input.id.trim().to_string();
            input.label = input.label.trim().to_string();
        }
    }
}

impl Escalation {
    fn clean(&mut self) {
        self.severity = TextUtil::trim_lower(&self.severity);
        self.move_to_channel = TextUtil::trim_upper(&self.move_to_channel);

        for mention in self.slack_mentions.iter_mut() {
            *mention = mention.trim().to_string();
        }
    }
}
