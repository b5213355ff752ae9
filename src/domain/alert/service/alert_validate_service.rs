use url::Url;

use crate::core::model::alert::alert::Alert;
use crate::core::model::alert::alert_limits::*;
use crate::core::model::alert::alert_severity::{severity_is_valid, valid_severities};
use crate::errors::AlertValidationError;

type Check = fn(&Alert) -> Result<(), AlertValidationError>;

/// Checks run by [`Alert::validate`], in order. The first failure is reported.
const CHECKS: [Check; 11] = [
    Alert::validate_slack_channel_id_and_route_key,
    Alert::validate_header_and_text,
    Alert::validate_icon,
    Alert::validate_link,
    Alert::validate_severity,
    Alert::validate_correlation_id,
    Alert::validate_auto_resolve,
    Alert::validate_fields,
    Alert::validate_webhooks,
    Alert::validate_escalation,
    Alert::validate_ignore_if_text_contains,
];

/// Validates an alert that may be absent.
pub fn validate_alert(alert: Option<&Alert>) -> Result<(), AlertValidationError> {
    alert
        .ok_or_else(|| AlertValidationError::nil("alert"))?
        .validate()
}

impl Alert {
    /// Returns the first rule this alert violates. Never mutates the alert.
    ///
    /// Validation does not assume [`Alert::clean`] has run, but an uncleaned
    /// alert may fail rules that cleaning would have fixed.
    pub fn validate(&self) -> Result<(), AlertValidationError> {
        CHECKS.iter().try_for_each(|check| check(self))
    }

    /// A set channel ID must be a valid channel ID or name, and then the route
    /// key is not checked. Both may be empty when the router has a fallback.
    pub fn validate_slack_channel_id_and_route_key(&self) -> Result<(), AlertValidationError> {
        if !self.slack_channel_id.is_empty() {
            if !SLACK_CHANNEL_ID_OR_NAME_REGEX.is_match(&self.slack_channel_id) {
                return Err(AlertValidationError::invalid(format!(
                    "slackChannelId '{}' is not valid",
                    self.slack_channel_id
                )));
            }

            return Ok(());
        }

        if self.route_key.len() > MAX_ROUTE_KEY_LENGTH {
            return Err(AlertValidationError::invalid(format!(
                "routeKey is too long, expected length <={}",
                MAX_ROUTE_KEY_LENGTH
            )));
        }

        Ok(())
    }

    pub fn validate_header_and_text(&self) -> Result<(), AlertValidationError> {
        if self.header.is_empty() && self.text.is_empty() {
            return Err(AlertValidationError::invalid(
                "header and text cannot both be empty",
            ));
        }

        Ok(())
    }

    pub fn validate_icon(&self) -> Result<(), AlertValidationError> {
        if self.icon_emoji.is_empty() || ICON_REGEX.is_match(&self.icon_emoji) {
            return Ok(());
        }

        Err(AlertValidationError::invalid(format!(
            "iconEmoji '{}' is not valid",
            self.icon_emoji
        )))
    }

    /// A set link must be an absolute URL with a scheme.
    pub fn validate_link(&self) -> Result<(), AlertValidationError> {
        if self.link.is_empty() {
            return Ok(());
        }

        match Url::parse(&self.link) {
            Ok(url) if !url.scheme().is_empty() => Ok(()),
            _ => Err(AlertValidationError::invalid(
                "link is not a valid absolute URL",
            )),
        }
    }

    pub fn validate_severity(&self) -> Result<(), AlertValidationError> {
        if severity_is_valid(&self.severity) {
            return Ok(());
        }

        Err(AlertValidationError::invalid(format!(
            "severity '{}' is not valid, expected one of [{}]",
            self.severity,
            valid_severities().join(", ")
        )))
    }

    pub fn validate_correlation_id(&self) -> Result<(), AlertValidationError> {
        if self.correlation_id.len() > MAX_CORRELATION_ID_LENGTH {
            return Err(AlertValidationError::invalid(format!(
                "correlationId is too long, expected length <={}",
                MAX_CORRELATION_ID_LENGTH
            )));
        }

        Ok(())
    }

    /// Only enforced when issue follow-up is enabled.
    pub fn validate_auto_resolve(&self) -> Result<(), AlertValidationError> {
        if !self.issue_follow_up_enabled {
            return Ok(());
        }

        if self.auto_resolve_seconds < MIN_AUTO_RESOLVE_SECONDS {
            return Err(AlertValidationError::invalid(format!(
                "autoResolveSeconds {} is too low, expected value >={}",
                self.auto_resolve_seconds, MIN_AUTO_RESOLVE_SECONDS
            )));
        }

        if self.auto_resolve_seconds > MAX_AUTO_RESOLVE_SECONDS {
            return Err(AlertValidationError::invalid(format!(
                "autoResolveSeconds {} is too high, expected value <={}",
                self.auto_resolve_seconds, MAX_AUTO_RESOLVE_SECONDS
            )));
        }

        Ok(())
    }

    pub fn validate_fields(&self) -> Result<(), AlertValidationError> {
        let count = self.fields.as_ref().map_or(0, Vec::len);

        if count > MAX_FIELD_COUNT {
            return Err(AlertValidationError::invalid(format!(
                "too many fields, expected <={}",
                MAX_FIELD_COUNT
            )));
        }

        Ok(())
    }

    pub fn validate_ignore_if_text_contains(&self) -> Result<(), AlertValidationError> {
        if self.ignore_if_text_contains.len() > MAX_IGNORE_IF_TEXT_CONTAINS_COUNT {
            return Err(AlertValidationError::invalid(format!(
                "too many ignoreIfTextContains items, expected <={}",
                MAX_IGNORE_IF_TEXT_CONTAINS_COUNT
            )));
        }

        for (index, s) in self.ignore_if_text_contains.iter().enumerate() {
            if s.len() > MAX_IGNORE_IF_TEXT_CONTAINS_LENGTH {
                return Err(AlertValidationError::invalid(format!(
                    "ignoreIfTextContains[{}] is too long, expected length <={}",
                    index, MAX_IGNORE_IF_TEXT_CONTAINS_LENGTH
                )));
            }
        }

        Ok(())
    }
}
