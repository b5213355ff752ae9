use crate::core::model::alert::alert::{Alert, Escalation};
use crate::core::model::alert::alert_limits::*;
use crate::errors::AlertValidationError;

impl Alert {
    /// Escalation points must be spaced by at least
    /// [`MIN_ESCALATION_DELAY_DIFF_SECONDS`] in list order, so this relies on
    /// [`Alert::clean`] having sorted them by delay.
    pub fn validate_escalation(&self) -> Result<(), AlertValidationError> {
        let Some(escalation) = &self.escalation else {
            return Ok(());
        };

        if escalation.len() > MAX_ESCALATION_COUNT {
            return Err(AlertValidationError::invalid(format!(
                "too many escalation points, expected <={}",
                MAX_ESCALATION_COUNT
            )));
        }

        let mut previous_delay = 0;

        for (index, e) in escalation.iter().enumerate() {
            let e = e
                .as_ref()
                .ok_or_else(|| AlertValidationError::nil(format!("escalation[{}]", index)))?;

            e.validate(index, previous_delay)?;
            previous_delay = e.delay_seconds;
        }

        Ok(())
    }
}

impl Escalation {
    fn validate(&self, index: usize, previous_delay: i64) -> Result<(), AlertValidationError> {
        if self.delay_seconds < MIN_ESCALATION_DELAY_SECONDS {
            return Err(AlertValidationError::invalid(format!(
                "escalation[{}].delaySeconds '{}' is too low, expected value >={}",
                index, self.delay_seconds, MIN_ESCALATION_DELAY_SECONDS
            )));
        }

        if previous_delay > 0
            && self.delay_seconds - previous_delay < MIN_ESCALATION_DELAY_DIFF_SECONDS
        {
            return Err(AlertValidationError::invalid(format!(
                "escalation[{}].delaySeconds '{}' is too small compared to previous escalation, expected diff >={}",
                index, self.delay_seconds, MIN_ESCALATION_DELAY_DIFF_SECONDS
            )));
        }

        if !self.severity().is_some_and(|s| s.is_escalation_target()) {
            return Err(AlertValidationError::invalid(format!(
                "escalation[{}].severity '{}' is not valid, expected one of [panic, error, warning]",
                index, self.severity
            )));
        }

        if self.slack_mentions.len() > MAX_ESCALATION_SLACK_MENTION_COUNT {
            return Err(AlertValidationError::invalid(format!(
                "escalation[{}].slackMentions item count is too large, expected <={}",
                index, MAX_ESCALATION_SLACK_MENTION_COUNT
            )));
        }

        if let Some(j) = self
            .slack_mentions
            .iter()
            .position(|m| !SLACK_MENTION_REGEX.is_match(m))
        {
            return Err(AlertValidationError::invalid(format!(
                "escalation[{}].slackMentions[{}] is not valid",
                index, j
            )));
        }

        if !self.move_to_channel.is_empty()
            && !SLACK_CHANNEL_ID_OR_NAME_REGEX.is_match(&self.move_to_channel)
        {
            return Err(AlertValidationError::invalid(format!(
                "escalation[{}].moveToChannel is not valid",
                index
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn point(severity: &str, delay_seconds: i64) -> Escalation {
        Escalation {
            severity: severity.into(),
            delay_seconds,
            ..Default::default()
        }
    }

    fn alert_with(escalation: Vec<Option<Escalation>>) -> Alert {
        Alert {
            header: "foo".into(),
            severity: "warning".into(),
            escalation: Some(escalation),
            ..Default::default()
        }
    }

    fn message(escalation: Vec<Option<Escalation>>) -> String {
        alert_with(escalation)
            .validate_escalation()
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn absent_or_empty_list_passes() {
        let a = Alert {
            escalation: None,
            ..alert_with(vec![])
        };
        assert!(a.validate_escalation().is_ok());
        assert!(alert_with(vec![]).validate_escalation().is_ok());
    }

    #[test]
    fn spaced_points_pass() {
        let a = alert_with(vec![
            Some(point("warning", 30)),
            Some(point("error", 60)),
            Some(Escalation {
                slack_mentions: vec!["<!here>".into(), "<@U12345678>".into()],
                move_to_channel: "incidents".into(),
                ..point("panic", 90)
            }),
        ]);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn too_many_points() {
        assert_eq!(
            message(vec![Some(point("error", 30)); MAX_ESCALATION_COUNT + 1]),
            "too many escalation points, expected <=3"
        );
    }

    #[test]
    fn nil_point_is_rejected() {
        let err = alert_with(vec![Some(point("error", 30)), None])
            .validate_escalation()
            .unwrap_err();
        assert_eq!(err, AlertValidationError::nil("escalation[1]"));
        assert_eq!(err.to_string(), "escalation[1] is nil");
    }

    #[test]
    fn delay_lower_bound() {
        assert_eq!(
            message(vec![Some(point("error", 29))]),
            "escalation[0].delaySeconds '29' is too low, expected value >=30"
        );
    }

    #[test]
    fn delays_must_be_spaced() {
        assert_eq!(
            message(vec![Some(point("warning", 30)), Some(point("error", 59))]),
            "escalation[1].delaySeconds '59' is too small compared to previous escalation, expected diff >=30"
        );

        // Unsorted input is reported, not reordered.
        assert_eq!(
            message(vec![Some(point("warning", 120)), Some(point("error", 60))]),
            "escalation[1].delaySeconds '60' is too small compared to previous escalation, expected diff >=30"
        );
    }

    #[test]
    fn severity_must_be_active() {
        for severity in ["resolved", "info", "critical", ""] {
            assert_eq!(
                message(vec![Some(point(severity, 30))]),
                format!(
                    "escalation[0].severity '{}' is not valid, expected one of [panic, error, warning]",
                    severity
                )
            );
        }
    }

    #[test]
    fn mentions_are_bounded_and_matched() {
        let many = Escalation {
            slack_mentions: vec!["<!here>".into(); MAX_ESCALATION_SLACK_MENTION_COUNT + 1],
            ..point("error", 30)
        };
        assert_eq!(
            message(vec![Some(many)]),
            "escalation[0].slackMentions item count is too large, expected <=10"
        );

        let bad = Escalation {
            slack_mentions: vec!["<!channel>".into(), "@here".into()],
            ..point("error", 30)
        };
        assert_eq!(
            message(vec![Some(bad)]),
            "escalation[0].slackMentions[1] is not valid"
        );
    }

    #[test]
    fn move_to_channel_must_match() {
        let e = Escalation {
            move_to_channel: "not a channel".into(),
            ..point("error", 30)
        };
        assert_eq!(
            message(vec![Some(e)]),
            "escalation[0].moveToChannel is not valid"
        );
    }

    #[test]
    fn cleaned_alert_sorts_before_spacing_check() {
        let mut a = alert_with(vec![Some(point("error", 90)), Some(point("warning", 30))]);
        assert!(a.validate_escalation().is_err());
        a.clean();
        assert!(a.validate_escalation().is_ok());
    }
}
