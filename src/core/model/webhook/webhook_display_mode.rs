use serde::{Deserialize, Serialize};

/// When a webhook button is shown. Empty on the wire means always.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WebhookDisplayMode {
    Always,
    OpenIssue,
    ResolvedIssue,
}

impl WebhookDisplayMode {
    pub const ALL: [WebhookDisplayMode; 3] = [Self::Always, Self::OpenIssue, Self::ResolvedIssue];

    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref() {
            "always" => Some(Self::Always),
            "open_issue" => Some(Self::OpenIssue),
            "resolved_issue" => Some(Self::ResolvedIssue),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::OpenIssue => "open_issue",
            Self::ResolvedIssue => "resolved_issue",
        }
    }

    /// Whether a button with this mode is shown for an issue in the given state.
    pub fn visible_for(&self, issue_resolved: bool) -> bool {
        match self {
            Self::Always => true,
            Self::OpenIssue => !issue_resolved,
            Self::ResolvedIssue => issue_resolved,
        }
    }
}

pub fn webhook_display_mode_is_valid(code: &str) -> bool {
    WebhookDisplayMode::from_code(code).is_some()
}

pub fn valid_webhook_display_modes() -> Vec<&'static str> {
    WebhookDisplayMode::ALL.iter().map(WebhookDisplayMode::as_code).collect()
}
