use serde::{Deserialize, Serialize};

/// Visual style of a webhook button. An empty style on the wire means the
/// default chat button style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WebhookButtonStyle {
    Primary,
    Danger,
}

impl WebhookButtonStyle {
    pub const ALL: [WebhookButtonStyle; 2] = [Self::Primary, Self::Danger];

    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref() {
            "primary" => Some(Self::Primary),
            "danger" => Some(Self::Danger),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Danger => "danger",
        }
    }
}

pub fn webhook_button_style_is_valid(code: &str) -> bool {
    WebhookButtonStyle::from_code(code).is_some()
}

pub fn valid_webhook_button_styles() -> Vec<&'static str> {
    WebhookButtonStyle::ALL.iter().map(WebhookButtonStyle::as_code).collect()
}
