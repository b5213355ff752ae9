use serde::{Deserialize, Serialize};

/// Who may invoke a webhook button. Empty on the wire means anyone in the channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WebhookAccessLevel {
    /// Global admins only.
    GlobalAdmins,
    /// Channel admins and global admins.
    ChannelAdmins,
    /// Every member of the channel.
    ChannelMembers,
}

impl WebhookAccessLevel {
    pub const ALL: [WebhookAccessLevel; 3] = [
        Self::GlobalAdmins,
        Self::ChannelAdmins,
        Self::ChannelMembers,
    ];

    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref() {
            "global_admins" => Some(Self::GlobalAdmins),
            "channel_admins" => Some(Self::ChannelAdmins),
            "channel_members" => Some(Self::ChannelMembers),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::GlobalAdmins => "global_admins",
            Self::ChannelAdmins => "channel_admins",
            Self::ChannelMembers => "channel_members",
        }
    }
}

pub fn webhook_access_level_is_valid(code: &str) -> bool {
    WebhookAccessLevel::from_code(code).is_some()
}

pub fn valid_webhook_access_levels() -> Vec<&'static str> {
    WebhookAccessLevel::ALL.iter().map(WebhookAccessLevel::as_code).collect()
}
