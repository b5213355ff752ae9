use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};

use super::webhook_access_level::WebhookAccessLevel;
use super::webhook_button_style::WebhookButtonStyle;
use super::webhook_display_mode::WebhookDisplayMode;

/// Interactive button on a posted alert.
///
/// A click either POSTs to `url` (http and https targets) or invokes a custom
/// handler registered in the backend, in which case `url` is an opaque
/// printable-ASCII identifier.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Webhook {
    /// Unique among the webhooks of one alert.
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,

    /// HTTP target or custom handler identifier.
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,

    /// Shown in a confirmation dialog before the webhook fires. Empty means no dialog.
    #[serde_as(as = "DefaultOnNull")]
    pub confirmation_text: String,

    #[serde_as(as = "DefaultOnNull")]
    pub button_text: String,

    /// One of [`WebhookButtonStyle`], empty for the default style.
    #[serde_as(as = "DefaultOnNull")]
    pub button_style: String,

    /// One of [`WebhookAccessLevel`], empty for channel members.
    #[serde_as(as = "DefaultOnNull")]
    pub access_level: String,

    /// One of [`WebhookDisplayMode`], empty for always.
    #[serde_as(as = "DefaultOnNull")]
    pub display_mode: String,

    /// Sent with the callback, merged with alert metadata and input values.
    #[serde_as(as = "DefaultOnNull")]
    pub payload: BTreeMap<String, Value>,

    pub plain_text_input: Option<Vec<Option<WebhookPlainTextInput>>>,

    pub checkbox_input: Option<Vec<Option<WebhookCheckboxInput>>>,
}

/// Text field in the webhook modal. The entered value is sent keyed by `id`.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookPlainTextInput {
    /// Unique among all inputs (text and checkbox) of the same webhook.
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,

    /// Placeholder shown before the user types.
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,

    #[serde_as(as = "DefaultOnNull")]
    pub min_length: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub max_length: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub multiline: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub initial_value: String,
}

/// Checkbox group in the webhook modal. Selected values are sent keyed by `id`.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookCheckboxInput {
    /// Unique among all inputs (text and checkbox) of the same webhook.
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub label: String,
    pub options: Option<Vec<Option<WebhookCheckboxOption>>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WebhookCheckboxOption {
    /// Unique within the checkbox group.
    #[serde_as(as = "DefaultOnNull")]
    pub value: String,
    #[serde_as(as = "DefaultOnNull")]
    pub text: String,
    #[serde_as(as = "DefaultOnNull")]
    pub selected: bool,
}

impl Webhook {
    pub fn button_style(&self) -> Option<WebhookButtonStyle> {
        WebhookButtonStyle::from_code(&self.button_style)
    }

    pub fn access_level(&self) -> Option<WebhookAccessLevel> {
        WebhookAccessLevel::from_code(&self.access_level)
    }

    pub fn display_mode(&self) -> Option<WebhookDisplayMode> {
        WebhookDisplayMode::from_code(&self.display_mode)
    }
}
