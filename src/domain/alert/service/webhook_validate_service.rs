use std::collections::HashSet;

use url::Url;

use crate::core::model::alert::alert::Alert;
use crate::core::model::alert::alert_limits::*;
use crate::core::model::webhook::webhook::{
    Webhook, WebhookCheckboxInput, WebhookCheckboxOption, WebhookPlainTextInput,
};
use crate::core::model::webhook::webhook_access_level::{
    valid_webhook_access_levels, webhook_access_level_is_valid,
};
use crate::core::model::webhook::webhook_button_style::{
    valid_webhook_button_styles, webhook_button_style_is_valid,
};
use crate::core::model::webhook::webhook_display_mode::{
    valid_webhook_display_modes, webhook_display_mode_is_valid,
};
use crate::core::util::text_util::TextUtil;
use crate::errors::AlertValidationError;

type ValidationResult = Result<(), AlertValidationError>;

impl Alert {
    /// Checks every webhook and its modal inputs.
    ///
    /// Webhook IDs are unique within the alert. Within one webhook, plain text
    /// and checkbox inputs share a single ID namespace, and checkbox option
    /// values are unique within their group.
    pub fn validate_webhooks(&self) -> ValidationResult {
        let Some(webhooks) = &self.webhooks else {
            return Ok(());
        };

        if webhooks.len() > MAX_WEBHOOK_COUNT {
            return Err(AlertValidationError::invalid(format!(
                "too many webhooks, expected <={}",
                MAX_WEBHOOK_COUNT
            )));
        }

        let mut webhook_ids = HashSet::new();

        for (index, hook) in webhooks.iter().enumerate() {
            let path = format!("webhook[{}]", index);
            let hook = hook
                .as_ref()
                .ok_or_else(|| AlertValidationError::nil(path.as_str()))?;

            validate_webhook(&path, hook, &mut webhook_ids)?;
        }

        Ok(())
    }
}

fn invalid(path: &str, message: String) -> AlertValidationError {
    AlertValidationError::invalid(format!("{}{}", path, message))
}

fn validate_webhook<'a>(
    path: &str,
    hook: &'a Webhook,
    webhook_ids: &mut HashSet<&'a str>,
) -> ValidationResult {
    if hook.id.is_empty() {
        return Err(invalid(path, ".id is required".into()));
    }

    if hook.id.len() > MAX_WEBHOOK_ID_LENGTH {
        return Err(invalid(
            path,
            format!(".id is too long, expected length <={}", MAX_WEBHOOK_ID_LENGTH),
        ));
    }

    if !webhook_ids.insert(hook.id.as_str()) {
        return Err(invalid(path, ".id must be unique".into()));
    }

    validate_url(path, &hook.url)?;

    if hook.button_text.is_empty() {
        return Err(invalid(path, ".buttonText is required".into()));
    }

    if hook.button_text.len() > MAX_WEBHOOK_BUTTON_TEXT_LENGTH {
        return Err(invalid(
            path,
            format!(
                ".buttonText is too long, expected length <={}",
                MAX_WEBHOOK_BUTTON_TEXT_LENGTH
            ),
        ));
    }

    if hook.confirmation_text.len() > MAX_WEBHOOK_CONFIRMATION_TEXT_LENGTH {
        return Err(invalid(
            path,
            format!(
                ".confirmationText is too long, expected length <={}",
                MAX_WEBHOOK_CONFIRMATION_TEXT_LENGTH
            ),
        ));
    }

    let enums: [(&str, &str, fn(&str) -> bool, fn() -> Vec<&'static str>); 3] = [
        (
            "buttonStyle",
            hook.button_style.as_str(),
            webhook_button_style_is_valid,
            valid_webhook_button_styles,
        ),
        (
            "accessLevel",
            hook.access_level.as_str(),
            webhook_access_level_is_valid,
            valid_webhook_access_levels,
        ),
        (
            "displayMode",
            hook.display_mode.as_str(),
            webhook_display_mode_is_valid,
            valid_webhook_display_modes,
        ),
    ];

    for (name, value, is_valid, valid_values) in enums {
        if !value.is_empty() && !is_valid(value) {
            return Err(invalid(
                path,
                format!(
                    ".{} '{}' is not valid, expected empty or one of [{}]",
                    name,
                    value,
                    valid_values().join(", ")
                ),
            ));
        }
    }

    if hook.payload.len() > MAX_WEBHOOK_PAYLOAD_COUNT {
        return Err(invalid(
            path,
            format!(
                ".payload item count is too large, expected <={}",
                MAX_WEBHOOK_PAYLOAD_COUNT
            ),
        ));
    }

    let plain_text_inputs = hook.plain_text_input.as_deref().unwrap_or_default();
    let checkbox_inputs = hook.checkbox_input.as_deref().unwrap_or_default();

    if plain_text_inputs.len() > MAX_WEBHOOK_PLAIN_TEXT_INPUT_COUNT {
        return Err(invalid(
            path,
            format!(
                ".plainTextInput item count is too large, expected <={}",
                MAX_WEBHOOK_PLAIN_TEXT_INPUT_COUNT
            ),
        ));
    }

    if checkbox_inputs.len() > MAX_WEBHOOK_CHECKBOX_INPUT_COUNT {
        return Err(invalid(
            path,
            format!(
                ".checkboxInput item count is too large, expected <={}",
                MAX_WEBHOOK_CHECKBOX_INPUT_COUNT
            ),
        ));
    }

    let mut input_ids = HashSet::new();

    for (index, input) in plain_text_inputs.iter().enumerate() {
        let path = format!("{}.plainTextInput[{}]", path, index);
        let input = input
            .as_ref()
            .ok_or_else(|| AlertValidationError::nil(path.as_str()))?;

        validate_plain_text_input(&path, input, &mut input_ids)?;
    }

    for (index, input) in checkbox_inputs.iter().enumerate() {
        let path = format!("{}.checkboxInput[{}]", path, index);
        let input = input
            .as_ref()
            .ok_or_else(|| AlertValidationError::nil(path.as_str()))?;

        validate_checkbox_input(&path, input, &mut input_ids)?;
    }

    Ok(())
}

/// HTTP targets must be absolute URLs with an explicit `//host` authority.
/// Anything else is an opaque handler token restricted to printable ASCII.
fn validate_url(path: &str, url: &str) -> ValidationResult {
    if url.is_empty() {
        return Err(invalid(path, ".url is required".into()));
    }

    if url.len() > MAX_WEBHOOK_URL_LENGTH {
        return Err(invalid(
            path,
            format!(".url is too long, expected length <={}", MAX_WEBHOOK_URL_LENGTH),
        ));
    }

    if TextUtil::starts_with_ignore_ascii_case(url, "http") {
        let has_host = has_authority(url)
            && Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(|h| !h.is_empty()))
                .unwrap_or(false);

        if !has_host {
            return Err(invalid(path, ".url is not a valid absolute URL".into()));
        }
    } else if !TextUtil::is_printable_ascii(url) {
        return Err(invalid(
            path,
            ".url contains invalid characters, expected printable ASCII".into(),
        ));
    }

    Ok(())
}

/// The url parser invents a host for `http:foo` and `http:/foo`, and skips
/// extra slashes in `http:///foo`. Only a literal `scheme://host` counts.
fn has_authority(url: &str) -> bool {
    url.split_once(':')
        .and_then(|(_, rest)| rest.strip_prefix("//"))
        .is_some_and(|host| !host.is_empty() && !host.starts_with(|c: char| c == '/' || c == '\\'))
}

/// Validates the input ID: required, unique among all inputs of the webhook,
/// and bounded in length.
fn validate_input_id<'a>(
    path: &str,
    id: &'a str,
    input_ids: &mut HashSet<&'a str>,
) -> ValidationResult {
    if id.is_empty() {
        return Err(invalid(path, ".id is required".into()));
    }

    if !input_ids.insert(id) {
        return Err(invalid(path, ".id must be unique among all inputs".into()));
    }

    if id.len() > MAX_WEBHOOK_INPUT_ID_LENGTH {
        return Err(invalid(
            path,
            format!(".id is too long, expected <={}", MAX_WEBHOOK_INPUT_ID_LENGTH),
        ));
    }

    Ok(())
}

fn validate_plain_text_input<'a>(
    path: &str,
    input: &'a WebhookPlainTextInput,
    input_ids: &mut HashSet<&'a str>,
) -> ValidationResult {
    validate_input_id(path, &input.id, input_ids)?;

    if input.description.len() > MAX_WEBHOOK_INPUT_DESCRIPTION_LENGTH {
        return Err(invalid(
            path,
            format!(
                ".description is too long, expected <={}",
                MAX_WEBHOOK_INPUT_DESCRIPTION_LENGTH
            ),
        ));
    }

    for (name, value) in [("minLength", input.min_length), ("maxLength", input.max_length)] {
        if value < 0 {
            return Err(invalid(path, format!(".{} must be >=0", name)));
        }

        if value > MAX_WEBHOOK_INPUT_TEXT_LENGTH {
            return Err(invalid(
                path,
                format!(".{} must be <={}", name, MAX_WEBHOOK_INPUT_TEXT_LENGTH),
            ));
        }
    }

    if input.max_length < input.min_length {
        return Err(invalid(
            path,
            ".maxLength cannot be smaller than minLength".into(),
        ));
    }

    let initial_length = input.initial_value.len() as i64;

    if initial_length > input.max_length {
        return Err(invalid(
            path,
            ".initialValue cannot be longer than maxLength".into(),
        ));
    }

    if initial_length < input.min_length {
        return Err(invalid(
            path,
            ".initialValue cannot be shorter than minLength".into(),
        ));
    }

    Ok(())
}

fn validate_checkbox_input<'a>(
    path: &str,
    input: &'a WebhookCheckboxInput,
    input_ids: &mut HashSet<&'a str>,
) -> ValidationResult {
    validate_input_id(path, &input.id, input_ids)?;

    if input.label.len() > MAX_WEBHOOK_INPUT_LABEL_LENGTH {
        return Err(invalid(
            path,
            format!(".label is too long, expected <={}", MAX_WEBHOOK_INPUT_LABEL_LENGTH),
        ));
    }

    let options = input.options.as_deref().unwrap_or_default();

    if options.len() > MAX_WEBHOOK_CHECKBOX_OPTION_COUNT {
        return Err(invalid(
            path,
            format!(
                ".options item count is too large, expected <={}",
                MAX_WEBHOOK_CHECKBOX_OPTION_COUNT
            ),
        ));
    }

    let mut values = HashSet::new();

    for (index, option) in options.iter().enumerate() {
        let path = format!("{}.options[{}]", path, index);
        let option = option
            .as_ref()
            .ok_or_else(|| AlertValidationError::nil(path.as_str()))?;

        validate_checkbox_option(&path, option, &mut values)?;
    }

    Ok(())
}

fn validate_checkbox_option<'a>(
    path: &str,
    option: &'a WebhookCheckboxOption,
    values: &mut HashSet<&'a str>,
) -> ValidationResult {
    if option.value.is_empty() {
        return Err(invalid(path, ".value is required".into()));
    }

    if option.value.len() > MAX_CHECKBOX_OPTION_VALUE_LENGTH {
        return Err(invalid(
            path,
            format!(
                ".value is too long, expected <={}",
                MAX_CHECKBOX_OPTION_VALUE_LENGTH
            ),
        ));
    }

    if !values.insert(option.value.as_str()) {
        return Err(invalid(path, ".value must be unique".into()));
    }

    if option.text.len() > MAX_WEBHOOK_CHECKBOX_OPTION_TEXT_LENGTH {
        return Err(invalid(
            path,
            format!(
                ".text is too long, expected <={}",
                MAX_WEBHOOK_CHECKBOX_OPTION_TEXT_LENGTH
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hook(id: &str) -> Webhook {
        Webhook {
            id: id.into(),
            url: "https://example.com/hook".into(),
            button_text: "Press".into(),
            ..Default::default()
        }
    }

    fn text_input(id: &str) -> WebhookPlainTextInput {
        WebhookPlainTextInput {
            id: id.into(),
            max_length: 100,
            ..Default::default()
        }
    }

    fn checkbox_input(id: &str, values: &[&str]) -> WebhookCheckboxInput {
        WebhookCheckboxInput {
            id: id.into(),
            options: Some(
                values
                    .iter()
                    .map(|v| {
                        Some(WebhookCheckboxOption {
                            value: (*v).into(),
                            ..Default::default()
                        })
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    fn alert_with(hooks: Vec<Option<Webhook>>) -> Alert {
        Alert {
            header: "foo".into(),
            severity: "error".into(),
            webhooks: Some(hooks),
            ..Default::default()
        }
    }

    fn message(hooks: Vec<Option<Webhook>>) -> String {
        alert_with(hooks).validate_webhooks().unwrap_err().to_string()
    }

    #[test]
    fn absent_list_is_skipped() {
        let a = Alert {
            webhooks: None,
            ..alert_with(vec![])
        };
        assert!(a.validate_webhooks().is_ok());
        assert!(alert_with(vec![]).validate_webhooks().is_ok());
    }

    #[test]
    fn valid_webhooks_pass() {
        let mut h = hook("a");
        h.button_style = "danger".into();
        h.access_level = "channel_admins".into();
        h.display_mode = "open_issue".into();
        h.plain_text_input = Some(vec![Some(text_input("reason"))]);
        h.checkbox_input = Some(vec![Some(checkbox_input("flags", &["x", "y"]))]);

        let mut token = hook("b");
        token.url = "restart-handler".into();

        assert!(alert_with(vec![Some(h), Some(token)]).validate().is_ok());
    }

    #[test]
    fn too_many_webhooks() {
        let hooks = (0..=MAX_WEBHOOK_COUNT)
            .map(|i| Some(hook(&i.to_string())))
            .collect();
        assert_eq!(message(hooks), "too many webhooks, expected <=5");
    }

    #[test]
    fn nil_webhook_is_rejected() {
        let err = alert_with(vec![Some(hook("a")), None])
            .validate_webhooks()
            .unwrap_err();
        assert_eq!(err, AlertValidationError::nil("webhook[1]"));
        assert_eq!(err.to_string(), "webhook[1] is nil");
    }

    #[test]
    fn webhook_id_rules() {
        assert_eq!(message(vec![Some(hook(""))]), "webhook[0].id is required");
        assert_eq!(
            message(vec![Some(hook(&"x".repeat(MAX_WEBHOOK_ID_LENGTH + 1)))]),
            "webhook[0].id is too long, expected length <=100"
        );
        assert_eq!(
            message(vec![Some(hook("a")), Some(hook("b")), Some(hook("a"))]),
            "webhook[2].id must be unique"
        );
    }

    #[test]
    fn webhook_url_rules() {
        let cases = [
            ("", "webhook[0].url is required"),
            ("http://", "webhook[0].url is not a valid absolute URL"),
            ("HTTPS://", "webhook[0].url is not a valid absolute URL"),
            ("httpfoo", "webhook[0].url is not a valid absolute URL"),
            ("http:foo", "webhook[0].url is not a valid absolute URL"),
            ("http:/example.com", "webhook[0].url is not a valid absolute URL"),
            ("https:example.com", "webhook[0].url is not a valid absolute URL"),
            ("http:///example.com", "webhook[0].url is not a valid absolute URL"),
            ("https:\\\\example.com", "webhook[0].url is not a valid absolute URL"),
            (
                "handler\u{7f}",
                "webhook[0].url contains invalid characters, expected printable ASCII",
            ),
            (
                "håndler",
                "webhook[0].url contains invalid characters, expected printable ASCII",
            ),
        ];

        for (url, expected) in cases {
            let mut h = hook("a");
            h.url = url.into();
            assert_eq!(message(vec![Some(h)]), expected, "{url}");
        }

        for url in ["HTTPS://Example.com/hook", "http://10.0.0.1:8080/x", "custom-handler"] {
            let mut h = hook("a");
            h.url = url.into();
            assert!(alert_with(vec![Some(h)]).validate_webhooks().is_ok(), "{url}");
        }

        let mut h = hook("a");
        h.url = format!("https://example.com/{}", "p".repeat(MAX_WEBHOOK_URL_LENGTH));
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].url is too long, expected length <=1000"
        );
    }

    #[test]
    fn button_and_confirmation_text() {
        let mut h = hook("a");
        h.button_text = String::new();
        assert_eq!(message(vec![Some(h)]), "webhook[0].buttonText is required");

        let mut h = hook("a");
        h.button_text = "b".repeat(MAX_WEBHOOK_BUTTON_TEXT_LENGTH + 1);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].buttonText is too long, expected length <=25"
        );

        let mut h = hook("a");
        h.confirmation_text = "c".repeat(MAX_WEBHOOK_CONFIRMATION_TEXT_LENGTH + 1);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].confirmationText is too long, expected length <=1000"
        );
    }

    #[test]
    fn enum_fields_reject_unknown_values() {
        let mut h = hook("a");
        h.button_style = "secondary".into();
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].buttonStyle 'secondary' is not valid, expected empty or one of [primary, danger]"
        );

        let mut h = hook("a");
        h.access_level = "everyone".into();
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].accessLevel 'everyone' is not valid, expected empty or one of [global_admins, channel_admins, channel_members]"
        );

        let mut h = hook("a");
        h.display_mode = "never".into();
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].displayMode 'never' is not valid, expected empty or one of [always, open_issue, resolved_issue]"
        );
    }

    #[test]
    fn payload_and_input_counts() {
        let mut h = hook("a");
        h.payload = (0..=MAX_WEBHOOK_PAYLOAD_COUNT)
            .map(|i| (i.to_string(), serde_json::json!(i)))
            .collect();
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].payload item count is too large, expected <=50"
        );

        let mut h = hook("a");
        h.plain_text_input = Some(vec![None; MAX_WEBHOOK_PLAIN_TEXT_INPUT_COUNT + 1]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].plainTextInput item count is too large, expected <=10"
        );

        let mut h = hook("a");
        h.checkbox_input = Some(vec![None; MAX_WEBHOOK_CHECKBOX_INPUT_COUNT + 1]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].checkboxInput item count is too large, expected <=10"
        );
    }

    #[test]
    fn input_ids_share_one_namespace() {
        let mut h = hook("a");
        h.plain_text_input = Some(vec![Some(text_input("same"))]);
        h.checkbox_input = Some(vec![Some(checkbox_input("same", &["x"]))]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].checkboxInput[0].id must be unique among all inputs"
        );

        let mut h = hook("a");
        h.plain_text_input = Some(vec![Some(text_input("same")), Some(text_input("same"))]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].plainTextInput[1].id must be unique among all inputs"
        );

        // Separate webhooks have separate namespaces.
        let mut first = hook("a");
        first.plain_text_input = Some(vec![Some(text_input("same"))]);
        let mut second = hook("b");
        second.plain_text_input = Some(vec![Some(text_input("same"))]);
        assert!(alert_with(vec![Some(first), Some(second)])
            .validate_webhooks()
            .is_ok());
    }

    #[test]
    fn plain_text_input_rules() {
        let cases: Vec<(WebhookPlainTextInput, &str)> = vec![
            (
                WebhookPlainTextInput::default(),
                "webhook[0].plainTextInput[0].id is required",
            ),
            (
                text_input(&"i".repeat(MAX_WEBHOOK_INPUT_ID_LENGTH + 1)),
                "webhook[0].plainTextInput[0].id is too long, expected <=200",
            ),
            (
                WebhookPlainTextInput {
                    description: "d".repeat(MAX_WEBHOOK_INPUT_DESCRIPTION_LENGTH + 1),
                    ..text_input("i")
                },
                "webhook[0].plainTextInput[0].description is too long, expected <=200",
            ),
            (
                WebhookPlainTextInput {
                    min_length: -1,
                    ..text_input("i")
                },
                "webhook[0].plainTextInput[0].minLength must be >=0",
            ),
            (
                WebhookPlainTextInput {
                    min_length: 3001,
                    ..text_input("i")
                },
                "webhook[0].plainTextInput[0].minLength must be <=3000",
            ),
            (
                WebhookPlainTextInput {
                    max_length: -1,
                    ..text_input("i")
                },
                "webhook[0].plainTextInput[0].maxLength must be >=0",
            ),
            (
                WebhookPlainTextInput {
                    max_length: 3001,
                    ..text_input("i")
                },
                "webhook[0].plainTextInput[0].maxLength must be <=3000",
            ),
            (
                WebhookPlainTextInput {
                    min_length: 20,
                    max_length: 10,
                    ..text_input("i")
                },
                "webhook[0].plainTextInput[0].maxLength cannot be smaller than minLength",
            ),
            (
                WebhookPlainTextInput {
                    max_length: 3,
                    initial_value: "abcd".into(),
                    ..text_input("i")
                },
                "webhook[0].plainTextInput[0].initialValue cannot be longer than maxLength",
            ),
            (
                WebhookPlainTextInput {
                    min_length: 5,
                    max_length: 10,
                    initial_value: "abc".into(),
                    ..text_input("i")
                },
                "webhook[0].plainTextInput[0].initialValue cannot be shorter than minLength",
            ),
        ];

        for (input, expected) in cases {
            let mut h = hook("a");
            h.plain_text_input = Some(vec![Some(input)]);
            assert_eq!(message(vec![Some(h)]), expected);
        }

        let mut h = hook("a");
        h.plain_text_input = Some(vec![None]);
        assert_eq!(message(vec![Some(h)]), "webhook[0].plainTextInput[0] is nil");
    }

    #[test]
    fn zero_bounds_accept_empty_initial_value() {
        let mut h = hook("a");
        h.plain_text_input = Some(vec![Some(WebhookPlainTextInput {
            id: "i".into(),
            ..Default::default()
        })]);
        assert!(alert_with(vec![Some(h)]).validate_webhooks().is_ok());
    }

    #[test]
    fn checkbox_input_rules() {
        let mut h = hook("a");
        h.checkbox_input = Some(vec![Some(WebhookCheckboxInput {
            label: "l".repeat(MAX_WEBHOOK_INPUT_LABEL_LENGTH + 1),
            ..checkbox_input("c", &["x"])
        })]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].checkboxInput[0].label is too long, expected <=200"
        );

        let mut h = hook("a");
        h.checkbox_input = Some(vec![Some(checkbox_input("c", &["1", "2", "3", "4", "5", "6"]))]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].checkboxInput[0].options item count is too large, expected <=5"
        );

        let mut h = hook("a");
        h.checkbox_input = Some(vec![Some(checkbox_input("c", &["x", "y", "x"]))]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].checkboxInput[0].options[2].value must be unique"
        );

        let mut h = hook("a");
        h.checkbox_input = Some(vec![Some(checkbox_input("c", &[""]))]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].checkboxInput[0].options[0].value is required"
        );

        let long = "v".repeat(MAX_CHECKBOX_OPTION_VALUE_LENGTH + 1);
        let mut h = hook("a");
        h.checkbox_input = Some(vec![Some(checkbox_input("c", &[long.as_str()]))]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].checkboxInput[0].options[0].value is too long, expected <=100"
        );

        let mut input = checkbox_input("c", &["x"]);
        input.options = Some(vec![
            Some(WebhookCheckboxOption {
                value: "x".into(),
                text: "t".repeat(MAX_WEBHOOK_CHECKBOX_OPTION_TEXT_LENGTH + 1),
                selected: false,
            }),
            None,
        ]);
        let mut h = hook("a");
        h.checkbox_input = Some(vec![Some(input)]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].checkboxInput[0].options[0].text is too long, expected <=50"
        );

        let mut input = checkbox_input("c", &["x"]);
        input.options = Some(vec![None]);
        let mut h = hook("a");
        h.checkbox_input = Some(vec![Some(input)]);
        assert_eq!(
            message(vec![Some(h)]),
            "webhook[0].checkboxInput[0].options[0] is nil"
        );
    }

    #[test]
    fn option_values_are_scoped_to_their_group() {
        let mut h = hook("a");
        h.checkbox_input = Some(vec![
            Some(checkbox_input("first", &["x"])),
            Some(checkbox_input("second", &["x"])),
        ]);
        assert!(alert_with(vec![Some(h)]).validate_webhooks().is_ok());
    }
}
