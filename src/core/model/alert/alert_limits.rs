//! Field limits and patterns for alerts.
//!
//! Length limits follow the chat API limits of the delivery backend. Cleaning
//! truncates display fields to these limits; validation rejects everything else.

use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;

/// Timestamps older than this are replaced with the current time by the cleaning pass.
pub const MAX_TIMESTAMP_AGE_DAYS: i64 = 7;

pub fn max_timestamp_age() -> Duration {
    Duration::days(MAX_TIMESTAMP_AGE_DAYS)
}

pub const MAX_SLACK_CHANNEL_ID_LENGTH: usize = 80;
pub const MAX_ROUTE_KEY_LENGTH: usize = 1000;
/// The header block limit is 150; the rest is reserved for status emoji replacement.
pub const MAX_HEADER_LENGTH: usize = 130;
pub const MAX_FALLBACK_TEXT_LENGTH: usize = 150;
pub const MAX_TEXT_LENGTH: usize = 10000;
pub const MAX_AUTHOR_LENGTH: usize = 100;
pub const MAX_HOST_LENGTH: usize = 100;
pub const MAX_FOOTER_LENGTH: usize = 300;
pub const MAX_USERNAME_LENGTH: usize = 100;
pub const MAX_FIELD_TITLE_LENGTH: usize = 30;
pub const MAX_FIELD_VALUE_LENGTH: usize = 200;
/// Excluding the surrounding colons.
pub const MAX_ICON_EMOJI_LENGTH: usize = 50;
/// Excluding the angle brackets.
pub const MAX_MENTION_LENGTH: usize = 20;
pub const MAX_CORRELATION_ID_LENGTH: usize = 500;

pub const MIN_AUTO_RESOLVE_SECONDS: i64 = 30;
/// Roughly two years.
pub const MAX_AUTO_RESOLVE_SECONDS: i64 = 63_113_851;

pub const MAX_IGNORE_IF_TEXT_CONTAINS_LENGTH: usize = 1000;
pub const MAX_IGNORE_IF_TEXT_CONTAINS_COUNT: usize = 20;

pub const MAX_FIELD_COUNT: usize = 20;

pub const MAX_WEBHOOK_COUNT: usize = 5;
pub const MAX_WEBHOOK_ID_LENGTH: usize = 100;
pub const MAX_WEBHOOK_URL_LENGTH: usize = 1000;
pub const MAX_WEBHOOK_BUTTON_TEXT_LENGTH: usize = 25;
pub const MAX_WEBHOOK_CONFIRMATION_TEXT_LENGTH: usize = 1000;
pub const MAX_WEBHOOK_PAYLOAD_COUNT: usize = 50;
pub const MAX_WEBHOOK_PLAIN_TEXT_INPUT_COUNT: usize = 10;
pub const MAX_WEBHOOK_CHECKBOX_INPUT_COUNT: usize = 10;
pub const MAX_WEBHOOK_INPUT_ID_LENGTH: usize = 200;
pub const MAX_WEBHOOK_INPUT_DESCRIPTION_LENGTH: usize = 200;
pub const MAX_WEBHOOK_INPUT_LABEL_LENGTH: usize = 200;
/// Ceiling for the min/max length of a plain text input.
pub const MAX_WEBHOOK_INPUT_TEXT_LENGTH: i64 = 3000;
pub const MAX_WEBHOOK_CHECKBOX_OPTION_COUNT: usize = 5;
pub const MAX_WEBHOOK_CHECKBOX_OPTION_TEXT_LENGTH: usize = 50;
pub const MAX_CHECKBOX_OPTION_VALUE_LENGTH: usize = 100;

pub const MAX_ESCALATION_COUNT: usize = 3;
pub const MIN_ESCALATION_DELAY_SECONDS: i64 = 30;
pub const MIN_ESCALATION_DELAY_DIFF_SECONDS: i64 = 30;
pub const MAX_ESCALATION_SLACK_MENTION_COUNT: usize = 10;

/// Channel IDs and channel names. Names are mapped to IDs by the routing backend.
pub static SLACK_CHANNEL_ID_OR_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"^[0-9a-zA-Z\-_]{{1,{}}}$",
        MAX_SLACK_CHANNEL_ID_LENGTH
    ))
});

/// Icon emojis on the format `:emoji:`.
pub static ICON_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"^:[^:]{{1,{}}}:$", MAX_ICON_EMOJI_LENGTH)));

/// Mentions such as `<!here>`, `<!channel>` and `<@U12345678>`.
pub static SLACK_MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"^((<!here>)|(<!channel>)|(<@[^>\s]{{1,{}}}>))$",
        MAX_MENTION_LENGTH
    ))
});

// Patterns are built from the constants above and always compile.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("alert limit pattern must compile")
}
