/// Placeholder replaced with the severity emoji when rendering header and text.
pub const STATUS_PLACEHOLDER: &str = ":status:";

/// Markdown code fence.
pub const CODE_FENCE: &str = "```";

const ELLIPSIS: &str = "...";

/// Unicode-safe string normalization helpers. All lengths are in codepoints.
pub struct TextUtil;

impl TextUtil {
    #[inline]
    pub fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    /// Returns the first `max_chars` codepoints of `s`.
    #[inline]
    pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
        match s.char_indices().nth(max_chars) {
            Some((idx, _)) => &s[..idx],
            None => s,
        }
    }

    /// Shortens `s` to at most `max_chars` codepoints, marking the cut with `...`.
    pub fn shorten(s: &str, max_chars: usize) -> String {
        if Self::char_len(s) <= max_chars {
            return s.to_string();
        }

        let kept = Self::truncate_chars(s, max_chars.saturating_sub(ELLIPSIS.len()));
        format!("{}{}", kept.trim(), ELLIPSIS)
    }

    /// Like [`TextUtil::shorten`], but a trailing code fence is kept after the
    /// ellipsis so the fence stays balanced.
    pub fn shorten_markdown(s: &str, max_chars: usize) -> String {
        if Self::char_len(s) <= max_chars {
            return s.to_string();
        }

        if !s.ends_with(CODE_FENCE) {
            return Self::shorten(s, max_chars);
        }

        let suffix_len = ELLIPSIS.len() + CODE_FENCE.len();
        let kept = Self::truncate_chars(s, max_chars.saturating_sub(suffix_len));
        format!("{}{}{}", kept.trim(), ELLIPSIS, CODE_FENCE)
    }

    #[inline]
    pub fn trim_lower(s: &str) -> String {
        s.trim().to_lowercase()
    }

    #[inline]
    pub fn trim_upper(s: &str) -> String {
        s.trim().to_uppercase()
    }

    /// Trims and collapses each newline to a single space.
    #[inline]
    pub fn single_line(s: &str) -> String {
        s.trim().replace('\n', " ")
    }

    /// Removes the status placeholder, trims, and collapses newlines.
    ///
    /// Removal repeats until no placeholder is left, since deleting one can
    /// join the surrounding text into another.
    pub fn plain_summary(s: &str) -> String {
        let mut s = s.to_string();
        while s.contains(STATUS_PLACEHOLDER) {
            s = s.replace(STATUS_PLACEHOLDER, "");
        }
        s.trim().replace('\n', " ")
    }

    /// True when every byte is printable ASCII (0x20..=0x7E).
    #[inline]
    pub fn is_printable_ascii(s: &str) -> bool {
        s.bytes().all(|b| (0x20..=0x7e).contains(&b))
    }

    /// True when `s` starts with `prefix`, ignoring ASCII case.
    #[inline]
    pub fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
        s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    }
}
