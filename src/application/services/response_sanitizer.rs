use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::domain::ParsedPayload;

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```[ \t]*[A-Za-z0-9_+\-]*[ \t]*\r?\n?").unwrap());

static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n?[ \t]*```\s*$").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    #[error("no JSON object found in model output")]
    NoJsonFound,
    #[error("model output is not valid JSON: {0}")]
    JsonDecode(#[from] serde_json::Error),
}

/// Removes a leading code fence (with or without a language tag) and a
/// trailing fence. Text without fences is returned unchanged.
pub fn strip_code_fences(raw: &str) -> &str {
    let without_leading = match LEADING_FENCE.find(raw) {
        Some(m) => &raw[m.end()..],
        None => raw,
    };

    match TRAILING_FENCE.find(without_leading) {
        Some(m) => &without_leading[..m.start()],
        None => without_leading,
    }
}

/// Returns the span from the first `{` to the last `}`, inclusive.
pub fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

pub fn extract_json(raw: &str) -> Result<ParsedPayload, SanitizeError> {
    let stripped = strip_code_fences(raw);
    let candidate = find_json_object(stripped).ok_or(SanitizeError::NoJsonFound)?;
    let value: Value = serde_json::from_str(candidate)?;
    Ok(ParsedPayload::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_fence_is_only_stripped_at_start() {
        let raw = "{\"code\": \"```json\"}";
        assert_eq!(strip_code_fences(raw), raw);
    }

    #[test]
    fn closing_brace_before_opening_is_not_an_object() {
        assert!(find_json_object("} nothing {").is_none());
    }
}
