//! Lenient JSON extraction from model output
//!
//! Models wrap JSON in code fences or chatter around it. Attempts, in order:
//! 1. the whole text
//! 2. the body of a fenced code block
//! 3. the span from the first `{` to the last `}`

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::CompletionError;

static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)```";
    Regex::new(pattern).expect("fence regex")
});

/// Description and tags pulled out of a completion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCompletion {
    pub description: String,
    pub tags: Vec<String>,
}

impl ParsedCompletion {
    /// Read fields from a JSON object.
    ///
    /// Missing or mistyped `description` becomes empty; `tags` that is not an
    /// array becomes empty, and non-string entries are dropped.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let description = object
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let tags = object
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { description, tags }
    }
}

/// Parse raw completion text into description and tags.
pub fn parse_completion(raw: &str) -> Result<ParsedCompletion, CompletionError> {
    let object = extract_object(raw).ok_or_else(|| CompletionError::Parse {
        reason: "no JSON object found".to_string(),
        raw: raw.to_string(),
    })?;
    Ok(ParsedCompletion::from_object(&object))
}

/// Find the JSON object in `raw` using the fallback chain.
pub fn extract_object(raw: &str) -> Option<Map<String, Value>> {
    if let Some(object) = parse_object(raw) {
        return Some(object);
    }

    if let Some(body) = strip_fence(raw) {
        if let Some(object) = parse_object(body) {
            tracing::debug!("completion JSON recovered from code fence");
            return Some(object);
        }
    }

    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }

    let object = parse_object(&raw[start..=end])?;
    tracing::warn!("completion JSON recovered by brace slicing");
    Some(object)
}

/// Body of the first fenced code block, if any.
pub fn strip_fence(raw: &str) -> Option<&str> {
    FENCE_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat() -> ParsedCompletion {
        ParsedCompletion {
            description: "a cat".into(),
            tags: vec!["cat".into(), "pet".into()],
        }
    }

    #[test]
    fn direct_json() {
        let parsed = parse_completion(r#"{"description":"a cat","tags":["cat","pet"]}"#).unwrap();
        assert_eq!(parsed, cat());
    }

    #[test]
    fn json_code_fence() {
        let raw = "```json\n{\"description\":\"a cat\",\"tags\":[\"cat\",\"pet\"]}\n```";
        assert_eq!(
            strip_fence(raw).map(str::trim),
            Some(r#"{"description":"a cat","tags":["cat","pet"]}"#)
        );
        assert_eq!(parse_completion(raw).unwrap(), cat());
    }

    #[test]
    fn bare_code_fence() {
        let raw = "```\n{\"description\":\"a cat\",\"tags\":[\"cat\",\"pet\"]}\n```";
        assert_eq!(parse_completion(raw).unwrap(), cat());
    }

    #[test]
    fn surrounding_chatter() {
        let raw = r#"Sure! Here you go: {"description":"a cat","tags":["cat","pet"]} Enjoy."#;
        assert_eq!(parse_completion(raw).unwrap(), cat());
    }

    #[test]
    fn missing_fields_default() {
        let parsed = parse_completion("{}").unwrap();
        assert_eq!(parsed, ParsedCompletion::default());
    }

    #[test]
    fn non_list_tags_become_empty() {
        let parsed = parse_completion(r#"{"description":"d","tags":"cat, pet"}"#).unwrap();
        assert_eq!(parsed.description, "d");
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn non_string_tags_dropped() {
        let parsed = parse_completion(r#"{"description":"d","tags":["cat", 3, null, "pet"]}"#)
            .unwrap();
        assert_eq!(parsed.tags, vec!["cat", "pet"]);
    }

    #[test]
    fn gives_up_with_raw_text() {
        let err = parse_completion("I can't describe this image.").unwrap_err();
        match err {
            CompletionError::Parse { raw, .. } => assert_eq!(raw, "I can't describe this image."),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reversed_braces_fail() {
        assert!(extract_object("} nothing here {").is_none());
    }

    #[test]
    fn top_level_array_is_not_an_object() {
        assert!(parse_completion(r#"["cat","pet"]"#).is_err());
    }
}
