//! Turning model completions into JSON values

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Outermost `{ ... }` block, spanning newlines
static JSON_BLOCK: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}"));

/// Interpret a completion as structured JSON where possible.
///
/// Models often wrap the requested object in prose or code fences, so after
/// a direct parse fails the outermost brace-delimited block is tried. Text
/// that still does not parse is kept verbatim as a JSON string.
pub fn parse_completion(text: &str) -> Value {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return value;
    }

    if let Some(block) = extract_json_block(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(block) {
            return value;
        }
    }

    Value::String(trimmed.to_string())
}

fn extract_json_block(text: &str) -> Option<&str> {
    let regex = JSON_BLOCK.as_ref().ok()?;
    regex.find(text).map(|m| m.as_str())
}
