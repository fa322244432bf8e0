use serde_json::{Map, Value};

/// Character budget for the dashboard's response column
pub const DEFAULT_TRUNCATE_LENGTH: usize = 120;

/// Appended to any string cut by [`truncate`]
pub const ELLIPSIS: char = '…';

/// Shown wherever a field is missing
pub const PLACEHOLDER: &str = "-";

/// Return a classification mapping that is always safe to read.
///
/// Agents send either an object with `topic`/`sentiment`/`priority` keys or a
/// sentinel such as `"N/A"`. Anything that is not an object becomes an empty
/// mapping, objects come back unchanged.
pub fn normalize_classification(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    }
}

/// Cut `text` to `max_len` characters and mark the cut with an ellipsis.
///
/// Non-string values yield an empty string. Lengths are counted in Unicode
/// scalar values, so multi-byte text is never split mid-character.
pub fn truncate(text: &Value, max_len: usize) -> String {
    match text {
        Value::String(text) => truncate_str(text, max_len),
        _ => String::new(),
    }
}

pub fn truncate_str(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + ELLIPSIS.len_utf8());
            truncated.push_str(&text[..cut]);
            truncated.push(ELLIPSIS);
            truncated
        }
        None => text.to_string(),
    }
}

/// Render a single log field for a table cell
pub fn display_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Loose truthiness used for agent-supplied flags such as `"Should Escalate"`
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
