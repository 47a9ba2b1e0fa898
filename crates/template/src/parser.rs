//! Template JSON parsing and path resolution

use serde_json::Value;

use crate::{Result, Template, TemplateError};

/// Default delimiter for lookup paths
///
/// Stored records written by older tool versions used the arrow glyph
/// `"→"` instead; pass it explicitly to keep resolving them.
pub const DEFAULT_DELIMITER: &str = ".";

/// Parse a template record from a JSON string
pub fn parse_template(json: &str) -> Result<Template> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Resolve a delimited lookup path against nested data
///
/// Splits `path` on `delimiter` and walks one nested mapping per
/// segment, with whitespace around segments trimmed. Resolution fails
/// as a whole if any segment is missing or the current value is not a
/// mapping; a blank path never resolves. Pure and uncached.
pub fn resolve_path<'a>(data: &'a Value, path: &str, delimiter: &str) -> Option<&'a Value> {
    if path.trim().is_empty() {
        return None;
    }

    let mut current = data;
    for segment in path.split(delimiter) {
        current = current.get(segment.trim())?;
    }
    Some(current)
}

/// Convert a resolved value to its display-string form
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
