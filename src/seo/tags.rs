//! Tag list normalization.
//!
//! Content sources deliver tags in several shapes: a real list, a JSON
//! encoded list inside a string, a comma-separated string, a single bare
//! string, or nothing at all. `normalize_tags` reduces all of them to a plain
//! list. The checks run in a fixed order and each returns early; JSON parsing
//! is always attempted before comma splitting, so `"[\"a,b\"]"` yields the
//! single tag `a,b`.

use serde_json::Value;

/// Normalize a dynamic tags value into a list of strings.
///
/// | Input                         | Output                    |
/// |-------------------------------|---------------------------|
/// | `["a", "b"]`                  | `["a", "b"]` (as-is)      |
/// | `"[\"a\",\"b\"]"`             | `["a", "b"]`              |
/// | `"a, b, ,c"`                  | `["a", "b", "c"]`         |
/// | `" solo "`                    | `["solo"]`                |
/// | `""`, `null`, `42`, `{}`      | `[]`                      |
pub fn normalize_tags(tags: &Value) -> Vec<String> {
    match tags {
        Value::Array(items) => from_list(items),
        Value::String(s) => from_string(s),
        _ => Vec::new(),
    }
}

/// Lists pass through without per-element cleanup.
///
/// Non-string elements keep their JSON text (`1` becomes `"1"`).
fn from_list(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}

fn from_string(s: &str) -> Vec<String> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(s) {
        return from_list(&items);
    }

    if s.contains(',') {
        return split_commas(s);
    }

    let trimmed = s.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_owned()]
    }
}

fn split_commas(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}
