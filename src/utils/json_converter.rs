use serde_json::Value;

/// Render a JSON value as a single display line.
///
/// Nested arrays and objects are flattened with `, ` separators.
pub fn value_to_short_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(value_to_short_string)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{}: {}", key, value_to_short_string(val)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Look up `key` in a serialized record; absent and null both yield `None`.
pub fn field_value(record: &Value, key: &str) -> Option<String> {
    match record.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => Some(value_to_short_string(v)),
    }
}
