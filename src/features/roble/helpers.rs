use std::collections::HashSet;

use serde_json::Value;

/// Pulls `column` out of every record that is an object, stringifies and
/// trims the value, and drops nulls and empties. Record order is preserved;
/// non-object records are skipped silently.
pub fn extract_column(records: &[Value], column: &str) -> Vec<String> {
    let mut values = Vec::new();

    for record in records {
        let Some(fields) = record.as_object() else {
            continue;
        };
        let Some(value) = fields.get(column) else {
            continue;
        };
        if value.is_null() {
            continue;
        }

        let text = match value {
            Value::String(text) => text.trim().to_string(),
            other => other.to_string().trim().to_string(),
        };
        if !text.is_empty() {
            values.push(text);
        }
    }

    values
}

/// Case-sensitive distinct count over already-trimmed values.
pub fn distinct_count(values: &[String]) -> usize {
    values.iter().collect::<HashSet<_>>().len()
}
