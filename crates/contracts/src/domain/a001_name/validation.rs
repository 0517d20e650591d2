//! Schema check for name lists received over HTTP.

use serde_json::Value;

use super::aggregate::{NameRecord, MAX_NAMES_PER_REQUEST};

/// Decode a `/api/names` response body.
///
/// A body that is not a JSON array yields an empty list. Elements that do not
/// decode as [`NameRecord`] or carry a blank name are dropped one by one, so a
/// single bad document never hides the rest of the page.
pub fn parse_name_records(body: &str) -> Vec<NameRecord> {
    let items = match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            log::warn!("names response is not an array: {}", type_name(&other));
            return Vec::new();
        }
        Err(e) => {
            log::warn!("names response is not valid JSON: {}", e);
            return Vec::new();
        }
    };

    let total = items.len();
    let mut records: Vec<NameRecord> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<NameRecord>(item).ok())
        .filter(|record| !record.name.trim().is_empty())
        .collect();

    if records.len() < total {
        log::warn!(
            "dropped {} malformed name records out of {}",
            total - records.len(),
            total
        );
    }

    records.truncate(MAX_NAMES_PER_REQUEST);
    records
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
