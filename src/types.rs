//! Common types used throughout the client
//!
//! Resource records are kept as raw JSON objects: the API's payloads are
//! passed through verbatim, so no schema is imposed beyond the `id` key.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A survey, response, collector or user as returned by the API
pub type Record = JsonObject;

/// Caller-supplied request body fields
pub type Fields = JsonObject;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Field helpers
// ============================================================================

/// Merge caller fields over a base object. Later keys win.
pub fn merge_fields(mut base: Fields, extra: Fields) -> Fields {
    for (key, value) in extra {
        base.insert(key, value);
    }
    base
}

/// Build a [`Fields`] object from a JSON value.
///
/// Anything other than an object is rejected.
pub fn fields_from_value(value: Value) -> Result<Fields> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::config(format!(
            "Expected a JSON object for request fields, got {other}"
        ))),
    }
}

/// Interpret a response body as a single record
pub(crate) fn into_record(value: Value) -> Result<Record> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::protocol(format!(
            "Expected a JSON object, got {other}"
        ))),
    }
}

/// Read the `id` of a record as a path segment
pub fn record_id(record: &Record) -> Option<String> {
    match record.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract a value from JSON using a simple JSONPath expression
/// Supports basic paths like "$.links.next" or "links.next"
pub fn extract_jsonpath(value: &Value, path: &str) -> Option<String> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    match current {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ============================================================================
// Dates
// ============================================================================

/// Date format accepted by the date-range filters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check that `start` and `end` are `YYYY-MM-DD` dates with `start <= end`
pub fn validate_date_range(start: &str, end: &str) -> bool {
    parse_date_range(start, end).is_ok()
}

/// Parse a `YYYY-MM-DD` date range, rejecting malformed or inverted ranges
pub fn parse_date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate)> {
    let parse = |s: &str| {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| Error::InvalidDateRange {
            message: format!("'{s}' is not a YYYY-MM-DD date: {e}"),
        })
    };

    let start_date = parse(start)?;
    let end_date = parse(end)?;
    if start_date > end_date {
        return Err(Error::InvalidDateRange {
            message: format!("{start} is after {end}"),
        });
    }
    Ok((start_date, end_date))
}
