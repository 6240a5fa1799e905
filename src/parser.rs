//! Payload parser: decodes the JSON the host application emits on each update.
//!
//! Accepted shapes:
//!
//! ```json
//! { "key": "Bb", "chords": { "Diminished": "B,D,F,A,,,,b", ... } }
//! { "key": "C",  "chords": [ { "name": "Major", "spec": "C,E,G,B,,,," } ] }
//! { "Augmented": "C,E,G,B,,,#,", "Major": "C,E,G,B,,,," }
//! ```
//!
//! Map order is document order and becomes the display order.

use serde_json::{Map, Value};

use crate::error::{ChordError, Result};
use crate::model::{ChordSpec, Payload};

const KEY_FIELDS: [&str; 2] = ["key", "root"];
const CHORDS_FIELD: &str = "chords";

/// Parse a payload string.
pub fn parse_payload(json: &str) -> Result<Payload> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(ChordError::MalformedPayload("empty payload".into()));
    }
    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| ChordError::MalformedPayload(format!("invalid JSON: {e}")))?;
    payload_from_value(&value)
}

/// Interpret an already decoded JSON value as a payload.
pub fn payload_from_value(value: &Value) -> Result<Payload> {
    let obj = match value {
        Value::Object(obj) => obj,
        Value::String(s) if s.is_empty() => {
            return Err(ChordError::MalformedPayload("empty payload".into()));
        }
        Value::Null => return Err(ChordError::MalformedPayload("null payload".into())),
        other => {
            return Err(ChordError::MalformedPayload(format!(
                "expected an object, got {}",
                kind_of(other)
            )))
        }
    };

    let key = parse_key(obj)?;

    let chords = match obj.get(CHORDS_FIELD) {
        Some(Value::Object(map)) => chords_from_map(map.iter()),
        Some(Value::Array(items)) => chords_from_array(items)?,
        Some(other) => {
            return Err(ChordError::MalformedPayload(format!(
                "'chords' must be an object or array, got {}",
                kind_of(other)
            )))
        }
        None => chords_from_map(obj.iter().filter(|(name, _)| !KEY_FIELDS.contains(&name.as_str()))),
    };

    Ok(Payload { key, chords })
}

fn parse_key(obj: &Map<String, Value>) -> Result<Option<String>> {
    for field in KEY_FIELDS {
        match obj.get(field) {
            Some(Value::String(s)) => return Ok(Some(s.clone())),
            Some(Value::Null) | None => continue,
            Some(other) => {
                return Err(ChordError::MalformedPayload(format!(
                    "'{field}' must be a string, got {}",
                    kind_of(other)
                )))
            }
        }
    }
    Ok(None)
}

fn chords_from_map<'a>(entries: impl Iterator<Item = (&'a String, &'a Value)>) -> Vec<ChordSpec> {
    entries
        .filter_map(|(name, value)| match value {
            Value::String(spec) => Some(ChordSpec::new(name.as_str(), spec.as_str())),
            other => {
                tracing::warn!(chord = %name, kind = kind_of(other), "ignoring non-string chord entry");
                None
            }
        })
        .collect()
}

fn chords_from_array(items: &[Value]) -> Result<Vec<ChordSpec>> {
    items
        .iter()
        .map(|item| {
            serde_json::from_value::<ChordSpec>(item.clone())
                .map_err(|e| ChordError::MalformedPayload(format!("bad chord entry: {e}")))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
