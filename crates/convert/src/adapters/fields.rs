//! Shared field readers and the "omit empty" entry builder used by every
//! adapter.

use crate::format::FormatId;
use crate::model::{millis_to_seconds, seconds_to_millis, Passthrough, StringMap, UniversalServer};
use serde_json::{Map, Value};
use tracing::warn;

/// Unit a format stores its timeout in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Millis,
    Seconds,
}

/// Reads a non-empty string field.
pub fn read_string(entry: &Map<String, Value>, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Reads the first non-empty string among `keys`, in preference order.
pub fn read_first_string(entry: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| read_string(entry, key))
}

/// Reads a list of strings, skipping non-string items.
pub fn read_string_list(server: &str, entry: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    match entry.get(key)? {
        Value::Array(items) => {
            let mut result = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match scalar_to_string(item) {
                    Some(s) => result.push(s),
                    None => warn!(
                        server = %server,
                        field = key,
                        index = i,
                        value = ?item,
                        "Skipping non-string list item"
                    ),
                }
            }
            Some(result)
        }
        Value::Null => None,
        other => {
            warn!(
                server = %server,
                field = key,
                expected = "array",
                actual = ?other,
                "Field has wrong type"
            );
            None
        }
    }
}

/// Reads a string-to-string map, stringifying numbers and booleans.
pub fn read_string_map(server: &str, entry: &Map<String, Value>, key: &str) -> Option<StringMap> {
    match entry.get(key)? {
        Value::Object(obj) => {
            let mut result = StringMap::with_capacity(obj.len());
            for (k, v) in obj {
                match scalar_to_string(v) {
                    Some(s) => {
                        result.insert(k.clone(), s);
                    }
                    None => warn!(
                        server = %server,
                        field = key,
                        key = %k,
                        value = ?v,
                        "Skipping non-string map value"
                    ),
                }
            }
            Some(result)
        }
        Value::Null => None,
        other => {
            warn!(
                server = %server,
                field = key,
                expected = "object",
                actual = ?other,
                "Field has wrong type"
            );
            None
        }
    }
}

/// Reads the first present map among `keys`, in preference order.
pub fn read_first_map(server: &str, entry: &Map<String, Value>, keys: &[&str]) -> Option<StringMap> {
    keys.iter()
        .find_map(|key| read_string_map(server, entry, key).filter(|m| !m.is_empty()))
}

/// Reads a timeout and normalizes it to milliseconds.
pub fn read_timeout(entry: &Map<String, Value>, key: &str, unit: TimeUnit) -> Option<u64> {
    let raw = entry.get(key)?;
    let number = raw
        .as_f64()
        .or_else(|| raw.as_str().and_then(|s| s.trim().parse::<f64>().ok()))?;
    if number <= 0.0 {
        return None;
    }
    Some(match unit {
        TimeUnit::Millis => number.round() as u64,
        TimeUnit::Seconds => seconds_to_millis(number),
    })
}

/// Copies the listed vendor fields verbatim.
pub fn collect_passthrough(
    format: FormatId,
    entry: &Map<String, Value>,
    keys: &[&str],
) -> Option<Passthrough> {
    let fields: Map<String, Value> = keys
        .iter()
        .filter_map(|key| entry.get(*key).map(|v| (key.to_string(), v.clone())))
        .collect();
    Passthrough::new(format, fields)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Builds one output object, dropping absent and empty values so that
/// round trips stay clean.
#[derive(Debug, Default)]
pub struct EntryBuilder {
    fields: Map<String, Value>,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.fields.insert(key.to_string(), Value::String(v.to_string()));
        }
        self
    }

    pub fn list(mut self, key: &str, value: Option<&[String]>) -> Self {
        if let Some(items) = value.filter(|items| !items.is_empty()) {
            self.fields.insert(
                key.to_string(),
                Value::Array(items.iter().cloned().map(Value::String).collect()),
            );
        }
        self
    }

    pub fn map(mut self, key: &str, value: Option<&StringMap>) -> Self {
        if let Some(map) = value.filter(|m| !m.is_empty()) {
            self.fields.insert(
                key.to_string(),
                Value::Object(
                    map.iter()
                        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                        .collect(),
                ),
            );
        }
        self
    }

    /// Writes a millisecond timeout in the format's unit.
    ///
    /// Sub-second values never round down to a zero-second timeout; they
    /// are written as one second.
    pub fn timeout(mut self, key: &str, millis: Option<u64>, unit: TimeUnit) -> Self {
        if let Some(ms) = millis.filter(|ms| *ms > 0) {
            let value = match unit {
                TimeUnit::Millis => ms,
                TimeUnit::Seconds => millis_to_seconds(ms).max(1),
            };
            self.fields.insert(key.to_string(), Value::from(value));
        }
        self
    }

    /// Writes a value unconditionally (scaffolding fields).
    pub fn value(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Re-applies fields carried from a document of the same format.
    pub fn passthrough(mut self, server: &UniversalServer, target: FormatId) -> Self {
        if let Some(extra) = server.passthrough_for(target) {
            for (k, v) in extra {
                self.fields.insert(k.clone(), v.clone());
            }
        }
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
