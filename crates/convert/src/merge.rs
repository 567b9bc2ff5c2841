//! Merging a converted fragment into an existing settings document.

use serde_json::Value;
use tracing::debug;

/// Shallow-merges `fragment` into `existing`; top-level fragment keys win.
///
/// Used for formats whose servers share a file with unrelated settings
/// (Zed, Gemini CLI, Codex, Goose, ...). When either side is not an object
/// the fragment replaces the document.
pub fn merge_into_document(existing: Value, fragment: Value) -> Value {
    match (existing, fragment) {
        (Value::Object(mut base), Value::Object(update)) => {
            for (key, value) in update {
                if base.insert(key.clone(), value).is_some() {
                    debug!(key = %key, "Replaced existing settings key");
                }
            }
            Value::Object(base)
        }
        (_, fragment) => fragment,
    }
}
