//! Trait definition for format adapters.

use crate::format::FormatId;
use crate::model::UniversalConfig;
use serde_json::Value;

/// Translates between one editor's schema and the canonical model.
///
/// Adapters are permissive: a server missing its command or URL still comes
/// through with whatever fields it has.
pub trait FormatAdapter: Send + Sync {
    /// Format this adapter reads and writes.
    fn id(&self) -> FormatId;

    /// Extracts every declared server from an already-decoded document.
    fn parse(&self, document: &Value) -> UniversalConfig;

    /// Builds this format's document from the canonical model.
    fn convert(&self, config: &UniversalConfig) -> Value;
}
