//! End-to-end conversion: decode, parse, convert, encode.

use crate::adapters::adapter_for;
use crate::error::ConvertError;
use crate::format::FormatId;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Successful conversion output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Converted {
    /// Target document text.
    pub output: String,
    /// Number of servers carried over.
    pub server_count: usize,
}

/// Result of [`convert_config`], safe to hand straight to a UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConversionOutcome {
    Converted { output: String, server_count: usize },
    Failed { error: String },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Converted { output, .. } => Some(output),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Converted { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }
}

impl From<Result<Converted>> for ConversionOutcome {
    fn from(result: Result<Converted>) -> Self {
        match result {
            Ok(Converted {
                output,
                server_count,
            }) => Self::Converted {
                output,
                server_count,
            },
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// Converts `text` written for `source` into `target`'s format.
///
/// Fails when the text cannot be decoded, declares no servers, or the
/// target document cannot be encoded.
pub fn try_convert_config(text: &str, source: FormatId, target: FormatId) -> Result<Converted> {
    let document = source.raw_format().deserialize(text, source)?;

    let config = adapter_for(source).parse(&document);
    if config.is_empty() {
        return Err(ConvertError::NoServers);
    }

    let converted = adapter_for(target).convert(&config);
    let output = target.raw_format().serialize(&converted)?;

    debug!(
        source = %source,
        target = %target,
        servers = config.len(),
        "Converted configuration"
    );
    Ok(Converted {
        output,
        server_count: config.len(),
    })
}

/// Infallible wrapper over [`try_convert_config`] that folds failures into
/// a readable message.
pub fn convert_config(text: &str, source: FormatId, target: FormatId) -> ConversionOutcome {
    try_convert_config(text, source, target).into()
}
