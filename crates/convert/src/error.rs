//! Error types for configuration conversion.

use crate::format::RawFormat;
use thiserror::Error;

/// Failures surfaced by the conversion pipeline.
///
/// Per-server gaps (missing command, missing URL) are never errors; adapters
/// degrade to partial records instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// No JSON recovery strategy produced a parseable document.
    #[error("Invalid JSON.{}\nPlease copy and paste the complete configuration file.", imbalance_hint(.open, .close))]
    InvalidJson {
        open: usize,
        close: usize,
        open_brackets: usize,
        close_brackets: usize,
    },

    #[error("Invalid YAML. Please check your {editor} configuration file. ({message})")]
    InvalidYaml {
        editor: &'static str,
        message: String,
    },

    #[error("Invalid TOML. Please check your {editor} config.toml file. ({message})")]
    InvalidToml {
        editor: &'static str,
        message: String,
    },

    /// The document parsed but held no server declarations.
    #[error("No MCP servers found to convert. Please check that the input matches the selected format.")]
    NoServers,

    /// Serializing the target document failed.
    #[error("An unknown error occurred while writing {format} output: {message}")]
    Encode { format: RawFormat, message: String },

    #[error("Unknown format: '{0}'")]
    UnknownFormat(String),
}

fn imbalance_hint(open: &usize, close: &usize) -> String {
    let (open, close) = (*open, *close);
    if open == close {
        return String::new();
    }
    let side = if open > close {
        "left unclosed"
    } else {
        "missing their opening brace"
    };
    format!(
        " (brace imbalance: {{ {open}, }} {close} - {} {side})",
        open.abs_diff(close)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_reports_unclosed_braces() {
        let err = ConvertError::InvalidJson {
            open: 3,
            close: 1,
            open_brackets: 0,
            close_brackets: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("{ 3, } 1 - 2 left unclosed"), "{msg}");
        assert!(msg.contains("complete configuration file"));
    }

    #[test]
    fn json_error_reports_missing_openers() {
        let err = ConvertError::InvalidJson {
            open: 1,
            close: 2,
            open_brackets: 0,
            close_brackets: 0,
        };
        assert!(err
            .to_string()
            .contains("1 missing their opening brace"));
    }

    #[test]
    fn balanced_json_error_omits_hint() {
        let err = ConvertError::InvalidJson {
            open: 2,
            close: 2,
            open_brackets: 1,
            close_brackets: 1,
        };
        assert!(!err.to_string().contains("imbalance"));
    }
}
