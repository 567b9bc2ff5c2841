//! Bidirectional conversion of MCP server configuration between editor and
//! agent formats.
//!
//! Every format is parsed into one canonical [`UniversalConfig`] and written
//! back out by the target format's adapter, so adding a format means adding
//! one adapter rather than one converter per pair. JSON input goes through a
//! recovery parser that tolerates the usual copy-paste damage (missing
//! outer braces, trailing commas, a truncated tail).
//!
//! # Examples
//!
//! ```
//! use mcp_bridge_convert::{convert_config, detect_format_in_text, FormatId};
//!
//! let input = r#""mcpServers": {
//!     "github": {
//!         "command": "npx",
//!         "args": ["-y", "@modelcontextprotocol/server-github"],
//!     }
//! }"#;
//!
//! assert_eq!(detect_format_in_text(input), Some(FormatId::ClaudeDesktop));
//!
//! let outcome = convert_config(input, FormatId::ClaudeDesktop, FormatId::CodexCli);
//! let output = outcome.output().unwrap();
//! assert!(output.contains("[mcp_servers.github]"));
//! ```

#![deny(unsafe_code)]

pub mod adapters;
mod detect;
mod error;
mod flexible;
mod format;
mod merge;
mod model;
mod orchestrator;

pub use adapters::{adapter_for, convert_from_universal, parse_to_universal, FormatAdapter};
pub use detect::{detect_format, detect_format_from_path, detect_format_in_text};
pub use error::ConvertError;
pub use flexible::{parse_json_flexible, repair_json, BraceCounts};
pub use format::{parse_format_list, FormatId, RawFormat};
pub use merge::merge_into_document;
pub use model::{
    millis_to_seconds, seconds_to_millis, Passthrough, StringMap, Transport, UniversalConfig,
    UniversalServer,
};
pub use orchestrator::{convert_config, try_convert_config, ConversionOutcome, Converted};

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
