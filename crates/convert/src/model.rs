//! Canonical, format-agnostic representation of MCP server declarations.
//!
//! Every conversion builds a fresh [`UniversalConfig`] from the source
//! document and hands it to the target adapter; nothing here is shared or
//! mutated across conversions.

use crate::format::FormatId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// String-to-string mapping used for environment variables and headers.
///
/// Keeps source order for output; equality ignores order.
pub type StringMap = IndexMap<String, String>;

/// How a client connects to an MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Local child process speaking over stdin/stdout.
    #[default]
    Stdio,
    /// Remote endpoint over (streamable) HTTP.
    Http,
    /// Remote endpoint over server-sent events.
    Sse,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stdio => "stdio",
            Self::Http => "http",
            Self::Sse => "sse",
        }
    }

    /// Maps an explicit type tag from any supported format.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "stdio" | "local" => Some(Self::Stdio),
            "http" | "streamable-http" | "streamable_http" | "streamablehttp" | "remote" => {
                Some(Self::Http)
            }
            "sse" => Some(Self::Sse),
            _ => None,
        }
    }

    /// Explicit tag wins; otherwise a populated URL means HTTP.
    pub fn infer(tag: Option<Self>, has_url: bool) -> Self {
        match tag {
            Some(t) => t,
            None if has_url => Self::Http,
            None => Self::Stdio,
        }
    }

    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Stdio)
    }
}

/// Vendor-specific fields carried verbatim for same-format round trips.
///
/// Only re-emitted when converting back to `format`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passthrough {
    pub format: FormatId,
    pub fields: Map<String, Value>,
}

impl Passthrough {
    /// Returns `None` when there is nothing to carry.
    pub fn new(format: FormatId, fields: Map<String, Value>) -> Option<Self> {
        if fields.is_empty() {
            None
        } else {
            Some(Self { format, fields })
        }
    }

    /// Fields to re-emit when writing `target`.
    pub fn fields_for(&self, target: FormatId) -> Option<&Map<String, Value>> {
        (self.format == target).then_some(&self.fields)
    }
}

/// One declared MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UniversalServer {
    /// Identifier, unique within a config.
    pub name: String,
    pub transport: Transport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<StringMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<StringMap>,
    /// Connection/startup timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passthrough: Option<Passthrough>,
}

impl UniversalServer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Stdio server launching `command` with `args`.
    pub fn stdio(name: impl Into<String>, command: impl Into<String>, args: &[&str]) -> Self {
        Self {
            command: Some(command.into()),
            args: Some(args.iter().map(|a| a.to_string()).collect()),
            ..Self::new(name)
        }
    }

    /// Remote server reached at `url`.
    pub fn remote(name: impl Into<String>, transport: Transport, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: Some(url.into()),
            ..Self::new(name)
        }
    }

    /// Remote if the transport says so or a URL is set.
    pub fn is_remote(&self) -> bool {
        self.transport.is_remote() || self.url.is_some()
    }

    pub fn passthrough_for(&self, target: FormatId) -> Option<&Map<String, Value>> {
        self.passthrough.as_ref().and_then(|p| p.fields_for(target))
    }
}

/// Ordered collection of servers plus document-level vendor extras.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UniversalConfig {
    pub servers: Vec<UniversalServer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passthrough: Option<Passthrough>,
}

impl UniversalConfig {
    pub fn new(servers: Vec<UniversalServer>) -> Self {
        let mut config = Self::default();
        for server in servers {
            config.push(server);
        }
        config
    }

    /// Adds a server, replacing any earlier server with the same name.
    pub fn push(&mut self, server: UniversalServer) {
        if let Some(existing) = self.servers.iter_mut().find(|s| s.name == server.name) {
            debug!(server = %server.name, "Duplicate server name, keeping the later entry");
            *existing = server;
        } else {
            self.servers.push(server);
        }
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.servers.iter().map(|s| s.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&UniversalServer> {
        self.servers.iter().find(|s| s.name == name)
    }

    pub fn passthrough_for(&self, target: FormatId) -> Option<&Map<String, Value>> {
        self.passthrough.as_ref().and_then(|p| p.fields_for(target))
    }
}

/// Seconds (possibly fractional) to whole milliseconds, rounding half up.
pub fn seconds_to_millis(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    (seconds * 1000.0).round() as u64
}

/// Milliseconds to whole seconds, rounding half up (12500 ms -> 13 s).
pub fn millis_to_seconds(millis: u64) -> u64 {
    millis.saturating_add(500) / 1000
}
