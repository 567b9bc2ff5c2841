//! Continue stores servers as a YAML list of named records under a small
//! block of document scaffolding.

use super::fields::{read_string, read_string_map, EntryBuilder};
use super::keyed::read_command;
use super::traits::FormatAdapter;
use crate::format::FormatId;
use crate::model::{Transport, UniversalConfig, UniversalServer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

const DOCUMENT_NAME: &str = "MCP Config";
const DOCUMENT_VERSION: &str = "0.0.1";
const DOCUMENT_SCHEMA: &str = "v1";

#[derive(Debug, Clone, Copy, Default)]
pub struct ContinueDevAdapter;

impl ContinueDevAdapter {
    fn parse_entry(&self, index: usize, entry: &Map<String, Value>) -> Option<UniversalServer> {
        let Some(name) = read_string(entry, "name") else {
            warn!(index, "Skipping Continue server without a name");
            return None;
        };

        let (command, args) = read_command(&name, entry, "command");
        let url = read_string(entry, "url");
        let explicit = read_string(entry, "type").and_then(|t| Transport::from_tag(&t));

        Some(UniversalServer {
            transport: Transport::infer(explicit, url.is_some()),
            command,
            args,
            env: read_string_map(&name, entry, "env").filter(|e| !e.is_empty()),
            url,
            ..UniversalServer::new(name)
        })
    }

    fn convert_entry(&self, server: &UniversalServer) -> Value {
        let tag = match server.transport {
            Transport::Stdio => "stdio",
            Transport::Sse => "sse",
            Transport::Http => "streamable-http",
        };
        EntryBuilder::new()
            .value("name", server.name.as_str())
            .value("type", tag)
            .string("command", server.command.as_deref())
            .list("args", server.args.as_deref())
            .map("env", server.env.as_ref())
            .string("url", server.url.as_deref())
            .build()
    }
}

impl FormatAdapter for ContinueDevAdapter {
    fn id(&self) -> FormatId {
        FormatId::ContinueDev
    }

    fn parse(&self, document: &Value) -> UniversalConfig {
        let mut config = UniversalConfig::default();
        let Some(entries) = document.get("mcpServers").and_then(Value::as_array) else {
            debug!("No Continue server list");
            return config;
        };

        for (index, entry) in entries.iter().enumerate() {
            match entry.as_object() {
                Some(entry) => {
                    if let Some(server) = self.parse_entry(index, entry) {
                        config.push(server);
                    }
                }
                None => warn!(index, actual = ?entry, "Skipping Continue server that is not a mapping"),
            }
        }
        debug!(format = %FormatId::ContinueDev, servers = config.len(), "Parsed servers");
        config
    }

    fn convert(&self, config: &UniversalConfig) -> Value {
        let servers = config
            .servers
            .iter()
            .map(|server| self.convert_entry(server))
            .collect();

        EntryBuilder::new()
            .value("name", DOCUMENT_NAME)
            .value("version", DOCUMENT_VERSION)
            .value("schema", DOCUMENT_SCHEMA)
            .value("mcpServers", Value::Array(servers))
            .build()
    }
}
