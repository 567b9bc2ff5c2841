//! Table-driven adapter for formats that key servers by name inside one
//! container object.
//!
//! Almost every supported editor stores servers this way and differs only in
//! field names, type tags, and a few scaffolding fields. Each format is a
//! [`KeyedAdapter`] value describing those differences.

use super::fields::{
    collect_passthrough, read_first_map, read_first_string, read_string, read_string_list,
    read_string_map, read_timeout, EntryBuilder, TimeUnit,
};
use super::traits::FormatAdapter;
use crate::format::FormatId;
use crate::model::{Passthrough, Transport, UniversalConfig, UniversalServer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// How a format spells the transport type, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// No `type` field is written.
    Omitted,
    /// `stdio|http|sse`, written only for remote servers.
    RemoteOnly,
    /// `stdio|http|sse`, always written.
    Always,
    /// `local|remote`, always written. Local entries carry only process
    /// fields, remote entries only endpoint fields.
    LocalRemote,
    /// `stdio|sse|streamable-http`, always written.
    Streamable,
}

impl TypeTag {
    fn emit(&self, server: &UniversalServer) -> Option<&'static str> {
        match self {
            Self::Omitted => None,
            Self::RemoteOnly => server
                .transport
                .is_remote()
                .then(|| server.transport.as_str()),
            Self::Always => Some(server.transport.as_str()),
            Self::LocalRemote => Some(if server.is_remote() { "remote" } else { "local" }),
            Self::Streamable => Some(match server.transport {
                Transport::Stdio => "stdio",
                Transport::Http => "streamable-http",
                Transport::Sse => "sse",
            }),
        }
    }
}

/// How the launch command is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandShape {
    /// `command: "npx"` plus `args: [...]`.
    Split,
    /// `command: ["npx", ...args]`.
    Array,
}

/// Field layout of one keyed format.
#[derive(Debug, Clone, Copy)]
pub struct KeyedAdapter {
    pub id: FormatId,
    /// Root key holding the name-keyed server object.
    pub container: &'static str,
    pub command_key: &'static str,
    pub command_shape: CommandShape,
    /// Environment keys accepted on parse, in preference order.
    pub env_keys: &'static [&'static str],
    /// Environment key written on convert.
    pub env_out: &'static str,
    /// URL keys accepted on parse, in preference order.
    pub url_keys: &'static [&'static str],
    /// URL key written on convert.
    pub url_out: &'static str,
    pub headers_key: &'static str,
    pub keeps_cwd: bool,
    pub timeout: Option<(&'static str, TimeUnit)>,
    pub type_tag: TypeTag,
    /// Writes `enabled: true` on every entry.
    pub emits_enabled: bool,
    /// Per-server vendor fields carried for same-format round trips.
    pub passthrough: &'static [&'static str],
    /// Root-level vendor fields carried for same-format round trips.
    pub root_passthrough: &'static [&'static str],
    /// Root key listing every server name, regenerated on convert.
    pub allow_list: Option<&'static str>,
}

impl KeyedAdapter {
    /// The plain `mcpServers` layout most editors share.
    pub const STANDARD: Self = Self {
        id: FormatId::ClaudeDesktop,
        container: "mcpServers",
        command_key: "command",
        command_shape: CommandShape::Split,
        env_keys: &["env"],
        env_out: "env",
        url_keys: &["url"],
        url_out: "url",
        headers_key: "headers",
        keeps_cwd: false,
        timeout: None,
        type_tag: TypeTag::Omitted,
        emits_enabled: false,
        passthrough: &[],
        root_passthrough: &[],
        allow_list: None,
    };

    fn parse_entry(&self, name: &str, entry: &Map<String, Value>) -> UniversalServer {
        let (command, args) = read_command(name, entry, self.command_key);

        let raw_tag = read_string(entry, "type");
        let explicit = raw_tag.as_deref().and_then(Transport::from_tag);
        let url = read_first_string(entry, self.url_keys);
        let transport = Transport::infer(explicit, url.is_some());

        let mut passthrough = collect_passthrough(self.id, entry, self.passthrough);
        if let (Some(tag), None) = (raw_tag, explicit) {
            // Unrecognized tags (e.g. LibreChat's `websocket`) survive a
            // same-format round trip.
            debug!(server = %name, tag = %tag, "Unrecognized transport type tag");
            passthrough
                .get_or_insert_with(|| Passthrough {
                    format: self.id,
                    fields: Map::new(),
                })
                .fields
                .insert("type".into(), Value::String(tag));
        }

        UniversalServer {
            name: name.to_string(),
            transport,
            command,
            args,
            env: read_first_map(name, entry, self.env_keys),
            cwd: if self.keeps_cwd {
                read_string(entry, "cwd")
            } else {
                None
            },
            url,
            headers: read_string_map(name, entry, self.headers_key).filter(|h| !h.is_empty()),
            timeout: self
                .timeout
                .and_then(|(key, unit)| read_timeout(entry, key, unit)),
            passthrough,
        }
    }

    fn convert_entry(&self, server: &UniversalServer) -> Value {
        let mut builder = EntryBuilder::new();
        if let Some(tag) = self.type_tag.emit(server) {
            builder = builder.value("type", tag);
        }

        let remote = server.is_remote();
        let (process_fields, endpoint_fields) = match self.type_tag {
            TypeTag::LocalRemote => (!remote, remote),
            _ => (true, true),
        };

        if process_fields {
            builder = match self.command_shape {
                CommandShape::Split => builder
                    .string(self.command_key, server.command.as_deref())
                    .list("args", server.args.as_deref()),
                CommandShape::Array => {
                    builder.list(self.command_key, command_array(server).as_deref())
                }
            };
            builder = builder.map(self.env_out, server.env.as_ref());
            if self.keeps_cwd {
                builder = builder.string("cwd", server.cwd.as_deref());
            }
        }

        if endpoint_fields {
            builder = builder
                .string(self.url_out, server.url.as_deref())
                .map(self.headers_key, server.headers.as_ref());
        }

        if let Some((key, unit)) = self.timeout {
            builder = builder.timeout(key, server.timeout, unit);
        }
        if self.emits_enabled {
            builder = builder.value("enabled", true);
        }

        builder.passthrough(server, self.id).build()
    }
}

impl FormatAdapter for KeyedAdapter {
    fn id(&self) -> FormatId {
        self.id
    }

    fn parse(&self, document: &Value) -> UniversalConfig {
        let mut config = UniversalConfig::default();
        let Some(root) = document.as_object() else {
            debug!(format = %self.id, "Document is not an object");
            return config;
        };

        match root.get(self.container) {
            Some(Value::Object(servers)) => {
                for (name, entry) in servers {
                    if name.is_empty() {
                        warn!(format = %self.id, "Skipping server with empty name");
                        continue;
                    }
                    match entry.as_object() {
                        Some(entry) => config.push(self.parse_entry(name, entry)),
                        None => warn!(
                            format = %self.id,
                            server = %name,
                            actual = ?entry,
                            "Skipping server entry that is not an object"
                        ),
                    }
                }
            }
            Some(other) => warn!(
                format = %self.id,
                container = self.container,
                actual = ?other,
                "Server container is not an object"
            ),
            None => debug!(format = %self.id, container = self.container, "No server container"),
        }

        config.passthrough = collect_passthrough(self.id, root, self.root_passthrough);
        debug!(format = %self.id, servers = config.len(), "Parsed servers");
        config
    }

    fn convert(&self, config: &UniversalConfig) -> Value {
        let servers: Map<String, Value> = config
            .servers
            .iter()
            .map(|server| (server.name.clone(), self.convert_entry(server)))
            .collect();

        let mut root = Map::new();
        root.insert(self.container.to_string(), Value::Object(servers));
        if let Some(key) = self.allow_list {
            root.insert(
                key.to_string(),
                Value::Array(config.names().map(Value::from).collect()),
            );
        }
        if let Some(extra) = config.passthrough_for(self.id) {
            for (k, v) in extra {
                root.insert(k.clone(), v.clone());
            }
        }
        Value::Object(root)
    }
}

/// Reads a command given either as a string (with a separate `args` list)
/// or as an array whose first element is the executable.
pub(crate) fn read_command(
    name: &str,
    entry: &Map<String, Value>,
    key: &str,
) -> (Option<String>, Option<Vec<String>>) {
    let mut args = read_string_list(name, entry, "args").unwrap_or_default();
    let command = match entry.get(key) {
        Some(Value::Array(_)) => {
            let mut parts = read_string_list(name, entry, key).unwrap_or_default();
            if parts.is_empty() {
                None
            } else {
                let command = parts.remove(0);
                parts.append(&mut args);
                args = parts;
                Some(command).filter(|c| !c.is_empty())
            }
        }
        _ => read_string(entry, key),
    };
    let args = (!args.is_empty()).then_some(args);
    (command, args)
}

fn command_array(server: &UniversalServer) -> Option<Vec<String>> {
    let command = server.command.as_ref()?;
    let mut parts = vec![command.clone()];
    parts.extend(server.args.iter().flatten().cloned());
    Some(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TAGGED: KeyedAdapter = KeyedAdapter {
        id: FormatId::LibreChat,
        type_tag: TypeTag::Streamable,
        ..KeyedAdapter::STANDARD
    };

    #[test]
    fn command_array_splits_into_command_and_args() {
        let entry = json!({"command": ["uvx", "perplexica-mcp", "stdio"]});
        let (command, args) = read_command("s", entry.as_object().unwrap(), "command");
        assert_eq!(command.as_deref(), Some("uvx"));
        assert_eq!(args.unwrap(), vec!["perplexica-mcp", "stdio"]);
    }

    #[test]
    fn lone_command_array_has_no_args() {
        let entry = json!({"command": ["node"]});
        let (command, args) = read_command("s", entry.as_object().unwrap(), "command");
        assert_eq!(command.as_deref(), Some("node"));
        assert!(args.is_none());
    }

    #[test]
    fn string_command_keeps_separate_args() {
        let entry = json!({"command": "node", "args": ["server.js"]});
        let (command, args) = read_command("s", entry.as_object().unwrap(), "command");
        assert_eq!(command.as_deref(), Some("node"));
        assert_eq!(args.unwrap(), vec!["server.js"]);
    }

    #[test]
    fn transport_is_inferred_from_url() {
        let doc = json!({"mcpServers": {
            "remote": {"url": "http://localhost:3000"},
            "local": {"command": "npx"},
            "tagged": {"type": "sse", "url": "http://localhost:3001"}
        }});
        let config = KeyedAdapter::STANDARD.parse(&doc);
        assert_eq!(config.get("remote").unwrap().transport, Transport::Http);
        assert_eq!(config.get("local").unwrap().transport, Transport::Stdio);
        assert_eq!(config.get("tagged").unwrap().transport, Transport::Sse);
    }

    #[test]
    fn partial_and_malformed_entries_degrade_gracefully() {
        let doc = json!({"mcpServers": {
            "bare": {},
            "broken": "npx -y pkg",
            "": {"command": "x"}
        }});
        let config = KeyedAdapter::STANDARD.parse(&doc);
        assert_eq!(config.len(), 1);
        let bare = config.get("bare").unwrap();
        assert_eq!(bare.transport, Transport::Stdio);
        assert!(bare.command.is_none() && bare.url.is_none());
    }

    #[test]
    fn missing_or_wrong_container_yields_no_servers() {
        assert!(KeyedAdapter::STANDARD.parse(&json!({})).is_empty());
        assert!(KeyedAdapter::STANDARD
            .parse(&json!({"mcpServers": ["a"]}))
            .is_empty());
        assert!(KeyedAdapter::STANDARD.parse(&json!("text")).is_empty());
    }

    #[test]
    fn unknown_type_tags_round_trip_within_format() {
        let doc = json!({"mcpServers": {"ws": {"type": "websocket", "url": "ws://localhost:8080"}}});
        let config = TAGGED.parse(&doc);
        assert_eq!(config.servers[0].transport, Transport::Http);
        assert_eq!(TAGGED.convert(&config), doc);

        // Another format gets the canonical transport instead.
        let standard = KeyedAdapter {
            type_tag: TypeTag::Always,
            ..KeyedAdapter::STANDARD
        };
        assert_eq!(
            standard.convert(&config),
            json!({"mcpServers": {"ws": {"type": "http", "url": "ws://localhost:8080"}}})
        );
    }

    #[test]
    fn streamable_tag_is_written_for_http() {
        let config = UniversalConfig::new(vec![UniversalServer::remote(
            "api",
            Transport::Http,
            "http://api",
        )]);
        assert_eq!(
            TAGGED.convert(&config),
            json!({"mcpServers": {"api": {"type": "streamable-http", "url": "http://api"}}})
        );
    }
}
