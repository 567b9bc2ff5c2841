//! Field layouts for every keyed format.

use super::fields::TimeUnit;
use super::keyed::{CommandShape, KeyedAdapter, TypeTag};
use crate::format::FormatId;

const STANDARD: KeyedAdapter = KeyedAdapter::STANDARD;

pub static CLAUDE_DESKTOP: KeyedAdapter = STANDARD;

pub static WINDSURF: KeyedAdapter = KeyedAdapter {
    id: FormatId::Windsurf,
    ..STANDARD
};

pub static LM_STUDIO: KeyedAdapter = KeyedAdapter {
    id: FormatId::LmStudio,
    ..STANDARD
};

pub static JUNIE: KeyedAdapter = KeyedAdapter {
    id: FormatId::Junie,
    ..STANDARD
};

pub static SOURCEGRAPH_CODY: KeyedAdapter = KeyedAdapter {
    id: FormatId::SourcegraphCody,
    ..STANDARD
};

pub static CURSOR: KeyedAdapter = KeyedAdapter {
    id: FormatId::Cursor,
    passthrough: &["disabled", "autoApprove"],
    ..STANDARD
};

pub static CLINE: KeyedAdapter = KeyedAdapter {
    id: FormatId::Cline,
    passthrough: &["disabled", "alwaysAllow", "autoApprove"],
    ..STANDARD
};

pub static ROO_CODE: KeyedAdapter = KeyedAdapter {
    id: FormatId::RooCode,
    keeps_cwd: true,
    passthrough: &["disabled", "alwaysAllow"],
    ..STANDARD
};

pub static ANTIGRAVITY: KeyedAdapter = KeyedAdapter {
    id: FormatId::Antigravity,
    url_keys: &["serverUrl"],
    url_out: "serverUrl",
    ..STANDARD
};

pub static GEMINI_CLI: KeyedAdapter = KeyedAdapter {
    id: FormatId::GeminiCli,
    url_keys: &["url", "httpUrl"],
    keeps_cwd: true,
    timeout: Some(("timeout", TimeUnit::Millis)),
    passthrough: &["trust", "includeTools", "excludeTools"],
    ..STANDARD
};

pub static CLAUDE_CODE: KeyedAdapter = KeyedAdapter {
    id: FormatId::ClaudeCode,
    type_tag: TypeTag::Always,
    root_passthrough: &["deniedMcpServers"],
    allow_list: Some("allowedMcpServers"),
    ..STANDARD
};

const SERVERS: KeyedAdapter = KeyedAdapter {
    container: "servers",
    keeps_cwd: true,
    type_tag: TypeTag::RemoteOnly,
    passthrough: &["envFile"],
    root_passthrough: &["inputs"],
    ..STANDARD
};

pub static VSCODE: KeyedAdapter = KeyedAdapter {
    id: FormatId::Vscode,
    ..SERVERS
};

pub static COPILOT_CLI: KeyedAdapter = KeyedAdapter {
    id: FormatId::CopilotCli,
    ..SERVERS
};

pub static OPENCODE: KeyedAdapter = KeyedAdapter {
    id: FormatId::OpenCode,
    container: "mcp",
    command_shape: CommandShape::Array,
    env_keys: &["env", "environment"],
    env_out: "environment",
    keeps_cwd: true,
    type_tag: TypeTag::LocalRemote,
    emits_enabled: true,
    passthrough: &["enabled"],
    ..STANDARD
};

pub static AMPCODE: KeyedAdapter = KeyedAdapter {
    id: FormatId::AmpCode,
    container: "amp.mcpServers",
    type_tag: TypeTag::LocalRemote,
    emits_enabled: true,
    passthrough: &["enabled"],
    ..STANDARD
};

pub static ZED: KeyedAdapter = KeyedAdapter {
    id: FormatId::Zed,
    container: "context_servers",
    ..STANDARD
};

pub static CODEX_CLI: KeyedAdapter = KeyedAdapter {
    id: FormatId::CodexCli,
    container: "mcp_servers",
    headers_key: "http_headers",
    keeps_cwd: true,
    timeout: Some(("startup_timeout_sec", TimeUnit::Seconds)),
    passthrough: &["enabled", "tool_timeout_sec", "bearer_token_env_var"],
    ..STANDARD
};

pub static GOOSE: KeyedAdapter = KeyedAdapter {
    id: FormatId::Goose,
    container: "extensions",
    command_key: "cmd",
    env_keys: &["envs"],
    env_out: "envs",
    timeout: Some(("timeout", TimeUnit::Seconds)),
    type_tag: TypeTag::Streamable,
    emits_enabled: true,
    passthrough: &["enabled", "env_keys", "name", "display_name", "description"],
    ..STANDARD
};

pub static LIBRECHAT: KeyedAdapter = KeyedAdapter {
    id: FormatId::LibreChat,
    timeout: Some(("timeout", TimeUnit::Millis)),
    type_tag: TypeTag::Streamable,
    passthrough: &["description"],
    ..STANDARD
};
