//! Catalog of supported editor formats and their raw text encodings.

use crate::error::ConvertError;
use crate::flexible::parse_json_flexible;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

/// Raw text encoding used by an editor's configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawFormat {
    Json,
    Yaml,
    Toml,
}

impl RawFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    /// Picks the encoding from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    /// Decodes `text` into a JSON value tree.
    ///
    /// JSON goes through the recovery parser; YAML and TOML are strict and
    /// report which editor's file was expected.
    pub fn deserialize(&self, text: &str, editor: FormatId) -> Result<Value> {
        match self {
            Self::Json => parse_json_flexible(text),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| ConvertError::InvalidYaml {
                editor: editor.display_name(),
                message: e.to_string(),
            }),
            Self::Toml => toml::from_str(text).map_err(|e| ConvertError::InvalidToml {
                editor: editor.display_name(),
                message: e.message().to_string(),
            }),
        }
    }

    /// Encodes a value tree using this format's conventional layout.
    pub fn serialize(&self, value: &Value) -> Result<String> {
        let encoded = match self {
            Self::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
            Self::Toml => toml::to_string(value).map_err(|e| e.to_string()),
        };
        encoded.map_err(|message| ConvertError::Encode {
            format: *self,
            message,
        })
    }
}

impl fmt::Display for RawFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a supported editor or agent configuration schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatId {
    ClaudeDesktop,
    Vscode,
    Cursor,
    #[serde(rename = "opencode")]
    OpenCode,
    GeminiCli,
    #[serde(rename = "lmstudio")]
    LmStudio,
    Antigravity,
    Junie,
    RooCode,
    CopilotCli,
    ContinueDev,
    CodexCli,
    Cline,
    Windsurf,
    ClaudeCode,
    #[serde(rename = "ampcode")]
    AmpCode,
    Zed,
    SourcegraphCody,
    Goose,
    #[serde(rename = "librechat")]
    LibreChat,
}

impl FormatId {
    /// Every supported format, in catalog order.
    pub const ALL: [FormatId; 20] = [
        Self::ClaudeDesktop,
        Self::Windsurf,
        Self::Cline,
        Self::Vscode,
        Self::Cursor,
        Self::OpenCode,
        Self::GeminiCli,
        Self::LmStudio,
        Self::Antigravity,
        Self::Junie,
        Self::RooCode,
        Self::CopilotCli,
        Self::ContinueDev,
        Self::CodexCli,
        Self::ClaudeCode,
        Self::AmpCode,
        Self::Zed,
        Self::SourcegraphCody,
        Self::Goose,
        Self::LibreChat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClaudeDesktop => "claude-desktop",
            Self::Vscode => "vscode",
            Self::Cursor => "cursor",
            Self::OpenCode => "opencode",
            Self::GeminiCli => "gemini-cli",
            Self::LmStudio => "lmstudio",
            Self::Antigravity => "antigravity",
            Self::Junie => "junie",
            Self::RooCode => "roo-code",
            Self::CopilotCli => "copilot-cli",
            Self::ContinueDev => "continue-dev",
            Self::CodexCli => "codex-cli",
            Self::Cline => "cline",
            Self::Windsurf => "windsurf",
            Self::ClaudeCode => "claude-code",
            Self::AmpCode => "ampcode",
            Self::Zed => "zed",
            Self::SourcegraphCody => "sourcegraph-cody",
            Self::Goose => "goose",
            Self::LibreChat => "librechat",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ClaudeDesktop => "Claude Desktop",
            Self::Vscode => "VS Code",
            Self::Cursor => "Cursor",
            Self::OpenCode => "OpenCode",
            Self::GeminiCli => "Gemini CLI",
            Self::LmStudio => "LM Studio",
            Self::Antigravity => "Antigravity",
            Self::Junie => "JetBrains Junie / AI Assistant",
            Self::RooCode => "Roo Code",
            Self::CopilotCli => "GitHub Copilot CLI",
            Self::ContinueDev => "Continue",
            Self::CodexCli => "Codex CLI",
            Self::Cline => "Cline",
            Self::Windsurf => "Windsurf",
            Self::ClaudeCode => "Claude Code",
            Self::AmpCode => "AmpCode",
            Self::Zed => "Zed",
            Self::SourcegraphCody => "Sourcegraph Cody",
            Self::Goose => "Goose",
            Self::LibreChat => "LibreChat",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ClaudeDesktop => "Anthropic Claude desktop app",
            Self::Vscode => "VS Code with GitHub Copilot MCP support",
            Self::Cursor => "AI-first code editor",
            Self::OpenCode => "Terminal AI coding agent",
            Self::GeminiCli => "Google Gemini command-line tool",
            Self::LmStudio => "Local LLM runner",
            Self::Antigravity => "AI development tool",
            Self::Junie => "JetBrains IDE AI assistant",
            Self::RooCode => "AI coding assistant extension for VS Code",
            Self::CopilotCli => "GitHub Copilot command-line tool",
            Self::ContinueDev => "AI code assistant (YAML)",
            Self::CodexCli => "OpenAI Codex CLI (TOML)",
            Self::Cline => "Autonomous coding agent",
            Self::Windsurf => "Codeium Windsurf editor",
            Self::ClaudeCode => "Anthropic Claude CLI agent",
            Self::AmpCode => "Sourcegraph AI coding agent",
            Self::Zed => "High-performance code editor",
            Self::SourcegraphCody => "AI coding assistant by Sourcegraph",
            Self::Goose => "Open-source AI agent (YAML)",
            Self::LibreChat => "Self-hosted AI chat interface (YAML)",
        }
    }

    /// Conventional configuration file name (or project-relative path).
    pub fn config_file_name(&self) -> &'static str {
        match self {
            Self::ClaudeDesktop => "claude_desktop_config.json",
            Self::Vscode => ".vscode/mcp.json",
            Self::Cursor => ".cursor/mcp.json",
            Self::OpenCode => "opencode.json",
            Self::GeminiCli => "settings.json",
            Self::LmStudio => "mcp.json",
            Self::Antigravity => "mcp_config.json",
            Self::Junie => ".junie/mcp/mcp.json",
            Self::RooCode => ".roo/mcp.json",
            Self::CopilotCli => "mcp-config.json",
            Self::ContinueDev => ".continue/config.yaml",
            Self::CodexCli => "~/.codex/config.toml",
            Self::Cline => "cline_mcp_settings.json",
            Self::Windsurf => "mcp_config.json",
            Self::ClaudeCode => ".claude.json",
            Self::AmpCode => ".amp/settings.json",
            Self::Zed => "settings.json",
            Self::SourcegraphCody => "mcp_servers.json",
            Self::Goose => "config.yaml",
            Self::LibreChat => "librechat.yaml",
        }
    }

    pub fn docs_url(&self) -> &'static str {
        match self {
            Self::ClaudeDesktop => "https://modelcontextprotocol.io/quickstart/user",
            Self::Vscode => "https://code.visualstudio.com/docs/copilot/chat/mcp-servers",
            Self::Cursor => "https://docs.cursor.com/context/model-context-protocol",
            Self::OpenCode => "https://opencode.ai/docs/mcp",
            Self::GeminiCli => "https://github.com/google-gemini/gemini-cli",
            Self::LmStudio => "https://lmstudio.ai/docs/mcp",
            Self::Antigravity => "https://antigravity.dev",
            Self::Junie => "https://www.jetbrains.com/help/idea/ai-assistant.html",
            Self::RooCode => "https://docs.roocode.com/features/mcp/using-mcp-in-roo",
            Self::CopilotCli => "https://github.com/github/copilot-cli",
            Self::ContinueDev => "https://docs.continue.dev/customize/deep-dives/mcp",
            Self::CodexCli => "https://openai.com/codex",
            Self::Cline => "https://github.com/cline/cline",
            Self::Windsurf => "https://docs.codeium.com/",
            Self::ClaudeCode => "https://code.claude.com/docs/mcp",
            Self::AmpCode => "https://ampcode.com",
            Self::Zed => "https://zed.dev/docs/assistant/model-context-protocol",
            Self::SourcegraphCody => "https://sourcegraph.com/docs/cody/clients/mcp",
            Self::Goose => "https://block.github.io/goose/docs/getting-started/using-extensions",
            Self::LibreChat => "https://www.librechat.ai/docs/configuration/mcp_servers",
        }
    }

    /// Raw encoding of this format's configuration file.
    pub fn raw_format(&self) -> RawFormat {
        match self {
            Self::ContinueDev | Self::Goose | Self::LibreChat => RawFormat::Yaml,
            Self::CodexCli => RawFormat::Toml,
            _ => RawFormat::Json,
        }
    }

    /// Key under which servers live when the format shares its file with
    /// other settings. Callers writing such files merge the converted
    /// fragment into the existing document instead of replacing it.
    pub fn settings_key(&self) -> Option<&'static str> {
        match self {
            Self::GeminiCli | Self::ContinueDev | Self::LibreChat => Some("mcpServers"),
            Self::CodexCli => Some("mcp_servers"),
            Self::Zed => Some("context_servers"),
            Self::AmpCode => Some("amp.mcpServers"),
            Self::Goose => Some("extensions"),
            _ => None,
        }
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatId {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Some(id) = Self::ALL.iter().find(|id| id.as_str() == normalized) {
            return Ok(*id);
        }
        // Spellings people commonly type for the same editors
        let alias = match normalized.as_str() {
            "claude" => Self::ClaudeDesktop,
            "vs-code" | "code" => Self::Vscode,
            "gemini" => Self::GeminiCli,
            "lm-studio" => Self::LmStudio,
            "roo" | "roocode" => Self::RooCode,
            "copilot" => Self::CopilotCli,
            "continue" => Self::ContinueDev,
            "codex" => Self::CodexCli,
            "amp" => Self::AmpCode,
            "cody" => Self::SourcegraphCody,
            "open-code" => Self::OpenCode,
            "libre-chat" => Self::LibreChat,
            _ => return Err(ConvertError::UnknownFormat(s.to_string())),
        };
        Ok(alias)
    }
}

/// Parses a list of target format ids.
///
/// Each entry may hold several comma-separated ids. Unknown ids are logged
/// and skipped. Returns `None` when the list is empty, is exactly `all`, or
/// contains no recognized id, meaning "every format".
pub fn parse_format_list(targets: &[String]) -> Option<Vec<FormatId>> {
    if targets.is_empty() {
        return None;
    }
    if targets.len() == 1 && targets[0].trim().eq_ignore_ascii_case("all") {
        return None;
    }

    let mut ids = Vec::new();
    for part in targets.iter().flat_map(|t| t.split(',')) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.parse::<FormatId>() {
            Ok(id) if !ids.contains(&id) => ids.push(id),
            Ok(_) => {}
            Err(_) => warn!(format = %part, "Ignoring unknown format id"),
        }
    }

    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for id in FormatId::ALL {
            assert_eq!(id.as_str().parse::<FormatId>().unwrap(), id);
        }
    }

    #[test]
    fn serde_names_match_ids() {
        for id in FormatId::ALL {
            let encoded = serde_json::to_value(id).unwrap();
            assert_eq!(encoded, Value::String(id.as_str().to_string()));
        }
    }

    #[test]
    fn aliases_and_case_are_accepted() {
        assert_eq!("Codex".parse::<FormatId>().unwrap(), FormatId::CodexCli);
        assert_eq!(" VSCODE ".parse::<FormatId>().unwrap(), FormatId::Vscode);
        assert!("notepad".parse::<FormatId>().is_err());
    }

    #[test]
    fn raw_formats_follow_file_conventions() {
        assert_eq!(FormatId::ContinueDev.raw_format(), RawFormat::Yaml);
        assert_eq!(FormatId::Goose.raw_format(), RawFormat::Yaml);
        assert_eq!(FormatId::LibreChat.raw_format(), RawFormat::Yaml);
        assert_eq!(FormatId::CodexCli.raw_format(), RawFormat::Toml);
        assert_eq!(FormatId::Cursor.raw_format(), RawFormat::Json);
    }

    #[test]
    fn raw_format_from_extension() {
        assert_eq!(RawFormat::from_path(Path::new("a/config.YML")), RawFormat::Yaml);
        assert_eq!(RawFormat::from_path(Path::new("config.toml")), RawFormat::Toml);
        assert_eq!(RawFormat::from_path(Path::new("mcp.json")), RawFormat::Json);
        assert_eq!(RawFormat::from_path(Path::new("README")), RawFormat::Json);
    }

    #[test]
    fn format_list_handles_all_and_commas() {
        assert_eq!(parse_format_list(&[]), None);
        assert_eq!(parse_format_list(&["all".to_string()]), None);
        assert_eq!(
            parse_format_list(&["cursor, zed".to_string(), "goose".to_string()]),
            Some(vec![FormatId::Cursor, FormatId::Zed, FormatId::Goose])
        );
    }

    #[test]
    fn format_list_skips_unknown_and_duplicates() {
        assert_eq!(
            parse_format_list(&["cursor,bogus,cursor".to_string()]),
            Some(vec![FormatId::Cursor])
        );
        assert_eq!(parse_format_list(&["bogus".to_string()]), None);
    }

    #[test]
    fn yaml_errors_name_the_editor() {
        let err = RawFormat::Yaml
            .deserialize("mcpServers: [unclosed", FormatId::ContinueDev)
            .unwrap_err();
        assert!(err.to_string().contains("YAML"));
        assert!(err.to_string().contains("Continue"));
    }

    #[test]
    fn toml_errors_name_the_editor() {
        let err = RawFormat::Toml
            .deserialize("[mcp_servers.x\ncommand = ", FormatId::CodexCli)
            .unwrap_err();
        assert!(err.to_string().contains("TOML"));
        assert!(err.to_string().contains("Codex CLI"));
    }

    #[test]
    fn json_output_uses_two_space_indent() {
        let out = RawFormat::Json
            .serialize(&serde_json::json!({"a": {"b": 1}}))
            .unwrap();
        assert_eq!(out, "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
    }
}
