//! Format detection from document shape, file path, or raw text.

use crate::flexible::parse_json_flexible;
use crate::format::FormatId;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Keys only Gemini CLI puts on a server entry.
const GEMINI_MARKERS: [&str; 5] = ["httpUrl", "timeout", "trust", "includeTools", "excludeTools"];

fn has_object(root: &Map<String, Value>, key: &str) -> bool {
    matches!(root.get(key), Some(Value::Object(_)))
}

/// Guesses the format of a decoded document from its shape.
///
/// Rules are checked in a fixed order and the first match wins. For plain
/// `mcpServers` documents only the first entry is inspected.
pub fn detect_format(document: &Value) -> Option<FormatId> {
    let root = document.as_object()?;

    if root.contains_key("allowedMcpServers") || root.contains_key("deniedMcpServers") {
        return Some(FormatId::ClaudeCode);
    }
    if has_object(root, "mcp_servers") {
        return Some(FormatId::CodexCli);
    }
    if has_object(root, "servers") {
        return Some(FormatId::Vscode);
    }
    if has_object(root, "amp.mcpServers") {
        return Some(FormatId::AmpCode);
    }
    if has_object(root, "context_servers") {
        return Some(FormatId::Zed);
    }
    if has_object(root, "extensions") {
        return Some(FormatId::Goose);
    }
    if has_object(root, "mcp") {
        return Some(FormatId::OpenCode);
    }

    match root.get("mcpServers")? {
        Value::Array(_) => Some(FormatId::ContinueDev),
        Value::Object(servers) => Some(classify_first_entry(servers)),
        _ => None,
    }
}

fn classify_first_entry(servers: &Map<String, Value>) -> FormatId {
    let Some(first) = servers.values().next().and_then(Value::as_object) else {
        return FormatId::ClaudeDesktop;
    };

    if GEMINI_MARKERS.iter().any(|key| first.contains_key(*key)) {
        return FormatId::GeminiCli;
    }
    match (
        first.contains_key("alwaysAllow"),
        first.contains_key("autoApprove"),
    ) {
        (true, true) => FormatId::Cline,
        (true, false) => FormatId::RooCode,
        (false, true) => FormatId::Cursor,
        (false, false) => FormatId::ClaudeDesktop,
    }
}

/// Guesses the format from a well-known config file location.
pub fn detect_format_from_path(path: &Path) -> Option<FormatId> {
    let file = path.file_name()?.to_str()?;
    let parent = path
        .parent()
        .and_then(Path::file_name)
        .and_then(|p| p.to_str())
        .unwrap_or("");

    let format = match (parent, file) {
        (_, "claude_desktop_config.json") => FormatId::ClaudeDesktop,
        (_, ".claude.json") => FormatId::ClaudeCode,
        (".cursor", "mcp.json") => FormatId::Cursor,
        (".vscode", "mcp.json") => FormatId::Vscode,
        (".roo", "mcp.json") => FormatId::RooCode,
        (".junie", "mcp.json") | ("mcp", "mcp.json") if path_has_component(path, ".junie") => {
            FormatId::Junie
        }
        (_, "opencode.json") => FormatId::OpenCode,
        (_, "mcp_config.json") => FormatId::Antigravity,
        (_, "mcp-config.json") => FormatId::CopilotCli,
        (_, "cline_mcp_settings.json") => FormatId::Cline,
        (".continue", "config.yaml") => FormatId::ContinueDev,
        (".codex", "config.toml") => FormatId::CodexCli,
        (".gemini", "settings.json") => FormatId::GeminiCli,
        (".zed" | "zed", "settings.json") => FormatId::Zed,
        (".amp" | "amp", "settings.json") => FormatId::AmpCode,
        ("goose", "config.yaml") => FormatId::Goose,
        (_, "librechat.yaml" | "librechat.yml") => FormatId::LibreChat,
        _ => return None,
    };
    Some(format)
}

fn path_has_component(path: &Path, name: &str) -> bool {
    path.components().any(|c| c.as_os_str() == name)
}

/// Decodes raw text as JSON (with recovery), YAML, then TOML and returns
/// the first format the shape detector recognizes.
pub fn detect_format_in_text(text: &str) -> Option<FormatId> {
    if let Some(format) = parse_json_flexible(text)
        .ok()
        .and_then(|doc| detect_format(&doc))
    {
        debug!(format = %format, encoding = "json", "Detected format");
        return Some(format);
    }
    if let Some(format) = serde_yaml::from_str::<Value>(text)
        .ok()
        .and_then(|doc| detect_format(&doc))
    {
        debug!(format = %format, encoding = "yaml", "Detected format");
        return Some(format);
    }
    let format = toml::from_str::<Value>(text)
        .ok()
        .and_then(|doc| detect_format(&doc))?;
    debug!(format = %format, encoding = "toml", "Detected format");
    Some(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn container_keys_identify_formats() {
        let cases = [
            (json!({"allowedMcpServers": [], "mcpServers": {}}), FormatId::ClaudeCode),
            (json!({"deniedMcpServers": []}), FormatId::ClaudeCode),
            (json!({"mcp_servers": {}}), FormatId::CodexCli),
            (json!({"servers": {}}), FormatId::Vscode),
            (json!({"amp.mcpServers": {}}), FormatId::AmpCode),
            (json!({"context_servers": {}}), FormatId::Zed),
            (json!({"extensions": {}}), FormatId::Goose),
            (json!({"mcp": {}}), FormatId::OpenCode),
            (json!({"mcpServers": []}), FormatId::ContinueDev),
            (json!({"mcpServers": {}}), FormatId::ClaudeDesktop),
        ];
        for (doc, expected) in cases {
            assert_eq!(detect_format(&doc), Some(expected), "{doc}");
        }
    }

    #[test]
    fn first_entry_markers_pick_the_vendor() {
        let gemini = json!({"mcpServers": {"a": {"httpUrl": "http://x"}}});
        let cline = json!({"mcpServers": {"a": {"alwaysAllow": [], "autoApprove": []}}});
        let roo = json!({"mcpServers": {"a": {"alwaysAllow": []}}});
        let cursor = json!({"mcpServers": {"a": {"autoApprove": []}}});
        let plain = json!({"mcpServers": {"a": {"command": "npx"}}});

        assert_eq!(detect_format(&gemini), Some(FormatId::GeminiCli));
        assert_eq!(detect_format(&cline), Some(FormatId::Cline));
        assert_eq!(detect_format(&roo), Some(FormatId::RooCode));
        assert_eq!(detect_format(&cursor), Some(FormatId::Cursor));
        assert_eq!(detect_format(&plain), Some(FormatId::ClaudeDesktop));
    }

    #[test]
    fn only_the_first_entry_is_inspected() {
        let doc = json!({"mcpServers": {
            "plain": {"command": "npx"},
            "gemini": {"command": "npx", "trust": true}
        }});
        assert_eq!(detect_format(&doc), Some(FormatId::ClaudeDesktop));
    }

    #[test]
    fn servers_object_beats_mcp_servers_array() {
        let doc = json!({"servers": {}, "mcpServers": []});
        assert_eq!(detect_format(&doc), Some(FormatId::Vscode));
    }

    #[test]
    fn unrecognized_shapes_yield_none() {
        assert_eq!(detect_format(&json!("text")), None);
        assert_eq!(detect_format(&json!([1, 2])), None);
        assert_eq!(detect_format(&json!({"other": 1})), None);
        assert_eq!(detect_format(&json!({"mcpServers": "x"})), None);
        assert_eq!(detect_format(&json!({"servers": []})), None);
    }

    #[test]
    fn well_known_paths() {
        let cases = [
            ("/home/u/Library/claude_desktop_config.json", FormatId::ClaudeDesktop),
            ("proj/.cursor/mcp.json", FormatId::Cursor),
            ("proj/.vscode/mcp.json", FormatId::Vscode),
            ("proj/.roo/mcp.json", FormatId::RooCode),
            ("proj/.junie/mcp/mcp.json", FormatId::Junie),
            ("opencode.json", FormatId::OpenCode),
            ("mcp_config.json", FormatId::Antigravity),
            ("mcp-config.json", FormatId::CopilotCli),
            ("cline_mcp_settings.json", FormatId::Cline),
            ("proj/.continue/config.yaml", FormatId::ContinueDev),
            ("/home/u/.codex/config.toml", FormatId::CodexCli),
            ("/home/u/.gemini/settings.json", FormatId::GeminiCli),
            ("/home/u/.config/zed/settings.json", FormatId::Zed),
            ("/home/u/.config/goose/config.yaml", FormatId::Goose),
            ("librechat.yaml", FormatId::LibreChat),
            ("/home/u/.claude.json", FormatId::ClaudeCode),
        ];
        for (path, expected) in cases {
            assert_eq!(detect_format_from_path(Path::new(path)), Some(expected), "{path}");
        }
    }

    #[test]
    fn ambiguous_paths_are_not_guessed() {
        assert_eq!(detect_format_from_path(Path::new("mcp.json")), None);
        assert_eq!(detect_format_from_path(Path::new("settings.json")), None);
        assert_eq!(detect_format_from_path(Path::new("config.yaml")), None);
    }

    #[test]
    fn text_detection_tries_each_encoding() {
        assert_eq!(
            detect_format_in_text(r#""mcpServers": {"a": {"command": "npx"}}"#),
            Some(FormatId::ClaudeDesktop)
        );
        assert_eq!(
            detect_format_in_text("mcpServers:\n  - name: fs\n    command: npx\n"),
            Some(FormatId::ContinueDev)
        );
        assert_eq!(
            detect_format_in_text("[mcp_servers.fs]\ncommand = \"npx\"\n"),
            Some(FormatId::CodexCli)
        );
        assert_eq!(detect_format_in_text("just some words"), None);
    }
}
