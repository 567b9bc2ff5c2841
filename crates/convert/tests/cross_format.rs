//! Conversions between different formats.

use mcp_bridge_convert::{convert_from_universal, parse_to_universal, FormatId};
use proptest::prelude::*;
use serde_json::{json, Value};

fn convert(document: &Value, from: FormatId, to: FormatId) -> Value {
    convert_from_universal(&parse_to_universal(document, from), to)
}

#[test]
fn opencode_command_array_becomes_command_and_args() {
    let doc = json!({"mcp": {"perplexica": {
        "type": "local",
        "command": ["uvx", "perplexica-mcp", "stdio"],
        "environment": {"PERPLEXICA_API_KEY": "sk-key"},
        "enabled": true
    }}});
    assert_eq!(
        convert(&doc, FormatId::OpenCode, FormatId::Antigravity),
        json!({"mcpServers": {"perplexica": {
            "command": "uvx",
            "args": ["perplexica-mcp", "stdio"],
            "env": {"PERPLEXICA_API_KEY": "sk-key"}
        }}})
    );
}

#[test]
fn command_and_args_join_into_opencode_array() {
    let doc = json!({"mcpServers": {"fs": {"command": "npx", "args": ["-y", "pkg"]}}});
    assert_eq!(
        convert(&doc, FormatId::ClaudeDesktop, FormatId::OpenCode),
        json!({"mcp": {"fs": {
            "type": "local",
            "command": ["npx", "-y", "pkg"],
            "enabled": true
        }}})
    );
}

#[test]
fn gemini_http_url_becomes_continue_streamable_http() {
    let doc = json!({"mcpServers": {"api": {"httpUrl": "https://api.example.com/mcp"}}});
    let out = convert(&doc, FormatId::GeminiCli, FormatId::ContinueDev);
    assert_eq!(
        out["mcpServers"],
        json!([{"name": "api", "type": "streamable-http", "url": "https://api.example.com/mcp"}])
    );
}

#[test]
fn codex_servers_become_opencode_entries() {
    let doc = json!({"mcp_servers": {"git": {
        "command": "uvx",
        "args": ["mcp-server-git"],
        "env": {"GIT_DIR": "/repo"},
        "cwd": "/repo"
    }}});
    assert_eq!(
        convert(&doc, FormatId::CodexCli, FormatId::OpenCode),
        json!({"mcp": {"git": {
            "type": "local",
            "command": ["uvx", "mcp-server-git"],
            "environment": {"GIT_DIR": "/repo"},
            "cwd": "/repo",
            "enabled": true
        }}})
    );
}

#[test]
fn vscode_servers_become_windsurf_mcp_servers() {
    let doc = json!({
        "inputs": [{"id": "key", "type": "promptString"}],
        "servers": {
            "fs": {"type": "stdio", "command": "npx", "envFile": ".env"},
            "api": {"type": "http", "url": "https://api.example.com/mcp"}
        }
    });
    assert_eq!(
        convert(&doc, FormatId::Vscode, FormatId::Windsurf),
        json!({"mcpServers": {
            "fs": {"command": "npx"},
            "api": {"url": "https://api.example.com/mcp"}
        }})
    );
}

#[test]
fn vscode_extras_do_not_leak_into_copilot_cli() {
    let doc = json!({
        "inputs": [{"id": "key", "type": "promptString"}],
        "servers": {"fs": {"command": "npx", "envFile": ".env"}}
    });
    assert_eq!(
        convert(&doc, FormatId::Vscode, FormatId::CopilotCli),
        json!({"servers": {"fs": {"command": "npx"}}})
    );
}

#[test]
fn windsurf_url_becomes_antigravity_server_url() {
    let doc = json!({"mcpServers": {"api": {"url": "https://api.example.com/mcp"}}});
    assert_eq!(
        convert(&doc, FormatId::Windsurf, FormatId::Antigravity),
        json!({"mcpServers": {"api": {"serverUrl": "https://api.example.com/mcp"}}})
    );
}

#[test]
fn cline_permissions_do_not_leak_into_cursor() {
    let doc = json!({"mcpServers": {"fs": {
        "command": "npx",
        "disabled": false,
        "alwaysAllow": ["read_file"],
        "autoApprove": ["write_file"]
    }}});
    assert_eq!(
        convert(&doc, FormatId::Cline, FormatId::Cursor),
        json!({"mcpServers": {"fs": {"command": "npx"}}})
    );
}

#[test]
fn claude_code_allow_list_is_dropped_for_desktop() {
    let doc = json!({
        "mcpServers": {"fs": {"type": "stdio", "command": "npx"}},
        "allowedMcpServers": ["fs"],
        "deniedMcpServers": ["shell"]
    });
    assert_eq!(
        convert(&doc, FormatId::ClaudeCode, FormatId::ClaudeDesktop),
        json!({"mcpServers": {"fs": {"command": "npx"}}})
    );
}

#[test]
fn librechat_websocket_becomes_http_elsewhere() {
    let doc = json!({"mcpServers": {"ws": {
        "type": "websocket",
        "url": "ws://localhost:8080",
        "description": "Browser"
    }}});
    assert_eq!(
        convert(&doc, FormatId::LibreChat, FormatId::Vscode),
        json!({"servers": {"ws": {"type": "http", "url": "ws://localhost:8080"}}})
    );
}

#[test]
fn goose_fields_map_to_standard_names() {
    let doc = json!({"extensions": {"fs": {
        "type": "stdio",
        "cmd": "npx",
        "args": ["-y", "pkg"],
        "envs": {"NODE_ENV": "production"},
        "env_keys": ["TOKEN"],
        "timeout": 45,
        "enabled": true
    }}});
    assert_eq!(
        convert(&doc, FormatId::Goose, FormatId::GeminiCli),
        json!({"mcpServers": {"fs": {
            "command": "npx",
            "args": ["-y", "pkg"],
            "env": {"NODE_ENV": "production"},
            "timeout": 45000
        }}})
    );
}

#[test]
fn millisecond_timeouts_round_half_up_into_seconds() {
    let doc = json!({"mcpServers": {"slow": {"command": "python", "timeout": 12500}}});
    let codex = convert(&doc, FormatId::GeminiCli, FormatId::CodexCli);
    assert_eq!(codex["mcp_servers"]["slow"]["startup_timeout_sec"], 13);

    let goose = convert(&doc, FormatId::GeminiCli, FormatId::Goose);
    assert_eq!(goose["extensions"]["slow"]["timeout"], 13);
}

#[test]
fn sub_second_timeouts_stay_positive_in_second_formats() {
    let doc = json!({"mcpServers": {"quick": {"command": "python", "timeout": 300}}});
    let codex = convert(&doc, FormatId::GeminiCli, FormatId::CodexCli);
    assert_eq!(codex["mcp_servers"]["quick"]["startup_timeout_sec"], 1);

    let goose = convert(&doc, FormatId::GeminiCli, FormatId::Goose);
    assert_eq!(goose["extensions"]["quick"]["timeout"], 1);

    let back = convert(&codex, FormatId::CodexCli, FormatId::GeminiCli);
    assert_eq!(back["mcpServers"]["quick"]["timeout"], 1000);
}

#[test]
fn second_timeouts_become_milliseconds() {
    let doc = json!({"mcp_servers": {"slow": {"command": "python", "startup_timeout_sec": 30}}});
    let gemini = convert(&doc, FormatId::CodexCli, FormatId::GeminiCli);
    assert_eq!(gemini["mcpServers"]["slow"]["timeout"], 30000);

    let librechat = convert(&doc, FormatId::CodexCli, FormatId::LibreChat);
    assert_eq!(librechat["mcpServers"]["slow"]["timeout"], 30000);
}

#[test]
fn remote_servers_lose_process_fields_in_local_remote_formats() {
    let doc = json!({"mcpServers": {"odd": {
        "command": "ignored",
        "url": "https://api.example.com/mcp"
    }}});
    assert_eq!(
        convert(&doc, FormatId::ClaudeDesktop, FormatId::AmpCode),
        json!({"amp.mcpServers": {"odd": {
            "type": "remote",
            "url": "https://api.example.com/mcp",
            "enabled": true
        }}})
    );
}

#[test]
fn every_format_pair_preserves_server_names() {
    let doc = json!({"mcpServers": {
        "alpha": {"command": "npx", "args": ["-y", "alpha"]},
        "beta": {"url": "https://beta.example.com/mcp"}
    }});
    let canonical = parse_to_universal(&doc, FormatId::ClaudeDesktop);
    for target in FormatId::ALL {
        let written = convert_from_universal(&canonical, target);
        let reread = parse_to_universal(&written, target);
        assert_eq!(
            reread.names().collect::<Vec<_>>(),
            vec!["alpha", "beta"],
            "{target}"
        );
        assert_eq!(reread.get("beta").unwrap().url, canonical.get("beta").unwrap().url);
    }
}

proptest! {
    /// Whole-second timeouts survive a trip through a millisecond format.
    #[test]
    fn whole_second_timeouts_are_stable(seconds in 1u64..100_000) {
        let doc = json!({"extensions": {"s": {"cmd": "run", "timeout": seconds}}});
        let gemini = convert(&doc, FormatId::Goose, FormatId::GeminiCli);
        prop_assert_eq!(&gemini["mcpServers"]["s"]["timeout"], &json!(seconds * 1000));

        let back = convert(&gemini, FormatId::GeminiCli, FormatId::CodexCli);
        prop_assert_eq!(&back["mcp_servers"]["s"]["startup_timeout_sec"], &json!(seconds));
    }

    /// Command arrays split and rejoin without losing elements.
    #[test]
    fn command_arrays_survive_split_and_join(parts in prop::collection::vec("[a-z0-9-]{1,8}", 1..6)) {
        let doc = json!({"mcp": {"s": {"type": "local", "command": parts.clone()}}});
        let desktop = convert(&doc, FormatId::OpenCode, FormatId::ClaudeDesktop);
        prop_assert_eq!(&desktop["mcpServers"]["s"]["command"], &json!(parts[0]));

        let back = convert(&desktop, FormatId::ClaudeDesktop, FormatId::OpenCode);
        prop_assert_eq!(&back["mcp"]["s"]["command"], &json!(parts));
    }
}
