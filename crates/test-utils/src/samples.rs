//! Representative configuration documents, one per format id.

pub const CLAUDE_DESKTOP: &str = r#"{
  "mcpServers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/Users/username/Desktop"]
    },
    "sequential-thinking": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-sequential-thinking"]
    }
  }
}"#;

pub const WINDSURF: &str = r#"{
  "mcpServers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"]
    },
    "github": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-github"],
      "env": {
        "GITHUB_TOKEN": "ghp_your_token_here"
      }
    }
  }
}"#;

pub const CLINE: &str = r#"{
  "mcpServers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"],
      "disabled": false,
      "alwaysAllow": ["read_file", "list_directory"],
      "autoApprove": ["write_file"]
    }
  }
}"#;

pub const VSCODE: &str = r#"{
  "inputs": [
    {"type": "promptString", "id": "api-key", "description": "API key", "password": true}
  ],
  "servers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"]
    },
    "remote": {
      "type": "http",
      "url": "https://api.example.com/mcp",
      "headers": {"Authorization": "Bearer ${input:api-key}"}
    }
  }
}"#;

pub const CURSOR: &str = r#"{
  "mcpServers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"],
      "disabled": false,
      "autoApprove": ["read_file", "search_files"]
    }
  }
}"#;

pub const OPENCODE: &str = r#"{
  "mcp": {
    "filesystem": {
      "type": "local",
      "command": ["npx", "-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"],
      "enabled": true
    },
    "perplexica": {
      "type": "local",
      "command": ["uvx", "perplexica-mcp", "stdio"],
      "environment": {
        "PERPLEXICA_API_KEY": "sk-your-key-here"
      },
      "enabled": true
    }
  }
}"#;

pub const GEMINI_CLI: &str = r#"{
  "mcpServers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"],
      "timeout": 30000,
      "trust": false
    }
  }
}"#;

pub const LM_STUDIO: &str = r#"{
  "mcpServers": {
    "brave-search": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-brave-search"],
      "env": {
        "BRAVE_API_KEY": "BSA_your_api_key_here"
      }
    }
  }
}"#;

pub const ANTIGRAVITY: &str = r#"{
  "mcpServers": {
    "qdrant": {
      "command": "uvx",
      "args": ["mcp-server-qdrant"],
      "env": {
        "QDRANT_URL": "http://localhost:6333",
        "COLLECTION_NAME": "my-collection"
      }
    },
    "remote": {
      "serverUrl": "https://api.example.com/mcp"
    }
  }
}"#;

pub const JUNIE: &str = r#"{
  "mcpServers": {
    "postgres": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-postgres"],
      "env": {
        "POSTGRES_CONNECTION": "postgresql://localhost:5432/db"
      }
    }
  }
}"#;

pub const ROO_CODE: &str = r#"{
  "mcpServers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"],
      "cwd": "/path/to/project",
      "alwaysAllow": ["read_file", "write_file"],
      "disabled": false
    }
  }
}"#;

pub const COPILOT_CLI: &str = r#"{
  "servers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"]
    }
  }
}"#;

pub const CONTINUE_DEV: &str = r#"name: Filesystem MCP
version: 0.0.1
mcpServers:
  - name: filesystem
    type: stdio
    command: npx
    args:
      - -y
      - "@modelcontextprotocol/server-filesystem"
      - /path/to/files
  - name: remote
    type: sse
    url: http://localhost:3000/sse
"#;

pub const CODEX_CLI: &str = r#"[mcp_servers.filesystem]
command = "npx"
args = ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"]

[mcp_servers.slow_server]
command = "python"
args = ["-m", "server"]
startup_timeout_sec = 60
"#;

pub const CLAUDE_CODE: &str = r#"{
  "mcpServers": {
    "filesystem": {
      "type": "stdio",
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"]
    },
    "github": {
      "type": "stdio",
      "command": "uvx",
      "args": ["mcp-server-github"],
      "env": {
        "GITHUB_TOKEN": "token"
      }
    }
  },
  "allowedMcpServers": ["filesystem", "github"]
}"#;

pub const AMPCODE: &str = r#"{
  "amp.mcpServers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"]
    },
    "github": {
      "command": "uvx",
      "args": ["mcp-server-github"],
      "env": {
        "GITHUB_TOKEN": "ghp_your_token_here"
      }
    }
  }
}"#;

pub const ZED: &str = r#"{
  "context_servers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"],
      "env": {
        "NODE_ENV": "production"
      }
    }
  }
}"#;

pub const SOURCEGRAPH_CODY: &str = r#"{
  "mcpServers": {
    "filesystem": {
      "command": "npx",
      "args": ["-y", "@modelcontextprotocol/server-filesystem", "/path/to/files"],
      "env": {
        "CODY_TOKEN": "your_token_here"
      }
    }
  }
}"#;

pub const GOOSE: &str = r#"extensions:
  filesystem:
    type: stdio
    cmd: npx
    args:
      - "-y"
      - "@modelcontextprotocol/server-filesystem"
      - "/path/to/files"
    enabled: true
    envs:
      NODE_ENV: production
    timeout: 300
"#;

pub const LIBRECHAT: &str = r#"mcpServers:
  filesystem:
    type: stdio
    command: npx
    args:
      - "-y"
      - "@modelcontextprotocol/server-filesystem"
      - "/path/to/files"
    timeout: 60000
  puppeteer:
    type: websocket
    url: ws://localhost:8080/mcp
    description: Browser automation
"#;

/// Every sample keyed by format id.
pub const ALL: [(&str, &str); 20] = [
    ("claude-desktop", CLAUDE_DESKTOP),
    ("windsurf", WINDSURF),
    ("cline", CLINE),
    ("vscode", VSCODE),
    ("cursor", CURSOR),
    ("opencode", OPENCODE),
    ("gemini-cli", GEMINI_CLI),
    ("lmstudio", LM_STUDIO),
    ("antigravity", ANTIGRAVITY),
    ("junie", JUNIE),
    ("roo-code", ROO_CODE),
    ("copilot-cli", COPILOT_CLI),
    ("continue-dev", CONTINUE_DEV),
    ("codex-cli", CODEX_CLI),
    ("claude-code", CLAUDE_CODE),
    ("ampcode", AMPCODE),
    ("zed", ZED),
    ("sourcegraph-cody", SOURCEGRAPH_CODY),
    ("goose", GOOSE),
    ("librechat", LIBRECHAT),
];

/// Looks up the sample for a format id.
pub fn for_format(id: &str) -> Option<&'static str> {
    ALL.iter().find(|(k, _)| *k == id).map(|(_, v)| *v)
}
