//! Configuration file support for mcp-bridge.
//!
//! Loads defaults from `~/.mcp-bridge/config.toml` with the following
//! precedence: CLI arguments > environment variables > config file.
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.mcp-bridge/config.toml
//!
//! [convert]
//! # Source format id, or "auto"
//! from = "auto"
//!
//! # Target format ids, comma-separated, or "all"
//! to = "cursor,zed"
//!
//! # Set to false to require an explicit source format
//! auto_detect = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_FROM: &str = "MCP_BRIDGE_FROM";
pub const ENV_TO: &str = "MCP_BRIDGE_TO";
pub const ENV_NO_DETECT: &str = "MCP_BRIDGE_NO_DETECT";

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// Defaults for the convert command.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    pub from: Option<String>,
    pub to: Option<String>,
    pub auto_detect: Option<bool>,
}

/// Returns the path to the config file (`~/.mcp-bridge/config.toml`).
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mcp-bridge").join("config.toml"))
}

/// Loads the configuration file at `path`.
///
/// A missing file yields `Ok(None)`; a file that exists but does not parse
/// is an error.
pub fn load_config_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid configuration file {}", path.display()))?;

    tracing::debug!(
        target: "mcp_bridge::config",
        path = %path.display(),
        "Loaded configuration file"
    );
    Ok(Some(config))
}

/// Loads `~/.mcp-bridge/config.toml` if it exists.
pub fn load_config() -> Result<Option<Config>> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(None),
    }
}

/// Exposes config file values as environment variables so clap picks them
/// up with the right precedence.
///
/// Variables that are already set are left alone. Must run before the
/// command line is parsed.
pub fn apply_config_to_env() -> Result<()> {
    if let Some(config) = load_config()? {
        apply_convert_config_to_env(&config.convert);
    }
    Ok(())
}

fn apply_convert_config_to_env(convert: &ConvertConfig) {
    fn set_if_absent(key: &str, value: &str) {
        if std::env::var_os(key).is_none() {
            std::env::set_var(key, value);
            tracing::trace!(
                target: "mcp_bridge::config",
                key,
                "Set environment variable from config file"
            );
        }
    }

    if let Some(ref from) = convert.from {
        set_if_absent(ENV_FROM, from);
    }
    if let Some(ref to) = convert.to {
        set_if_absent(ENV_TO, to);
    }
    if let Some(auto_detect) = convert.auto_detect {
        set_if_absent(ENV_NO_DETECT, if auto_detect { "false" } else { "true" });
    }
}
