//! Shared test utilities for mcp-bridge crates.
//!
//! Sample configuration documents for every supported format, JSON
//! helpers, and guards for tests that touch `HOME` or environment
//! variables.

pub mod samples;

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, `HOME`).
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// Restores an environment variable to its previous value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(v) => std::env::set_var(self.key, v),
            None => std::env::remove_var(self.key),
        }
    }
}

/// Sets (or with `None`, removes) an environment variable until the guard drops.
///
/// # Example
/// ```
/// let _guard = mcp_bridge_test_utils::set_env_var("MCP_BRIDGE_DOC_VAR", Some("cursor"));
/// assert_eq!(std::env::var("MCP_BRIDGE_DOC_VAR").unwrap(), "cursor");
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
    EnvVarGuard { key, previous }
}

/// Temporary home directory for tests that read `~/.mcp-bridge/config.toml`
/// or write converted files.
pub struct HomeFixture {
    pub tempdir: tempfile::TempDir,
}

impl HomeFixture {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            tempdir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.tempdir.path()
    }

    /// Points `HOME` at this fixture until the guard drops.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", self.path().to_str())
    }

    /// Writes `~/.mcp-bridge/config.toml` inside the fixture.
    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        self.write_file(".mcp-bridge/config.toml", contents)
    }

    /// Writes a file relative to the fixture root, creating parent directories.
    pub fn write_file(&self, relative: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Parses JSON test input, panicking with the offending text on failure.
pub fn json(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| panic!("invalid test JSON ({e}):\n{text}"))
}

/// Returns the object stored at `pointer`, panicking when absent.
pub fn object_at<'a>(value: &'a Value, pointer: &str) -> &'a serde_json::Map<String, Value> {
    value
        .pointer(pointer)
        .and_then(Value::as_object)
        .unwrap_or_else(|| panic!("no object at {pointer} in {value}"))
}

/// Sorted key list of the object at `pointer`, for order-insensitive checks.
pub fn keys_at(value: &Value, pointer: &str) -> Vec<String> {
    let mut keys: Vec<String> = object_at(value, pointer).keys().cloned().collect();
    keys.sort();
    keys
}
