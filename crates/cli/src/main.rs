//! Command-line interface for the `mcp-bridge` application.
//!
//! The binary is a thin shell; argument handling and command dispatch live
//! in the library half of this crate.

fn main() -> anyhow::Result<()> {
    mcp_bridge::run()
}
