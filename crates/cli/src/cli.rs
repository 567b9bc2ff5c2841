use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for the `mcp-bridge` application.
#[derive(Debug, Parser)]
#[command(
    name = "mcp-bridge",
    version,
    about = "Convert MCP server configuration between editor and agent formats"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `mcp-bridge` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Converts a configuration file (or stdin) into one or more target formats.
    Convert {
        /// Source format id, or `auto` to detect it from the file path and contents.
        #[arg(long, env = "MCP_BRIDGE_FROM", value_name = "FORMAT")]
        from: Option<String>,
        /// Target format ids (comma-separated or repeated), or `all`.
        #[arg(
            long,
            env = "MCP_BRIDGE_TO",
            value_name = "FORMAT",
            value_delimiter = ',',
            required = true
        )]
        to: Vec<String>,
        /// Disables source auto-detection; `--from` must then name a format.
        #[arg(long, env = "MCP_BRIDGE_NO_DETECT", default_value_t = false)]
        no_detect: bool,
        /// Writes the converted document to this file instead of stdout.
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
        /// Merges into the existing `--output` file, keeping unrelated settings.
        #[arg(long, requires = "output", default_value_t = false)]
        merge: bool,
        /// Input file; reads stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
    /// Prints the detected format of a configuration file (or stdin).
    Detect {
        /// Input file; reads stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
    /// Lists every supported format.
    Formats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_accepts_comma_separated_targets() {
        let cli = Cli::try_parse_from([
            "mcp-bridge",
            "convert",
            "--from",
            "cursor",
            "--to",
            "zed,goose",
            "--to",
            "vscode",
            "mcp.json",
        ])
        .unwrap();

        let Commands::Convert {
            from, to, input, ..
        } = cli.command
        else {
            panic!("expected convert");
        };
        assert_eq!(from.as_deref(), Some("cursor"));
        assert_eq!(to, vec!["zed", "goose", "vscode"]);
        assert_eq!(input, Some(PathBuf::from("mcp.json")));
    }

    #[test]
    fn merge_requires_output() {
        let result = Cli::try_parse_from(["mcp-bridge", "convert", "--to", "zed", "--merge"]);
        assert!(result.is_err());
    }

    #[test]
    fn detect_reads_stdin_by_default() {
        let cli = Cli::try_parse_from(["mcp-bridge", "detect"]).unwrap();
        assert!(matches!(cli.command, Commands::Detect { input: None }));
    }
}
