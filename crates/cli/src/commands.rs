//! Command implementations.
//!
//! Commands write results to `out` and progress notes to `err` so that
//! converted documents can be piped straight into a file.

use anyhow::{bail, Context, Result};
use mcp_bridge_convert::{
    detect_format_from_path, detect_format_in_text, merge_into_document, parse_format_list,
    try_convert_config, FormatId,
};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Inputs for [`convert`], already merged from CLI, env, and config file.
#[derive(Debug, Clone, Default)]
pub struct ConvertRequest {
    pub from: Option<String>,
    pub to: Vec<String>,
    pub auto_detect: bool,
    pub output: Option<PathBuf>,
    pub merge: bool,
    pub input: Option<PathBuf>,
}

/// Reads a file, or stdin when `path` is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn input_path(input: Option<&Path>) -> Option<&Path> {
    input.filter(|p| p.as_os_str() != "-")
}

/// Picks the source format from `--from`, or detects it.
pub fn resolve_source(
    from: Option<&str>,
    auto_detect: bool,
    path: Option<&Path>,
    text: &str,
) -> Result<FormatId> {
    let explicit = from
        .map(str::trim)
        .filter(|f| !f.is_empty() && !f.eq_ignore_ascii_case("auto"));
    if let Some(id) = explicit {
        return Ok(id.parse()?);
    }
    if !auto_detect {
        bail!("No source format given. Pass --from <FORMAT> or enable auto-detection.");
    }

    let detected = path
        .and_then(detect_format_from_path)
        .or_else(|| detect_format_in_text(text))
        .context("Could not detect the source format. Pass --from <FORMAT>.")?;
    info!(format = %detected, "Detected source format");
    Ok(detected)
}

/// Expands `--to` values into format ids; `all` selects every format.
pub fn resolve_targets(to: &[String]) -> Result<Vec<FormatId>> {
    let wants_all = to.len() == 1 && to[0].trim().eq_ignore_ascii_case("all");
    if wants_all {
        return Ok(FormatId::ALL.to_vec());
    }
    match parse_format_list(to) {
        Some(targets) => Ok(targets),
        None => bail!(
            "No known target format in '{}'. Run `mcp-bridge formats` for the list.",
            to.join(",")
        ),
    }
}

pub fn convert(request: &ConvertRequest, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let text = read_input(request.input.as_deref())?;
    let source = resolve_source(
        request.from.as_deref(),
        request.auto_detect,
        input_path(request.input.as_deref()),
        &text,
    )?;
    let targets = resolve_targets(&request.to)?;

    if let Some(path) = &request.output {
        let [target] = targets.as_slice() else {
            bail!("--output takes exactly one target format");
        };
        let converted = try_convert_config(&text, source, *target)?;
        let document = if request.merge {
            merge_with_existing(path, *target, &converted.output)?
        } else {
            converted.output
        };
        std::fs::write(path, ensure_trailing_newline(document))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writeln!(
            err,
            "Converted {} server(s) from {} to {} -> {}",
            converted.server_count,
            source.display_name(),
            target.display_name(),
            path.display()
        )?;
        return Ok(());
    }

    let banners = targets.len() > 1;
    for target in targets {
        let converted = try_convert_config(&text, source, target)?;
        if banners {
            writeln!(err, "# {target}")?;
        }
        write!(out, "{}", ensure_trailing_newline(converted.output))?;
        info!(
            source = %source,
            target = %target,
            servers = converted.server_count,
            "Converted"
        );
    }
    Ok(())
}

/// Merges a converted document into the file already at `path`.
fn merge_with_existing(path: &Path, target: FormatId, converted: &str) -> Result<String> {
    let raw = target.raw_format();
    let fragment = raw.deserialize(converted, target)?;
    let merged = if path.exists() {
        let existing_text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let existing = raw
            .deserialize(&existing_text, target)
            .with_context(|| format!("Cannot merge into {}", path.display()))?;
        merge_into_document(existing, fragment)
    } else {
        fragment
    };
    Ok(raw.serialize(&merged)?)
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

pub fn detect(input: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let text = read_input(input)?;
    let detected = input_path(input)
        .and_then(detect_format_from_path)
        .or_else(|| detect_format_in_text(&text))
        .context("Could not detect a known MCP configuration format")?;
    writeln!(out, "{detected}\t{}", detected.display_name())?;
    Ok(())
}

pub fn formats(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<18} {:<32} {:<5} FILE", "ID", "NAME", "RAW")?;
    for format in FormatId::ALL {
        writeln!(
            out,
            "{:<18} {:<32} {:<5} {}",
            format.as_str(),
            format.display_name(),
            format.raw_format().as_str(),
            format.config_file_name()
        )?;
    }
    Ok(())
}
