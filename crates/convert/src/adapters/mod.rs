//! Per-format adapters and the registry that selects them.

mod continue_dev;
mod fields;
mod keyed;
mod profiles;
mod traits;

pub use continue_dev::ContinueDevAdapter;
pub use fields::TimeUnit;
pub use keyed::{CommandShape, KeyedAdapter, TypeTag};
pub use traits::FormatAdapter;

use crate::format::FormatId;
use crate::model::UniversalConfig;
use serde_json::Value;

static CONTINUE_DEV: ContinueDevAdapter = ContinueDevAdapter;

/// Returns the adapter for `format`.
pub fn adapter_for(format: FormatId) -> &'static dyn FormatAdapter {
    match format {
        FormatId::ClaudeDesktop => &profiles::CLAUDE_DESKTOP,
        FormatId::Windsurf => &profiles::WINDSURF,
        FormatId::LmStudio => &profiles::LM_STUDIO,
        FormatId::Junie => &profiles::JUNIE,
        FormatId::SourcegraphCody => &profiles::SOURCEGRAPH_CODY,
        FormatId::Cursor => &profiles::CURSOR,
        FormatId::Cline => &profiles::CLINE,
        FormatId::RooCode => &profiles::ROO_CODE,
        FormatId::Antigravity => &profiles::ANTIGRAVITY,
        FormatId::GeminiCli => &profiles::GEMINI_CLI,
        FormatId::ClaudeCode => &profiles::CLAUDE_CODE,
        FormatId::Vscode => &profiles::VSCODE,
        FormatId::CopilotCli => &profiles::COPILOT_CLI,
        FormatId::OpenCode => &profiles::OPENCODE,
        FormatId::AmpCode => &profiles::AMPCODE,
        FormatId::Zed => &profiles::ZED,
        FormatId::CodexCli => &profiles::CODEX_CLI,
        FormatId::Goose => &profiles::GOOSE,
        FormatId::LibreChat => &profiles::LIBRECHAT,
        FormatId::ContinueDev => &CONTINUE_DEV,
    }
}

/// Extracts servers from a decoded document of `format`.
pub fn parse_to_universal(document: &Value, format: FormatId) -> UniversalConfig {
    adapter_for(format).parse(document)
}

/// Builds a `format` document from the canonical model.
pub fn convert_from_universal(config: &UniversalConfig, format: FormatId) -> Value {
    adapter_for(format).convert(config)
}
