//! Best-effort recovery of near-valid JSON pasted by users.
//!
//! Handles three kinds of input: valid JSON, a bare `"key": {...}` fragment
//! missing its enclosing braces, and text with unbalanced `{}`/`[]` from a
//! partial copy. The brace scanner only checks balance; it is not a JSON
//! validator.

use crate::error::ConvertError;
use crate::Result;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

static TRAILING_COMMA_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\}").expect("valid regex"));
static TRAILING_COMMA_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\]").expect("valid regex"));
static LEADING_KEY_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"(\w+)":\s*\{"#).expect("valid regex"));

/// Structural brace and bracket counts outside string literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraceCounts {
    pub open: usize,
    pub close: usize,
    pub open_brackets: usize,
    pub close_brackets: usize,
}

impl BraceCounts {
    /// Scans `text`, skipping quoted segments and escaped characters.
    pub fn scan(text: &str) -> Self {
        let mut counts = Self::default();
        let mut in_string = false;
        let mut escaped = false;

        for ch in text.chars() {
            if escaped {
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                '"' => in_string = !in_string,
                _ if in_string => {}
                '{' => counts.open += 1,
                '}' => counts.close += 1,
                '[' => counts.open_brackets += 1,
                ']' => counts.close_brackets += 1,
                _ => {}
            }
        }
        counts
    }

    pub fn is_balanced(&self) -> bool {
        self.open == self.close && self.open_brackets == self.close_brackets
    }
}

/// Strips trailing commas and balances braces/brackets.
///
/// Missing closers are appended; surplus closers are matched by prepending
/// openers.
pub fn repair_json(input: &str) -> String {
    let mut repaired = strip_trailing_commas(input.trim());
    let counts = BraceCounts::scan(&repaired);

    if counts.open > counts.close {
        repaired.push_str(&"}".repeat(counts.open - counts.close));
    }
    if counts.open_brackets > counts.close_brackets {
        repaired.push_str(&"]".repeat(counts.open_brackets - counts.close_brackets));
    }
    if counts.close > counts.open {
        repaired.insert_str(0, &"{".repeat(counts.close - counts.open));
    }
    if counts.close_brackets > counts.open_brackets {
        repaired.insert_str(0, &"[".repeat(counts.close_brackets - counts.open_brackets));
    }

    repaired
}

fn strip_trailing_commas(text: &str) -> String {
    let without_commas = TRAILING_COMMA_BRACE.replace_all(text, "}");
    TRAILING_COMMA_BRACKET
        .replace_all(&without_commas, "]")
        .into_owned()
}

/// Drops surplus closers sitting at the very end of the text, after
/// trailing commas are gone.
fn trim_surplus_closers(text: &str) -> Option<String> {
    let text = strip_trailing_commas(text);
    let counts = BraceCounts::scan(&text);
    let mut extra_braces = counts.close.saturating_sub(counts.open);
    let mut extra_brackets = counts.close_brackets.saturating_sub(counts.open_brackets);
    if extra_braces == 0 && extra_brackets == 0 {
        return None;
    }

    let mut trimmed = text.trim_end().to_string();
    loop {
        match trimmed.chars().last() {
            Some('}') if extra_braces > 0 => extra_braces -= 1,
            Some(']') if extra_brackets > 0 => extra_brackets -= 1,
            Some(c) if c.is_whitespace() => {}
            _ => break,
        }
        trimmed.pop();
    }
    Some(trimmed)
}

fn try_parse(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

fn wrap(text: &str) -> String {
    format!("{{{text}}}")
}

/// Parses JSON, falling back through increasingly aggressive repairs.
///
/// Strategies, first success wins: direct parse; wrap a leading `"key":`
/// fragment in braces; repair balance; wrap then repair; wrap then repair
/// when the text opens with `"<identifier>": {`; finally drop surplus
/// trailing closers from a document that already opens correctly.
pub fn parse_json_flexible(input: &str) -> Result<Value> {
    let trimmed = input.trim();
    let starts_with_key = trimmed.starts_with('"');

    if let Some(value) = try_parse(trimmed) {
        return Ok(value);
    }

    if starts_with_key {
        if let Some(value) = try_parse(&wrap(trimmed)) {
            debug!(strategy = "wrap", "Recovered JSON input");
            return Ok(value);
        }
    }

    if let Some(value) = try_parse(&repair_json(trimmed)) {
        debug!(strategy = "repair", "Recovered JSON input");
        return Ok(value);
    }

    if starts_with_key {
        if let Some(value) = try_parse(&repair_json(&wrap(trimmed))) {
            debug!(strategy = "wrap+repair", "Recovered JSON input");
            return Ok(value);
        }
    }

    if LEADING_KEY_OBJECT.is_match(trimmed) {
        if let Some(value) = try_parse(&repair_json(&wrap(trimmed))) {
            debug!(strategy = "key-object", "Recovered JSON input");
            return Ok(value);
        }
    }

    if let Some(value) = trim_surplus_closers(trimmed).and_then(|t| try_parse(&t)) {
        debug!(strategy = "trim-closers", "Recovered JSON input");
        return Ok(value);
    }

    let counts = BraceCounts::scan(trimmed);
    Err(ConvertError::InvalidJson {
        open: counts.open,
        close: counts.close,
        open_brackets: counts.open_brackets,
        close_brackets: counts.close_brackets,
    })
}
