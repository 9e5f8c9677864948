//! Scalar rendering.
//!
//! Picks the presentation style for a string so that reading the output back
//! yields the same string, and renders scalars in that style:
//! - plain when the text resolves to itself
//! - single-quoted when plain would be read as another type or as syntax
//! - double-quoted when the text holds characters that need escapes
//! - literal block (`|`, `|-`) for multi-line text that survives the
//!   blank-line passes unchanged

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Number, Value};

// YAML 1.1 booleans and nulls that 1.2 parsers read as strings
static YAML11_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:y|yes|n|no|on|off|true|false|null|~)$").unwrap()
});

// YAML 1.1 base-60 numbers (e.g. 1:30:00)
static SEXAGESIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9][0-9_]*(:[0-5]?[0-9])+(\.[0-9_]*)?$").unwrap());

// Dates and timestamps that YAML 1.1 loaders turn into date objects
static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}").unwrap());

/// Presentation style for a string scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    Plain,
    SingleQuoted,
    DoubleQuoted,
    /// Multi-line literal block; only valid in value position
    Literal,
}

/// Choose how to write `text` in value position
#[must_use]
pub fn choose_style(text: &str) -> ScalarStyle {
    if text.contains('\n') && literal_round_trips(text) {
        return ScalarStyle::Literal;
    }
    if text.chars().any(needs_escape) {
        return ScalarStyle::DoubleQuoted;
    }
    if plain_round_trips(text) {
        ScalarStyle::Plain
    } else {
        ScalarStyle::SingleQuoted
    }
}

/// Choose how to write `text` as a mapping key
#[must_use]
pub fn choose_key_style(text: &str) -> ScalarStyle {
    match choose_style(text) {
        ScalarStyle::Literal => ScalarStyle::DoubleQuoted,
        style => style,
    }
}

/// Render a mapping key
#[must_use]
pub fn render_key(text: &str) -> String {
    render_inline(text, choose_key_style(text))
}

/// Render a string in a single-line style
///
/// `Literal` is not single-line and falls back to double quotes.
#[must_use]
pub fn render_inline(text: &str, style: ScalarStyle) -> String {
    match style {
        ScalarStyle::Plain => text.to_string(),
        ScalarStyle::SingleQuoted => format!("'{}'", text.replace('\'', "''")),
        ScalarStyle::DoubleQuoted | ScalarStyle::Literal => double_quote(text),
    }
}

/// Block header for a literal scalar: `|` keeps one final newline, `|-` none
#[must_use]
pub fn literal_header(text: &str) -> &'static str {
    if text.ends_with('\n') {
        "|"
    } else {
        "|-"
    }
}

/// Content lines of a literal scalar, without indentation
#[must_use]
pub fn literal_lines(text: &str) -> Vec<&str> {
    text.strip_suffix('\n').unwrap_or(text).split('\n').collect()
}

#[must_use]
pub fn render_number(number: &Number) -> String {
    number.to_string()
}

#[must_use]
pub fn render_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub const NULL: &str = "null";

/// Characters that cannot appear unescaped in a single-line scalar
fn needs_escape(c: char) -> bool {
    c.is_control() || matches!(c, '\u{feff}' | '\u{2028}' | '\u{2029}')
}

fn plain_round_trips(text: &str) -> bool {
    if text.is_empty() || text.trim() != text {
        return false;
    }
    if YAML11_KEYWORD_RE.is_match(text)
        || SEXAGESIMAL_RE.is_match(text)
        || TIMESTAMP_RE.is_match(text)
    {
        return false;
    }
    // A plain key is followed by ':' and must not end with one itself
    if text.ends_with(':') {
        return false;
    }
    matches!(serde_yaml::from_str::<Value>(text), Ok(Value::String(s)) if s == text)
}

/// Whether a literal block of `text` reads back unchanged after the
/// blank-line passes and the final trim
///
/// The first line must carry content with no leading whitespace: the block's
/// indentation is taken from it, and a leading empty line sits next to the
/// separator the layout pass may collapse.
fn literal_round_trips(text: &str) -> bool {
    let bad_first_line = text.starts_with([' ', '\t', '\n']);
    let body = text.strip_suffix('\n').unwrap_or(text);
    !bad_first_line
        && !body.is_empty()
        && !body.ends_with('\n')
        && !body.contains("\n\n\n")
        && !text.chars().any(|c| c != '\n' && needs_escape(c))
        && body.split('\n').all(|line| line.trim_end() == line)
}

fn double_quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c if (c as u32) < 0x100 && needs_escape(c) => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c if needs_escape(c) => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
