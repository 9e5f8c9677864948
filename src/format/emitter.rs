//! Block-style YAML emitter.
//!
//! Writes a [`Document`] as block YAML with a fixed indent width. Layout:
//! - mapping values that are scalars or empty collections stay on the key line
//! - nested mappings and sequences start on the next line, one level deeper
//!   (sequences under a key are indented, not flush with it)
//! - a collection inside a sequence item starts on the dash line, with the
//!   dash padded to the indent width (`-   key: value`)
//! - empty collections are written in flow form (`{}`, `[]`)
//!
//! The emitter does not sort; callers run [`Document::sort_keys`] first.

use super::document::Document;
use super::scalar::{
    choose_style, literal_header, literal_lines, render_bool, render_inline, render_key,
    render_number, ScalarStyle, NULL,
};

/// Emits documents with a given indent width
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
    indent: usize,
}

/// How a node attaches to the line that introduces it
enum Inline {
    /// Fits after the key or dash: `key: value`
    Scalar(String),
    /// Literal block: header on the key line, content lines below
    Literal { header: &'static str, text: String },
    /// Non-empty collection written on its own lines
    Block,
}

impl Emitter {
    /// Create an emitter; `indent` must be at least 2
    #[must_use]
    pub fn new(indent: usize) -> Self {
        Emitter {
            indent: indent.max(2),
        }
    }

    /// Serialize `doc`, one `\n` after every line
    #[must_use]
    pub fn emit(&self, doc: &Document) -> String {
        let mut lines = Vec::new();
        match classify(doc) {
            Inline::Scalar(text) => lines.push(text),
            Inline::Literal { header, text } => {
                lines.push(header.to_string());
                self.push_literal(&text, self.indent, &mut lines);
            }
            Inline::Block => self.push_block(doc, 0, &mut lines),
        }

        let mut out = String::new();
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn push_block(&self, doc: &Document, level: usize, lines: &mut Vec<String>) {
        match doc {
            Document::Mapping(entries) => {
                for (key, value) in entries {
                    self.push_entry(key, value, level, lines);
                }
            }
            Document::Sequence(items) => {
                for item in items {
                    self.push_item(item, level, lines);
                }
            }
            _ => {}
        }
    }

    fn push_entry(&self, key: &str, value: &Document, level: usize, lines: &mut Vec<String>) {
        let prefix = format!("{}{}:", pad(level), render_key(key));
        match classify(value) {
            Inline::Scalar(text) => lines.push(format!("{prefix} {text}")),
            Inline::Literal { header, text } => {
                lines.push(format!("{prefix} {header}"));
                self.push_literal(&text, level + self.indent, lines);
            }
            Inline::Block => {
                lines.push(prefix);
                self.push_block(value, level + self.indent, lines);
            }
        }
    }

    fn push_item(&self, item: &Document, level: usize, lines: &mut Vec<String>) {
        let dash = format!("{}-", pad(level));
        match classify(item) {
            Inline::Scalar(text) => lines.push(format!("{dash} {text}")),
            Inline::Literal { header, text } => {
                lines.push(format!("{dash} {header}"));
                self.push_literal(&text, level + self.indent, lines);
            }
            Inline::Block => {
                let nested = level + self.indent;
                let first = lines.len();
                self.push_block(item, nested, lines);
                // The first nested line is indented by `nested` spaces; the
                // dash takes over that indentation
                if let Some(line) = lines.get_mut(first) {
                    let content = line[nested..].to_string();
                    *line = format!("{dash}{}{content}", pad(self.indent - 1));
                }
            }
        }
    }

    fn push_literal(&self, text: &str, level: usize, lines: &mut Vec<String>) {
        for line in literal_lines(text) {
            if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("{}{line}", pad(level)));
            }
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Emitter::new(4)
    }
}

fn classify(doc: &Document) -> Inline {
    match doc {
        Document::Null => Inline::Scalar(NULL.to_string()),
        Document::Bool(b) => Inline::Scalar(render_bool(*b).to_string()),
        Document::Number(n) => Inline::Scalar(render_number(n)),
        Document::String(s) => match choose_style(s) {
            ScalarStyle::Literal => Inline::Literal {
                header: literal_header(s),
                text: s.clone(),
            },
            style => Inline::Scalar(render_inline(s, style)),
        },
        Document::Mapping(entries) if entries.is_empty() => Inline::Scalar("{}".to_string()),
        Document::Sequence(items) if items.is_empty() => Inline::Scalar("[]".to_string()),
        Document::Mapping(_) | Document::Sequence(_) => Inline::Block,
    }
}

fn pad(width: usize) -> String {
    " ".repeat(width)
}
