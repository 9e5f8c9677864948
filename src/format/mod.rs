//! YAML canonicalization.
//!
//! This module turns raw YAML text into canonical text:
//! - [`document`]: Parses into a [`Document`] restricted to JSON-compatible types
//! - [`scalar`]: Chooses plain, quoted, or literal presentation for strings
//! - [`emitter`]: Writes block YAML with a fixed indent width
//! - [`blank_lines`]: Separates top-level entries and normalizes blank lines
//!
//! The main entry point is [`canonicalize`]. Canonicalization is a pure
//! function of the input text; it never touches the filesystem.

pub mod blank_lines;
pub mod document;
pub mod emitter;
pub mod scalar;

pub use blank_lines::{collapse_blank_runs, finish, layout, separate_top_level};
pub use document::Document;
pub use emitter::Emitter;
pub use scalar::{choose_style, ScalarStyle};

use crate::config::Config;
use crate::error::Error;

/// Canonicalize YAML text with the default configuration
pub fn canonicalize(raw: &str) -> Result<String, Error> {
    canonicalize_with(raw, &Config::default())
}

/// Canonicalize YAML text
///
/// Parses `raw`, sorts mapping keys at every level, emits block YAML with
/// `config.indent` spaces per level, then applies the blank-line passes.
/// Input with no content at all (blank lines and comments only) yields a
/// single newline.
///
/// The canonical text is parsed again before it is returned; if it does not
/// read back as the same document the input is reported as malformed, so a
/// caller never writes text that changes the data.
pub fn canonicalize_with(raw: &str, config: &Config) -> Result<String, Error> {
    if !has_content(raw) {
        return Ok(finish(""));
    }
    let mut doc = Document::parse(raw)?;
    doc.sort_keys();
    let emitted = Emitter::new(config.indent).emit(&doc);
    let canonical = layout(&emitted);
    verify_reads_back(&canonical, &doc)?;
    Ok(canonical)
}

/// Check that `canonical` parses to `expected`
fn verify_reads_back(canonical: &str, expected: &Document) -> Result<(), Error> {
    let mut reparsed = Document::parse(canonical)
        .map_err(|e| Error::malformed(format!("canonical output does not parse: {e}")))?;
    reparsed.sort_keys();
    if reparsed == *expected {
        Ok(())
    } else {
        tracing::debug!(canonical, "canonical output reads back differently");
        Err(Error::malformed(
            "canonical output does not read back as the same document",
        ))
    }
}

/// Whether `raw` has anything besides blank lines and comments
fn has_content(raw: &str) -> bool {
    raw.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    })
}
