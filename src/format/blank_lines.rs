//! Blank-line layout passes applied after emission.
//!
//! Sorting keys destroys any grouping the author had, so top-level entries
//! are separated by a blank line instead:
//! 1. [`separate_top_level`]: one blank line before every unindented line
//! 2. [`collapse_blank_runs`]: runs of blank lines shrink to one
//! 3. [`finish`]: trim the whole text and end it with a single newline

/// Insert a blank line before every line that starts with a non-whitespace
/// character
#[must_use]
pub fn separate_top_level(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for line in text.split_inclusive('\n') {
        if line.starts_with(|c: char| !c.is_whitespace()) {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}

/// Collapse every run of two or more consecutive blank lines into one
///
/// Only empty lines count as blank; a line holding spaces is content.
#[must_use]
pub fn collapse_blank_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_blank = false;
    for line in text.split_inclusive('\n') {
        let blank = line == "\n";
        if !(blank && previous_blank) {
            out.push_str(line);
        }
        previous_blank = blank;
    }
    out
}

/// Trim surrounding whitespace and terminate with exactly one newline
#[must_use]
pub fn finish(text: &str) -> String {
    let mut out = text.trim().to_string();
    out.push('\n');
    out
}

/// Run all three passes in order
#[must_use]
pub fn layout(text: &str) -> String {
    finish(&collapse_blank_runs(&separate_top_level(text)))
}
