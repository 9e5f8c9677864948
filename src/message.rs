//! Terminal status messages.
//!
//! Every status line the tool prints goes through [`format_message`], which
//! wraps the text in a severity color and terminates it with a newline.

use owo_colors::OwoColorize;

/// Severity of a status message; `Info` unless stated otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Error,
    Success,
}

/// Color `message` by severity and append a line break
#[must_use]
pub fn format_message(message: &str, severity: Severity) -> String {
    let colored = match severity {
        Severity::Info => message.yellow().to_string(),
        Severity::Error => message.red().to_string(),
        Severity::Success => message.green().to_string(),
    };
    format!("{colored}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const YELLOW: &str = "\x1b[33m";
    const RED: &str = "\x1b[31m";
    const GREEN: &str = "\x1b[32m";

    #[test]
    fn test_info_is_yellow() {
        let line = format_message("data/z.json SKIPPED", Severity::Info);
        assert!(line.starts_with(YELLOW));
        assert!(line.contains("data/z.json SKIPPED"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_error_is_red() {
        let line = format_message("boom", Severity::Error);
        assert!(line.starts_with(RED));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_success_is_green() {
        let line = format_message("data/a.yaml processed", Severity::Success);
        assert!(line.starts_with(GREEN));
    }

    #[test]
    fn test_single_trailing_newline() {
        let line = format_message("", Severity::Info);
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert!(format_message("x", Severity::default()).starts_with(YELLOW));
    }

    #[test]
    fn test_multiline_message_kept_intact() {
        let line = format_message("a.yaml ERROR : \nbad indent", Severity::Error);
        assert!(line.contains("a.yaml ERROR : \nbad indent"));
    }
}
