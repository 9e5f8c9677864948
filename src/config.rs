//! Configuration for yamlnorm.
//!
//! The [`Config`] struct carries the constants that shape canonical output:
//! indentation width and the file extensions eligible for normalization.
//! There is no config file and no override flag; every run uses
//! [`Config::default`]. The struct exists so the pipeline receives these
//! values explicitly instead of reaching for globals.

/// Default indent width for canonical output
const DEFAULT_INDENT: usize = 4;

/// Extensions (without the leading dot) eligible for normalization
const DEFAULT_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Main configuration struct for yamlnorm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of spaces per nesting level (default: 4)
    pub indent: usize,

    /// Case-sensitive file extensions to normalize (default: yaml, yml)
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: DEFAULT_INDENT,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }
}

impl Config {
    pub const MIN_INDENT: usize = 2;
    pub const MAX_INDENT: usize = 8;

    /// Validate configuration values
    ///
    /// Returns `Some(message)` describing the first problem found.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if !(Self::MIN_INDENT..=Self::MAX_INDENT).contains(&self.indent) {
            return Some(format!(
                "indent must be between {} and {}, got {}",
                Self::MIN_INDENT,
                Self::MAX_INDENT,
                self.indent
            ));
        }
        if self.extensions.is_empty() {
            return Some("at least one file extension is required".to_string());
        }
        None
    }

    /// Whether a file extension (as returned by `Path::extension`) is eligible
    #[must_use]
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.indent, 4);
        assert_eq!(config.extensions, vec!["yaml", "yml"]);
    }

    #[test]
    fn test_validate_default_config() {
        assert_eq!(Config::default().validate(), None);
    }

    #[test]
    fn test_validate_indent_too_small() {
        let config = Config {
            indent: 1,
            ..Default::default()
        };
        let error = config.validate().unwrap();
        assert!(error.contains("indent"));
    }

    #[test]
    fn test_validate_indent_too_large() {
        let config = Config {
            indent: 9,
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_validate_no_extensions() {
        let config = Config {
            extensions: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("extension"));
    }

    #[test]
    fn test_accepts_extension_is_case_sensitive() {
        let config = Config::default();
        assert!(config.accepts_extension("yaml"));
        assert!(config.accepts_extension("yml"));
        assert!(!config.accepts_extension("YAML"));
        assert!(!config.accepts_extension("json"));
        assert!(!config.accepts_extension(""));
    }
}
