//! Command-line interface for yamlnorm.
//!
//! Defines CLI arguments using clap builder API

use clap::{Arg, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Directory whose YAML files are normalized, with one trailing
    /// separator removed
    pub directory: String,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("yamlnorm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort keys and normalize layout of the YAML files in a directory")
        .arg(
            Arg::new("directory")
                .help("Directory containing .yaml/.yml files (not searched recursively)")
                .value_name("DIRECTORY")
                .required(true)
                .num_args(1),
        )
}

/// Parse CLI arguments from an iterator
///
/// The first item is the program name. Help and version requests come back
/// as `Err` with kind `DisplayHelp` / `DisplayVersion`.
pub fn parse_args_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    Ok(args_from_matches(&matches))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    let directory = matches
        .get_one::<String>("directory")
        .map(|dir| strip_trailing_separator(dir))
        .unwrap_or_default();
    CliArgs { directory }
}

/// Remove one trailing `/`, keeping a bare root intact
#[must_use]
pub fn strip_trailing_separator(path: &str) -> String {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_builds() {
        let cmd = build_cli();
        assert_eq!(cmd.get_name(), "yamlnorm");
        cmd.debug_assert();
    }

    #[test]
    fn test_single_directory() {
        let args = parse_args_from(vec!["yamlnorm", "config"]).unwrap();
        assert_eq!(args.directory, "config");
    }

    #[test]
    fn test_trailing_separator_stripped() {
        let args = parse_args_from(vec!["yamlnorm", "config/"]).unwrap();
        assert_eq!(args.directory, "config");
    }

    #[test]
    fn test_only_one_separator_stripped() {
        assert_eq!(strip_trailing_separator("config//"), "config/");
        assert_eq!(strip_trailing_separator("/"), "/");
        assert_eq!(strip_trailing_separator("/etc/app/"), "/etc/app");
    }

    #[test]
    fn test_no_arguments_rejected() {
        let err = parse_args_from(vec!["yamlnorm"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_two_arguments_rejected() {
        let err = parse_args_from(vec!["yamlnorm", "a", "b"]).unwrap_err();
        assert!(!matches!(
            err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        ));
    }

    #[test]
    fn test_help_flag() {
        let err = parse_args_from(vec!["yamlnorm", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = parse_args_from(vec!["yamlnorm", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
