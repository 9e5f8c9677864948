//! Run driver
//!
//! [`run`] is the whole program minus process setup: it takes the argument
//! vector and the two output streams, and returns the exit code. `main` only
//! installs logging and forwards the real stdio handles.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use clap::error::ErrorKind;

use crate::cli::parse_args_from;
use crate::config::Config;
use crate::error::Error;
use crate::message::{format_message, Severity};
use crate::process::file::{process_entry, ProcessingOutcome};
use crate::scan::{ensure_directory, scan_directory};
use crate::Result;

/// Exit code for a run that reached every entry
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code when the run dies on something other than a typed [`Error`]
pub const EXIT_FAILURE: u8 = 1;

/// Counts of per-file outcomes for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &ProcessingOutcome) {
        match outcome {
            ProcessingOutcome::Skipped { .. } => self.skipped += 1,
            ProcessingOutcome::Processed { .. } => self.processed += 1,
            ProcessingOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Run the tool and return its exit code
///
/// Per-file failures do not change the exit code; only a bad invocation or
/// an unavailable directory does.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    match try_run(args, out, err) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            let code = e.downcast_ref::<Error>().map_or(EXIT_FAILURE, Error::exit_code);
            tracing::debug!(error = %format!("{e:#}"), code, "run aborted");
            let _ = err.write_all(format_message(&format!("{e:#}"), Severity::Error).as_bytes());
            code
        }
    }
}

fn try_run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> Result<RunSummary>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let cli = match parse_args_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e.render())?;
            return Ok(RunSummary::default());
        }
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "rejected arguments");
            return Err(Error::Invocation.into());
        }
    };

    normalize_directory(Path::new(&cli.directory), &Config::default(), out, err)
}

/// Normalize every YAML file directly inside `directory`
///
/// Fails with [`Error::DirectoryUnavailable`] before touching any file if the
/// directory is missing, is not a directory, or cannot be listed, and with
/// [`Error::InvalidConfig`] if `config` does not validate.
pub fn normalize_directory<O: Write, E: Write>(
    directory: &Path,
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> Result<RunSummary> {
    if let Some(problem) = config.validate() {
        return Err(Error::InvalidConfig(problem).into());
    }
    ensure_directory(directory)?;
    let entries = scan_directory(directory)?;

    let mut summary = RunSummary::default();
    for entry in &entries {
        let Some(outcome) = process_entry(directory, entry, config) else {
            continue;
        };
        summary.record(&outcome);
        let line = outcome.status_line();
        if outcome.is_failure() {
            err.write_all(line.as_bytes())?;
        } else {
            out.write_all(line.as_bytes())?;
        }
    }

    tracing::info!(
        directory = %directory.display(),
        processed = summary.processed,
        skipped = summary.skipped,
        failed = summary.failed,
        "run complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn run_with(args: &[&str]) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_no_arguments() {
        let (code, out, err) = run_with(&["yamlnorm"]);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.contains("expected exactly one argument"));
    }

    #[test]
    fn test_two_arguments_touch_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.yaml");
        fs::write(&path, "b: 2\na: 1\n").unwrap();
        let dir_arg = dir.path().to_str().unwrap();

        let (code, _, err) = run_with(&["yamlnorm", dir_arg, dir_arg]);

        assert_eq!(code, 1);
        assert!(err.contains("expected exactly one argument"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "b: 2\na: 1\n");
    }

    #[test]
    fn test_help_exits_zero() {
        let (code, out, err) = run_with(&["yamlnorm", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("DIRECTORY"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_missing_directory_halts() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let (code, out, err) = run_with(&["yamlnorm", missing.to_str().unwrap()]);

        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("is not available"));
        assert!(!missing.exists());
    }

    #[test]
    fn test_file_instead_of_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.yaml");
        fs::write(&file, "b: 2\na: 1\n").unwrap();

        let (code, _, err) = run_with(&["yamlnorm", file.to_str().unwrap()]);

        assert_eq!(code, 2);
        assert!(err.contains("not a directory"));
        assert_eq!(fs::read_to_string(&file).unwrap(), "b: 2\na: 1\n");
    }

    #[test]
    fn test_summary_counts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.yaml"), "b: 2\na: 1\n").unwrap();
        fs::write(dir.path().join("b.yml"), "x: [\n").unwrap();
        fs::write(dir.path().join("c.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("d.yaml")).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary =
            normalize_directory(dir.path(), &Config::default(), &mut out, &mut err).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                processed: 1,
                skipped: 1,
                failed: 1,
            }
        );
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("a.yaml processed"));
        assert!(out.contains("c.json SKIPPED"));
        assert!(err.contains("b.yml ERROR : "));
        assert!(!out.contains("d.yaml"));
        assert!(!err.contains("d.yaml"));
    }

    #[test]
    fn test_invalid_config_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.yaml");
        fs::write(&path, "b: 2\na: 1\n").unwrap();
        let config = Config {
            indent: 0,
            ..Default::default()
        };

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = normalize_directory(dir.path(), &config, &mut out, &mut err);

        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::InvalidConfig(_))
        ));
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "b: 2\na: 1\n");
    }

    #[test]
    fn test_failures_keep_exit_code_zero() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.yaml"), "a: 1\n  b: 2\n").unwrap();

        let (code, _, err) = run_with(&["yamlnorm", dir.path().to_str().unwrap()]);

        assert_eq!(code, 0);
        assert!(err.contains("bad.yaml ERROR : "));
    }
}
