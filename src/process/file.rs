//! Per-file processing
//!
//! Decides whether a directory entry is a candidate, and for YAML files runs
//! read → canonicalize → write. Every failure stays inside the returned
//! [`ProcessingOutcome`]; nothing here aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::Config;
use crate::format::canonicalize_with;
use crate::message::{format_message, Severity};
use crate::scan::DirectoryEntry;
use crate::Result;

/// What happened to one candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    /// Regular file without an eligible extension; left untouched
    Skipped { path: PathBuf },
    /// Rewritten with canonical content
    Processed { path: PathBuf },
    /// Read, parse, or write failed; the file on disk is unchanged unless the
    /// write itself failed part way
    Failed { path: PathBuf, reason: String },
}

impl ProcessingOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ProcessingOutcome::Skipped { path }
            | ProcessingOutcome::Processed { path }
            | ProcessingOutcome::Failed { path, .. } => path,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            ProcessingOutcome::Skipped { .. } => Severity::Info,
            ProcessingOutcome::Processed { .. } => Severity::Success,
            ProcessingOutcome::Failed { .. } => Severity::Error,
        }
    }

    /// Whether the status line belongs on standard error
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, ProcessingOutcome::Failed { .. })
    }

    /// Status line text, without color
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ProcessingOutcome::Skipped { path } => format!("{} SKIPPED", path.display()),
            ProcessingOutcome::Processed { path } => format!("{} processed", path.display()),
            ProcessingOutcome::Failed { path, reason } => {
                format!("{} ERROR : \n{reason}", path.display())
            }
        }
    }

    /// Colored status line, newline-terminated
    #[must_use]
    pub fn status_line(&self) -> String {
        format_message(&self.message(), self.severity())
    }
}

/// Process one directory entry
///
/// Returns `None` for anything that is not a regular file; those entries are
/// not candidates and produce no status line.
#[must_use]
pub fn process_entry(
    directory: &Path,
    entry: &DirectoryEntry,
    config: &Config,
) -> Option<ProcessingOutcome> {
    if !entry.is_file() {
        return None;
    }

    let path = entry.path_in(directory);
    let eligible = entry
        .extension()
        .is_some_and(|ext| config.accepts_extension(ext));
    if !eligible {
        tracing::debug!(path = %path.display(), "skipping non-YAML file");
        return Some(ProcessingOutcome::Skipped { path });
    }

    let outcome = match normalize_file(&path, config) {
        Ok(()) => ProcessingOutcome::Processed { path },
        Err(e) => ProcessingOutcome::Failed {
            path,
            reason: format!("{e:#}"),
        },
    };
    Some(outcome)
}

/// Rewrite one file in canonical form
///
/// Canonicalization completes before the write starts, so a parse failure
/// leaves the file byte-for-byte intact.
pub fn normalize_file(path: &Path, config: &Config) -> Result<()> {
    let raw = fs::read_to_string(path).context("failed to read file")?;
    let canonical = canonicalize_with(&raw, config)?;
    fs::write(path, &canonical).context("failed to write file")?;
    tracing::debug!(
        path = %path.display(),
        bytes_in = raw.len(),
        bytes_out = canonical.len(),
        "normalized"
    );
    Ok(())
}
