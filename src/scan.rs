//! Directory listing.
//!
//! [`scan_directory`] reads the immediate children of a directory, in the
//! order the filesystem returns them, and records whether each one is a
//! regular file. Nothing is recursed into and nothing is re-sorted.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// One immediate child of the scanned directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: OsString,
    is_file: bool,
}

impl DirectoryEntry {
    #[must_use]
    pub fn new(name: impl Into<OsString>, is_file: bool) -> Self {
        DirectoryEntry {
            name: name.into(),
            is_file,
        }
    }

    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Regular file (symlinks are not followed)
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.is_file
    }

    /// Extension without the leading dot, if the name has one and it is UTF-8
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.name).extension().and_then(OsStr::to_str)
    }

    /// Full path of this entry inside `directory`
    #[must_use]
    pub fn path_in(&self, directory: &Path) -> PathBuf {
        directory.join(&self.name)
    }
}

/// Check that `path` exists and is a directory
pub fn ensure_directory(path: &Path) -> Result<(), Error> {
    let metadata = fs::metadata(path).map_err(|e| unavailable(path, &e))?;
    if metadata.is_dir() {
        Ok(())
    } else {
        Err(Error::DirectoryUnavailable {
            path: path.display().to_string(),
            reason: "not a directory".to_string(),
        })
    }
}

/// List the immediate entries of `path`
pub fn scan_directory(path: &Path) -> Result<Vec<DirectoryEntry>, Error> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| unavailable(path, &e))? {
        let entry = entry.map_err(|e| unavailable(path, &e))?;
        let file_type = entry.file_type().map_err(|e| unavailable(path, &e))?;
        entries.push(DirectoryEntry::new(entry.file_name(), file_type.is_file()));
    }
    tracing::debug!(directory = %path.display(), count = entries.len(), "scanned directory");
    Ok(entries)
}

fn unavailable(path: &Path, err: &io::Error) -> Error {
    Error::DirectoryUnavailable {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
