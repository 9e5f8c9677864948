//! yamlnorm - Normalizer for the YAML files in a directory
//!
//! Sorts mapping keys at every level, re-indents with four spaces and
//! separates top-level entries with a blank line.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod process;
pub mod scan;

// Re-export commonly used types
pub use cli::{build_cli, parse_args_from, CliArgs};
pub use config::Config;
pub use error::{Error, Result};
pub use format::{canonicalize, canonicalize_with, Document};
pub use message::{format_message, Severity};
pub use process::{normalize_directory, process_entry, run, ProcessingOutcome, RunSummary};
pub use scan::{scan_directory, DirectoryEntry};
