//! Directory processing.
//!
//! This module drives a run over one directory:
//!
//! - [`runner`]: validates the invocation, checks and scans the directory,
//!   and reports one status line per candidate file
//! - [`file`]: filters a single entry by type and extension and rewrites
//!   eligible files in canonical form
//!
//! Files are handled one at a time in the order the directory listing
//! returns them. No outcome for one file influences another.

pub mod file;
pub mod runner;

pub use file::{normalize_file, process_entry, ProcessingOutcome};
pub use runner::{normalize_directory, run, RunSummary, EXIT_FAILURE, EXIT_SUCCESS};
