//! Scanner Component
//!
//! Walks a directory tree, keeps files whose names end with one of the
//! configured extensions outside excluded paths, and searches them for a
//! literal string.
//!
//! ## Core Features
//!
//! - **ScanConfig**: immutable scan parameters with documented defaults
//! - **Scanner**: iterative depth-first walk over a pluggable `FileSystem`
//! - **FileOutcome**: typed per-file result (matched, no match, skipped with reason)
//! - **ScanSink**: streaming receiver; outcomes are handed over one file at a time

pub mod api;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod search;
pub mod traits;
pub mod types;
pub mod walker;

pub use config::ScanConfig;
pub use error::{ScanError, ScanResult};
pub use filesystem::{DiskFileSystem, FileSystem, MemoryFileSystem};
pub use traits::ScanSink;
pub use types::{FileMatch, FileOutcome, LineMatch, ScanStats, SkipReason};
pub use walker::Scanner;
