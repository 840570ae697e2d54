//! Scanner API
//!
//! Public surface of the scanner, consolidated for use by the application
//! layer and external callers.

pub use crate::scanner::config::{
    ScanConfig, DEFAULT_EXCLUDE_MARKERS, DEFAULT_EXTENSIONS, DEFAULT_ROOT, DEFAULT_TARGET,
};
pub use crate::scanner::error::{ScanError, ScanResult};
pub use crate::scanner::filesystem::{DiskFileSystem, FileSystem, MemoryFileSystem};
pub use crate::scanner::traits::ScanSink;
pub use crate::scanner::types::{FileMatch, FileOutcome, LineMatch, ScanStats, SkipReason};
pub use crate::scanner::walker::Scanner;
