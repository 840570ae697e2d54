//! Scanner data types
//!
//! Outcomes are produced one file at a time and handed to a
//! [`ScanSink`](super::traits::ScanSink) immediately; the scanner itself keeps
//! nothing but counters.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A single line containing the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based line index
    pub line_number: usize,
    /// Line content with surrounding whitespace trimmed
    pub text: String,
}

/// A file whose content contains the target
///
/// `lines` may be empty when the target only occurs across a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    pub path: PathBuf,
    pub lines: Vec<LineMatch>,
}

/// Why a candidate file could not be searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Open or read failed (permissions, vanished file, dangling link...)
    Unreadable(io::ErrorKind),
    /// Content is not valid UTF-8
    InvalidEncoding,
}

impl SkipReason {
    pub fn from_io_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::InvalidData => SkipReason::InvalidEncoding,
            kind => SkipReason::Unreadable(kind),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(kind) => write!(f, "unreadable ({})", kind),
            SkipReason::InvalidEncoding => write!(f, "not valid UTF-8"),
        }
    }
}

/// Result of examining one candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Matched(FileMatch),
    NoMatch { path: PathBuf },
    Skipped { path: PathBuf, reason: SkipReason },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Matched(m) => &m.path,
            FileOutcome::NoMatch { path } => path,
            FileOutcome::Skipped { path, .. } => path,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, FileOutcome::Matched(_))
    }
}

/// Counters accumulated over one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub directories_visited: usize,
    pub directories_excluded: usize,
    pub directories_unreadable: usize,
    pub files_examined: usize,
    pub files_matched: usize,
    pub files_skipped: usize,
    pub line_matches: usize,
}

impl ScanStats {
    pub(crate) fn record(&mut self, outcome: &FileOutcome) {
        self.files_examined += 1;
        match outcome {
            FileOutcome::Matched(m) => {
                self.files_matched += 1;
                self.line_matches += m.lines.len();
            }
            FileOutcome::NoMatch { .. } => {}
            FileOutcome::Skipped { .. } => self.files_skipped += 1,
        }
    }
}

impl fmt::Display for ScanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories ({} excluded, {} unreadable), {} files examined, {} matched ({} lines), {} skipped",
            self.directories_visited,
            self.directories_excluded,
            self.directories_unreadable,
            self.files_examined,
            self.files_matched,
            self.line_matches,
            self.files_skipped
        )
    }
}
