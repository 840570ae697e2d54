//! Scanner Error Types
//!
//! Only traversal-level failures are errors. Problems with individual files
//! are reported as [`FileOutcome::Skipped`](super::types::FileOutcome) and
//! never abort a scan.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Root directory is missing or cannot be listed
    #[error("{message}")]
    Root {
        path: PathBuf,
        message: String,
        #[source]
        source: io::Error,
    },

    /// Writing scan results failed
    #[error("Failed to write scan output: {0}")]
    Output(#[from] io::Error),
}

impl ScanError {
    pub fn root(path: &Path, source: io::Error) -> Self {
        let message = format!(
            "Cannot read root directory '{}': {}",
            path.display(),
            source
        );
        ScanError::Root {
            path: path.to_path_buf(),
            message,
            source,
        }
    }
}

impl crate::core::error_handling::ContextualError for ScanError {
    fn is_user_actionable(&self) -> bool {
        match self {
            ScanError::Root { .. } => true, // User can point at another directory
            ScanError::Output(_) => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ScanError::Root { message, .. } => Some(message),
            ScanError::Output(_) => None,
        }
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
