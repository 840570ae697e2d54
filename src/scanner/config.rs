//! Scan configuration
//!
//! An immutable description of what to scan: the root directory, the literal
//! to look for, the path markers that exclude whole subtrees and the file
//! suffixes that qualify a file for searching.

use std::path::{Path, PathBuf};

/// Directory scanned when no root is configured
pub const DEFAULT_ROOT: &str = ".";

/// Literal searched for when no target is configured
pub const DEFAULT_TARGET: &str = "boldss";

/// Path substrings that exclude a directory and everything below it
pub const DEFAULT_EXCLUDE_MARKERS: &[&str] = &["node_modules", ".next", ".git"];

/// File name suffixes of the source files that get searched
pub const DEFAULT_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".js", ".jsx"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    root: PathBuf,
    target: String,
    exclude_markers: Vec<String>,
    extensions: Vec<String>,
}

impl ScanConfig {
    pub fn new(
        root: impl Into<PathBuf>,
        target: impl Into<String>,
        exclude_markers: Vec<String>,
        extensions: Vec<String>,
    ) -> Self {
        Self {
            root: root.into(),
            target: target.into(),
            exclude_markers,
            extensions,
        }
    }

    /// Same configuration, different root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Same configuration, different target
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn exclude_markers(&self) -> &[String] {
        &self.exclude_markers
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// True if any exclusion marker occurs anywhere in `path`.
    ///
    /// Plain substring containment on the full path, so `.git` also excludes
    /// `.github`. Applied to file paths as well as directories, so a file
    /// whose own name contains a marker is never reported.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude_markers
            .iter()
            .any(|marker| path_str.contains(marker.as_str()))
    }

    /// True if `file_name` ends with one of the configured extensions (case-sensitive)
    pub fn is_included(&self, file_name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_ROOT,
            DEFAULT_TARGET,
            DEFAULT_EXCLUDE_MARKERS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        )
    }
}
