//! Directory traversal
//!
//! Depth-first, top-down walk driven by an explicit stack. Entries are sorted
//! by path so repeated runs over the same tree visit files in the same order.
//! Files of a directory are examined before any of its sub-directories.

use std::path::{Path, PathBuf};

use super::config::ScanConfig;
use super::error::{ScanError, ScanResult};
use super::filesystem::{DiskFileSystem, EntryKind, FileSystem};
use super::search::examine_file;
use super::traits::ScanSink;
use super::types::{FileOutcome, ScanStats};

pub struct Scanner<F: FileSystem = DiskFileSystem> {
    config: ScanConfig,
    fs: F,
}

impl Scanner<DiskFileSystem> {
    pub fn new(config: ScanConfig) -> Self {
        Self::with_filesystem(config, DiskFileSystem)
    }
}

impl<F: FileSystem> Scanner<F> {
    pub fn with_filesystem(config: ScanConfig, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk the configured root and feed every examined file to `sink`.
    ///
    /// Fails only if the root itself cannot be listed or the sink fails.
    /// Sub-directories that cannot be listed are skipped.
    pub fn scan<S: ScanSink + ?Sized>(&self, sink: &mut S) -> ScanResult<ScanStats> {
        let root = self.config.root();
        let mut stats = ScanStats::default();
        let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];

        log::debug!(
            "Scanning {} for '{}' (extensions: {:?}, excluded: {:?})",
            root.display(),
            self.config.target(),
            self.config.extensions(),
            self.config.exclude_markers()
        );

        // The root must be listable even when a marker excludes it
        let mut root_entries = Some(
            self.fs
                .read_dir(root)
                .map_err(|e| ScanError::root(root, e))?,
        );

        while let Some(dir) = stack.pop() {
            if self.config.is_excluded(&dir) {
                log::trace!("Excluded directory {}", dir.display());
                stats.directories_excluded += 1;
                continue;
            }

            let listing = match root_entries.take() {
                Some(entries) => Ok(entries),
                None => self.fs.read_dir(&dir),
            };
            let mut entries = match listing {
                Ok(entries) => entries,
                Err(e) => {
                    log::debug!("Cannot list directory {}: {}", dir.display(), e);
                    stats.directories_unreadable += 1;
                    continue;
                }
            };
            stats.directories_visited += 1;
            entries.sort_by(|a, b| a.path.cmp(&b.path));

            let mut subdirs = Vec::new();
            for entry in entries {
                match entry.kind {
                    EntryKind::Directory => subdirs.push(entry.path),
                    EntryKind::File => {
                        if let Some(outcome) = self.visit_file(&entry.path, &entry.file_name()) {
                            stats.record(&outcome);
                            sink.on_file(&outcome)?;
                        }
                    }
                    EntryKind::Other => {
                        log::trace!("Not following {}", entry.path.display());
                    }
                }
            }

            // Reversed so the first sub-directory is popped next
            stack.extend(subdirs.into_iter().rev());
        }

        log::debug!("Scan finished: {}", stats);
        sink.on_complete(&stats)?;
        Ok(stats)
    }

    /// Collect all outcomes of a scan
    pub fn collect(&self) -> ScanResult<Vec<FileOutcome>> {
        let mut outcomes = Vec::new();
        self.scan(&mut outcomes)?;
        Ok(outcomes)
    }

    fn visit_file(&self, path: &Path, file_name: &str) -> Option<FileOutcome> {
        if !self.config.is_included(file_name) {
            return None;
        }
        // A marker inside the file name itself never reaches the output either
        if self.config.is_excluded(path) {
            log::trace!("Excluded file {}", path.display());
            return None;
        }

        let outcome = examine_file(&self.fs, path, self.config.target());
        if let FileOutcome::Skipped { reason, .. } = &outcome {
            log::debug!("Skipped {}: {}", path.display(), reason);
        }
        Some(outcome)
    }
}
