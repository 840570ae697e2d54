//! Scanner Traits

use super::error::ScanResult;
use super::types::{FileOutcome, ScanStats};

/// Receiver for scan results
///
/// `on_file` is called once per candidate file as soon as it has been
/// examined; `on_complete` exactly once after the whole tree was traversed.
pub trait ScanSink {
    fn on_file(&mut self, outcome: &FileOutcome) -> ScanResult<()>;

    fn on_complete(&mut self, _stats: &ScanStats) -> ScanResult<()> {
        Ok(())
    }
}

/// Collects every outcome, mainly for tests and library callers
impl ScanSink for Vec<FileOutcome> {
    fn on_file(&mut self, outcome: &FileOutcome) -> ScanResult<()> {
        self.push(outcome.clone());
        Ok(())
    }
}
