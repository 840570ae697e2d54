//! CLI display utilities for formatting scan output
//!
//! Plain text on stdout:
//!
//! ```text
//! FOUND in: ./src/app.ts
//! Line 1: const boldss = 1;
//! Search complete.
//! ```
//!
//! Colour only wraps the fixed prefixes; with colour disabled the output is
//! exactly the text above.

use std::io::Write;

use crate::core::styles::StyleRole;
use crate::scanner::error::ScanResult;
use crate::scanner::traits::ScanSink;
use crate::scanner::types::{FileMatch, FileOutcome, ScanStats};

pub const MATCH_HEADER: &str = "FOUND in:";
pub const COMPLETION_MESSAGE: &str = "Search complete.";

/// Writes matches as they arrive and the completion line at the end
pub struct TextReporter<W: Write> {
    out: W,
    use_color: bool,
    report_skipped: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, use_color: bool) -> Self {
        Self {
            out,
            use_color,
            report_skipped: false,
        }
    }

    /// Log unreadable files at warn level instead of staying silent
    pub fn report_skipped(mut self, enabled: bool) -> Self {
        self.report_skipped = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_match(&mut self, file_match: &FileMatch) -> ScanResult<()> {
        writeln!(
            self.out,
            "{} {}",
            StyleRole::Header.paint(MATCH_HEADER, self.use_color),
            StyleRole::Path.paint(&file_match.path.display().to_string(), self.use_color)
        )?;
        for line in &file_match.lines {
            let label = format!("Line {}:", line.line_number);
            writeln!(
                self.out,
                "{} {}",
                StyleRole::LineNumber.paint(&label, self.use_color),
                line.text
            )?;
        }
        Ok(())
    }
}

impl<W: Write> ScanSink for TextReporter<W> {
    fn on_file(&mut self, outcome: &FileOutcome) -> ScanResult<()> {
        match outcome {
            FileOutcome::Matched(file_match) => self.write_match(file_match)?,
            FileOutcome::Skipped { path, reason } if self.report_skipped => {
                log::warn!("Skipped {}: {}", path.display(), reason);
            }
            _ => {}
        }
        Ok(())
    }

    fn on_complete(&mut self, stats: &ScanStats) -> ScanResult<()> {
        writeln!(self.out, "{}", COMPLETION_MESSAGE)?;
        self.out.flush()?;
        if self.report_skipped && stats.files_skipped > 0 {
            log::warn!("{} file(s) could not be read", stats.files_skipped);
        }
        Ok(())
    }
}
