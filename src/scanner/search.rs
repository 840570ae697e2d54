//! Content search
//!
//! A file is first checked as a whole; only when the full text contains the
//! target are its lines inspected one by one. An occurrence split across a
//! line break therefore produces a file match with no line matches.

use std::path::Path;

use super::filesystem::FileSystem;
use super::types::{FileMatch, FileOutcome, LineMatch, SkipReason};

/// Iterator over lines terminated by `\n`, `\r\n` or a lone `\r`.
///
/// A trailing terminator does not produce an empty final line, an
/// unterminated final line is kept.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &self.rest[..pos];
                let terminator_len = if self.rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[pos + terminator_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

pub fn split_lines(content: &str) -> Lines<'_> {
    Lines { rest: content }
}

/// Search `content` for `target`.
///
/// Returns `None` when the text does not contain the target at all, otherwise
/// the (possibly empty) list of matching lines.
pub fn search_content(content: &str, target: &str) -> Option<Vec<LineMatch>> {
    if !content.contains(target) {
        return None;
    }

    let lines = split_lines(content)
        .enumerate()
        .filter(|(_, line)| line.contains(target))
        .map(|(index, line)| LineMatch {
            line_number: index + 1,
            text: line.trim().to_string(),
        })
        .collect();

    Some(lines)
}

/// Read one file and classify it
pub fn examine_file<F: FileSystem + ?Sized>(fs: &F, path: &Path, target: &str) -> FileOutcome {
    match fs.read_to_string(path) {
        Ok(content) => match search_content(&content, target) {
            Some(lines) => FileOutcome::Matched(FileMatch {
                path: path.to_path_buf(),
                lines,
            }),
            None => FileOutcome::NoMatch {
                path: path.to_path_buf(),
            },
        },
        Err(e) => FileOutcome::Skipped {
            path: path.to_path_buf(),
            reason: SkipReason::from_io_error(&e),
        },
    }
}
