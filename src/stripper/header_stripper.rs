use crate::error::{RepoToolsError, Result};
use crate::ui::OutputFormatter;
use std::path::Path;
use walkdir::WalkDir;

/// The exact first line a headed source file starts with. The second header
/// line is blank; both are removed together.
pub const COPYRIGHT_LINE: &str = "// Copyright 2024 Lie Yan";

/// Only files with this extension are inspected.
pub const SOURCE_EXTENSION: &str = "swift";

/// Outcome of inspecting a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOutcome {
    /// Header found and removed; the file was rewritten in place.
    Stripped,
    /// No header (or fewer than two lines); the file was left untouched.
    Skipped,
}

#[derive(Debug, Default)]
pub struct StripSummary {
    pub files_stripped: usize,
    pub files_skipped: usize,
    pub files_errored: usize,
}

pub struct HeaderStripper {
    copyright_line: &'static str,
    extension: &'static str,
}

impl HeaderStripper {
    pub fn new() -> Self {
        Self {
            copyright_line: COPYRIGHT_LINE,
            extension: SOURCE_EXTENSION,
        }
    }

    /// Walk `root` recursively and strip the header from every matching
    /// source file. Per-file errors are reported and do not abort the walk;
    /// only an invalid root is fatal.
    pub fn strip_tree<P: AsRef<Path>>(
        &self,
        root: P,
        output: &OutputFormatter,
    ) -> Result<StripSummary> {
        let root = root.as_ref();

        if !root.exists() {
            return Err(RepoToolsError::InvalidPath {
                path: root.display().to_string(),
            });
        }
        if !root.is_dir() {
            return Err(RepoToolsError::NotADirectory {
                path: root.display().to_string(),
            });
        }

        let mut summary = StripSummary::default();

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root.display().to_string());
                    output.file_error(&path, &err.to_string());
                    summary.files_errored += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.has_source_extension(entry.path()) {
                continue;
            }

            match self.strip_file(entry.path()) {
                Ok(StripOutcome::Stripped) => {
                    output.removed(entry.path());
                    summary.files_stripped += 1;
                }
                Ok(StripOutcome::Skipped) => {
                    summary.files_skipped += 1;
                }
                Err(err) => {
                    output.file_error(&entry.path().display().to_string(), &err.to_string());
                    summary.files_errored += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Inspect one file and remove the two-line header if it is present.
    /// Lines after the header are written back byte-identical.
    pub fn strip_file(&self, path: &Path) -> Result<StripOutcome> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::InvalidData {
                RepoToolsError::InvalidEncoding {
                    path: path.display().to_string(),
                }
            } else {
                RepoToolsError::Io(err)
            }
        })?;

        if !self.has_header(&content) {
            return Ok(StripOutcome::Skipped);
        }

        let remainder = remainder_after_header(&content);
        std::fs::write(path, remainder)?;

        Ok(StripOutcome::Stripped)
    }

    fn has_header(&self, content: &str) -> bool {
        let mut lines = content.split_inclusive('\n');

        let first = match lines.next() {
            Some(line) => line,
            None => return false,
        };
        let second = match lines.next() {
            Some(line) => line,
            None => return false,
        };

        first.trim() == self.copyright_line && second.trim().is_empty()
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

impl Default for HeaderStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything from the third line onward, terminators included.
fn remainder_after_header(content: &str) -> &str {
    let mut offset = 0;
    for line in content.split_inclusive('\n').take(2) {
        offset += line.len();
    }
    &content[offset..]
}
