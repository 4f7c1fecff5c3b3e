mod line_ending;
mod trailing_newline;
mod trailing_whitespace;

pub use line_ending::LineEndingCheck;
pub use trailing_newline::TrailingNewlineCheck;
pub use trailing_whitespace::TrailingWhitespaceCheck;

use std::path::{Path, PathBuf};

use crate::config::ChecksConfig;
use crate::text::LineIndex;

/// One file's decoded content, owned by a single check pass and discarded
/// once that file's findings are collected.
pub struct FileContent<'a> {
    path: &'a Path,
    bytes: &'a [u8],
    text: &'a str,
    index: LineIndex,
}

impl<'a> FileContent<'a> {
    /// Wrap already-validated content. `text` must be the decoded form of
    /// `bytes`; the line index is built once here and shared by all checks
    /// so every check reports line numbers from the same mapping.
    #[must_use]
    pub fn new(path: &'a Path, bytes: &'a [u8], text: &'a str) -> Self {
        Self {
            path,
            bytes,
            text,
            index: LineIndex::new(text),
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'a Path {
        self.path
    }

    #[must_use]
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// 1-based line number of the byte at `offset`.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        self.index.line_of(offset)
    }

    /// Total number of `\n` in the file.
    #[must_use]
    pub fn newline_count(&self) -> usize {
        self.index.newline_count()
    }
}

/// One reported rule violation. Immutable once created; does not borrow
/// file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub path: PathBuf,
    /// Machine-stable identifier of the violated rule (check id + kind).
    pub title: &'static str,
    /// Human-readable explanation.
    pub message: String,
    /// 1-based line, absent for file-global violations (encoding, I/O).
    pub line: Option<usize>,
}

impl Finding {
    #[must_use]
    pub fn at_line(path: &Path, title: &'static str, message: String, line: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            title,
            message,
            line: Some(line),
        }
    }

    #[must_use]
    pub fn file_global(path: &Path, title: &'static str, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            title,
            message,
            line: None,
        }
    }
}

/// Binary pass/fail result at file or run granularity. There is no warning
/// state: any finding makes the file (and so the run) an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Ok,
    Error,
}

impl Outcome {
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    #[must_use]
    pub const fn from_error(error: bool) -> Self {
        if error { Self::Error } else { Self::Ok }
    }
}

/// A single unit of validation over one decoded file.
///
/// Checks only see content that already decoded as UTF-8; the encoding gate
/// lives in the engine. Each check decides its own reporting policy (stop at
/// first occurrence vs. report every line) as part of its contract.
pub trait Check: Send + Sync {
    /// Machine-stable check identifier.
    fn id(&self) -> &'static str;

    fn run(&self, file: &FileContent<'_>) -> Vec<Finding>;
}

/// Build the ordered check set for a run.
///
/// The Unix line-ending check is always present and runs first; it gives the
/// later checks license to split on plain `\n`. Optional checks follow in a
/// fixed order so findings are deterministic.
#[must_use]
pub fn build_checks(config: &ChecksConfig) -> Vec<Box<dyn Check>> {
    let mut checks: Vec<Box<dyn Check>> = vec![Box::new(LineEndingCheck)];
    if config.trailing_newline {
        checks.push(Box::new(TrailingNewlineCheck));
    }
    if config.trailing_whitespace {
        checks.push(Box::new(TrailingWhitespaceCheck));
    }
    checks
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
