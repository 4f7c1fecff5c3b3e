//! Byte decoding and line addressing for file contents.
//!
//! All line numbers in this crate are 1-based and derived from `\n` (0x0A)
//! positions. Counting newlines over raw bytes and over decoded characters
//! always agrees: 0x0A never occurs as a UTF-8 continuation byte, so every
//! 0x0A byte is a complete `\n` character. Checks may therefore work on
//! whichever representation is most convenient.

use thiserror::Error;

/// A file's bytes are not well-formed UTF-8.
///
/// Carries no byte offset on purpose: invalid encoding is a file-global
/// condition, and a single finding per file is enough to drive a fix
/// (re-encode the whole file).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("file content is not valid UTF-8")]
pub struct EncodingError;

/// Validate `bytes` as well-formed UTF-8 and borrow it as text.
///
/// Empty input is valid UTF-8 (empty text, not an error). On success the
/// returned `&str` aliases `bytes`, so re-encoding trivially round-trips.
///
/// # Errors
/// Returns [`EncodingError`] for overlong encodings, surrogate code points,
/// truncated multi-byte sequences, or stray continuation bytes.
pub fn decode(bytes: &[u8]) -> Result<&str, EncodingError> {
    std::str::from_utf8(bytes).map_err(|_| EncodingError)
}

/// Byte offset of every `\n` in a file, computed once and read-only after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    newline_offsets: Vec<usize>,
}

impl LineIndex {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let newline_offsets = text
            .bytes()
            .enumerate()
            .filter(|&(_, byte)| byte == b'\n')
            .map(|(offset, _)| offset)
            .collect();
        Self { newline_offsets }
    }

    /// 1-based line number of the byte at `offset`.
    ///
    /// Counts the newlines strictly before `offset`, plus one. The `\n`
    /// terminating a line thus still belongs to that line. Monotonic:
    /// `a <= b` implies `line_of(a) <= line_of(b)`.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        self.newline_offsets.partition_point(|&pos| pos < offset) + 1
    }

    /// Total number of `\n` in the file.
    #[must_use]
    pub fn newline_count(&self) -> usize {
        self.newline_offsets.len()
    }
}

/// Split `text` into logical lines on `\n` boundaries.
///
/// The empty segment after a final `\n` is not a line: `"a\nb\n"` yields
/// `["a", "b"]` and the empty string yields nothing. The final `\n` itself
/// still counts toward [`LineIndex::newline_count`], which is the notion the
/// trailing-newline check works with; the two must not be conflated.
pub fn split_lines(text: &str) -> std::str::SplitTerminator<'_, char> {
    text.split_terminator('\n')
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
