use crate::text::split_lines;

use super::{Check, FileContent, Finding};

/// Rejects lines with trailing whitespace.
///
/// Every offending line is reported, not just the first. A line counts as
/// offending when trimming trailing whitespace (`char::is_whitespace`
/// semantics) changes it; lines consisting entirely of whitespace are
/// treated the same as partial trailing whitespace.
pub struct TrailingWhitespaceCheck;

impl Check for TrailingWhitespaceCheck {
    fn id(&self) -> &'static str {
        "trailing-whitespace"
    }

    fn run(&self, file: &FileContent<'_>) -> Vec<Finding> {
        split_lines(file.text())
            .enumerate()
            .filter(|(_, line)| *line != line.trim_end())
            .map(|(idx, _)| {
                Finding::at_line(
                    file.path(),
                    "trailing-whitespace",
                    "line has trailing whitespace".to_string(),
                    idx + 1,
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "trailing_whitespace_tests.rs"]
mod tests;
