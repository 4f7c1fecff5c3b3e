use super::{Check, FileContent, Finding};

/// Requires non-empty files to end in exactly one `\n`.
///
/// Only the last two bytes and the global newline count matter; newline is
/// ASCII, so byte-level inspection is equivalent to character-level once the
/// content has decoded as UTF-8. Empty files satisfy the rule by policy, and
/// "missing" and "extra" are mutually exclusive conditions.
pub struct TrailingNewlineCheck;

impl Check for TrailingNewlineCheck {
    fn id(&self) -> &'static str {
        "trailing-newline"
    }

    fn run(&self, file: &FileContent<'_>) -> Vec<Finding> {
        let bytes = file.bytes();
        let Some(&last) = bytes.last() else {
            return Vec::new();
        };
        let line = file.newline_count() + 1;

        if last != b'\n' {
            return vec![Finding::at_line(
                file.path(),
                "trailing-newline/missing",
                "file does not end with a newline".to_string(),
                line,
            )];
        }
        if bytes.len() > 1 && bytes[bytes.len() - 2] == b'\n' {
            return vec![Finding::at_line(
                file.path(),
                "trailing-newline/extra",
                "file ends with more than one newline".to_string(),
                line,
            )];
        }
        Vec::new()
    }
}

#[cfg(test)]
#[path = "trailing_newline_tests.rs"]
mod tests;
