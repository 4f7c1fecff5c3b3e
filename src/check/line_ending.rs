use super::{Check, FileContent, Finding};

/// Rejects carriage returns anywhere in the file.
///
/// Reports only the first occurrence: one finding is enough to signal that
/// the file needs its line endings normalized, and downstream checks keep
/// working on `\n` boundaries regardless.
pub struct LineEndingCheck;

impl Check for LineEndingCheck {
    fn id(&self) -> &'static str {
        "line-ending"
    }

    fn run(&self, file: &FileContent<'_>) -> Vec<Finding> {
        let Some(offset) = file.text().find('\r') else {
            return Vec::new();
        };
        // The newlines strictly before the CR put it on its own line, not
        // the line after it.
        let line = file.line_of(offset);
        vec![Finding::at_line(
            file.path(),
            "line-ending/carriage-return",
            "carriage return found; expected Unix (\\n) line endings".to_string(),
            line,
        )]
    }
}

#[cfg(test)]
#[path = "line_ending_tests.rs"]
mod tests;
