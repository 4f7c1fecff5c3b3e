use std::fmt::Write;

use crate::engine::RunReport;
use crate::error::Result;

use super::OutputFormatter;

/// Emits one GitHub Actions workflow command per finding.
///
/// The runner turns each `::error` line into an annotation attached to the
/// named file and line, which is how findings surface on pull requests.
pub struct GithubFormatter;

impl OutputFormatter for GithubFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();
        for finding in report.findings() {
            let file = escape_property(&finding.path.display().to_string());
            let title = escape_property(finding.title);
            let message = escape_data(&finding.message);
            match finding.line {
                Some(line) => {
                    let _ = writeln!(
                        output,
                        "::error file={file},line={line},title={title}::{message}"
                    );
                }
                None => {
                    let _ = writeln!(output, "::error file={file},title={title}::{message}");
                }
            }
        }
        Ok(output)
    }
}

// Escaping rules from the workflow-command grammar: the message part only
// escapes %, CR and LF; property values additionally escape the property
// delimiters.

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
