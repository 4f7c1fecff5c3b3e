use std::fmt::Write;

use crate::engine::{FileReport, RunReport};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, color: &str, content: &str) -> String {
        if self.use_colors {
            format!("{color}{content}{}", ansi::RESET)
        } else {
            content.to_string()
        }
    }

    fn format_file(&self, file: &FileReport, output: &mut String) {
        if file.outcome.is_error() {
            let header = self.colorize(ansi::RED, "✗");
            let _ = writeln!(output, "{header} {}", file.path.display());
            for finding in &file.findings {
                match finding.line {
                    Some(line) => {
                        let _ = writeln!(
                            output,
                            "  [{}] line {line}: {}",
                            finding.title, finding.message
                        );
                    }
                    None => {
                        let _ = writeln!(output, "  [{}] {}", finding.title, finding.message);
                    }
                }
            }
        } else if self.verbose > 0 {
            let header = self.colorize(ansi::GREEN, "✓");
            let _ = writeln!(output, "{header} {}", file.path.display());
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        for file in &report.files {
            self.format_file(file, &mut output);
        }

        if !output.is_empty() {
            output.push('\n');
        }
        let _ = writeln!(
            output,
            "Summary: {} files checked, {} passed, {} failed, {} finding(s)",
            report.files.len(),
            report.passed_count(),
            report.failed_count(),
            report.finding_count()
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
