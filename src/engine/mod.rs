use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::check::{self, Check, FileContent, Finding, Outcome};
use crate::config::ChecksConfig;
use crate::output::ScanProgress;
use crate::text;

/// Findings and outcome for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
    pub outcome: Outcome,
}

impl FileReport {
    fn new(path: &Path, findings: Vec<Finding>) -> Self {
        let outcome = Outcome::from_error(!findings.is_empty());
        Self {
            path: path.to_path_buf(),
            findings,
            outcome,
        }
    }
}

/// Aggregated result of one engine run, in path-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// `Error` if any file produced at least one finding.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_error(self.files.iter().any(|f| f.outcome.is_error()))
    }

    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.files.iter().flat_map(|f| f.findings.iter())
    }

    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.files.iter().map(|f| f.findings.len()).sum()
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.files.len() - self.failed_count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome.is_error())
            .count()
    }
}

/// Runs the configured check set over a path set.
///
/// Per file: read bytes, decode as UTF-8, then apply every check. The
/// decode step is the only hard gate; an undecodable file skips all checks.
/// A line-ending finding does not stop the optional checks, which analyze
/// whitespace and newline structure meaningfully even with stray `\r`s.
pub struct CheckEngine {
    checks: Vec<Box<dyn Check>>,
    report_encoding: bool,
}

impl CheckEngine {
    #[must_use]
    pub fn new(config: &ChecksConfig) -> Self {
        Self {
            checks: check::build_checks(config),
            report_encoding: config.encoding,
        }
    }

    /// Check every path and aggregate per-file reports.
    ///
    /// Files are independent, so they are processed in parallel, one file
    /// wholly owned by one worker; `collect` restores path-set order, which
    /// makes repeated runs over unchanged input byte-identical. One bad file
    /// never aborts the run.
    #[must_use]
    pub fn run(&self, paths: &[PathBuf], quiet: bool) -> RunReport {
        let progress = ScanProgress::new(paths.len() as u64, quiet);
        let files: Vec<FileReport> = paths
            .par_iter()
            .map(|path| {
                let report = self.check_file(path);
                progress.inc();
                report
            })
            .collect();
        progress.finish();
        RunReport { files }
    }

    fn check_file(&self, path: &Path) -> FileReport {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                // Unreadable files are findings, not run-fatal errors.
                return FileReport::new(
                    path,
                    vec![Finding::file_global(
                        path,
                        "io/read",
                        format!("failed to read file: {err}"),
                    )],
                );
            }
        };

        let Ok(decoded) = text::decode(&bytes) else {
            // Nothing downstream can interpret the bytes; skip every check.
            let findings = if self.report_encoding {
                vec![Finding::file_global(
                    path,
                    "encoding/utf-8",
                    "file content is not valid UTF-8".to_string(),
                )]
            } else {
                Vec::new()
            };
            return FileReport::new(path, findings);
        };

        let file = FileContent::new(path, &bytes, decoded);
        let mut findings = Vec::new();
        for check in &self.checks {
            findings.extend(check.run(&file));
        }
        FileReport::new(path, findings)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
