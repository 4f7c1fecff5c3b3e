use serde::Serialize;

use crate::check::Finding;
use crate::engine::RunReport;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    findings: Vec<JsonFinding>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    findings: usize,
}

#[derive(Serialize)]
struct JsonFinding {
    path: String,
    title: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: report.files.len(),
                passed: report.passed_count(),
                failed: report.failed_count(),
                findings: report.finding_count(),
            },
            findings: report.findings().map(convert_finding).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_finding(finding: &Finding) -> JsonFinding {
    JsonFinding {
        path: finding.path.display().to_string(),
        title: finding.title.to_string(),
        message: finding.message.clone(),
        line: finding.line,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
