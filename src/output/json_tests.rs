use std::path::Path;

use crate::check::{Finding, Outcome};
use crate::engine::{FileReport, RunReport};

use super::*;

fn sample_report() -> RunReport {
    RunReport {
        files: vec![
            FileReport {
                path: Path::new("good.txt").to_path_buf(),
                findings: Vec::new(),
                outcome: Outcome::Ok,
            },
            FileReport {
                path: Path::new("bad.txt").to_path_buf(),
                findings: vec![
                    Finding::at_line(
                        Path::new("bad.txt"),
                        "trailing-newline/missing",
                        "file does not end with a newline".to_string(),
                        4,
                    ),
                    Finding::file_global(
                        Path::new("bad.txt"),
                        "io/read",
                        "failed to read file: permission denied".to_string(),
                    ),
                ],
                outcome: Outcome::Error,
            },
        ],
    }
}

#[test]
fn json_summary_counts() {
    let output = JsonFormatter.format(&sample_report()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_files"], 2);
    assert_eq!(parsed["summary"]["passed"], 1);
    assert_eq!(parsed["summary"]["failed"], 1);
    assert_eq!(parsed["summary"]["findings"], 2);
}

#[test]
fn json_findings_carry_location() {
    let output = JsonFormatter.format(&sample_report()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    let findings = parsed["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0]["path"], "bad.txt");
    assert_eq!(findings[0]["title"], "trailing-newline/missing");
    assert_eq!(findings[0]["line"], 4);
}

#[test]
fn file_global_finding_omits_line() {
    let output = JsonFormatter.format(&sample_report()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    let findings = parsed["findings"].as_array().unwrap();
    assert!(findings[1].get("line").is_none());
}

#[test]
fn empty_report_serializes() {
    let output = JsonFormatter.format(&RunReport::default()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["summary"]["total_files"], 0);
    assert_eq!(parsed["findings"].as_array().unwrap().len(), 0);
}
