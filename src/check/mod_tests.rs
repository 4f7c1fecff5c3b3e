use std::path::Path;

use crate::config::ChecksConfig;

use super::*;

fn content(text: &str) -> FileContent<'_> {
    FileContent::new(Path::new("sample.txt"), text.as_bytes(), text)
}

#[test]
fn build_checks_all_enabled() {
    let config = ChecksConfig::default();
    let checks = build_checks(&config);
    let ids: Vec<_> = checks.iter().map(|c| c.id()).collect();
    assert_eq!(
        ids,
        vec!["line-ending", "trailing-newline", "trailing-whitespace"]
    );
}

#[test]
fn build_checks_line_ending_always_present() {
    let config = ChecksConfig {
        encoding: false,
        trailing_newline: false,
        trailing_whitespace: false,
    };
    let checks = build_checks(&config);
    let ids: Vec<_> = checks.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["line-ending"]);
}

#[test]
fn build_checks_respects_individual_flags() {
    let config = ChecksConfig {
        encoding: true,
        trailing_newline: false,
        trailing_whitespace: true,
    };
    let checks = build_checks(&config);
    let ids: Vec<_> = checks.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["line-ending", "trailing-whitespace"]);
}

#[test]
fn file_content_exposes_shared_line_index() {
    let file = content("ab\ncd");
    assert_eq!(file.line_of(0), 1);
    assert_eq!(file.line_of(3), 2);
    assert_eq!(file.newline_count(), 1);
    assert_eq!(file.text(), "ab\ncd");
    assert_eq!(file.bytes(), b"ab\ncd");
}

#[test]
fn finding_constructors() {
    let at = Finding::at_line(Path::new("a.txt"), "trailing-whitespace", "msg".to_string(), 3);
    assert_eq!(at.line, Some(3));
    assert_eq!(at.path, Path::new("a.txt"));

    let global = Finding::file_global(Path::new("b.txt"), "encoding/utf-8", "msg".to_string());
    assert_eq!(global.line, None);
}

#[test]
fn outcome_predicates() {
    assert!(Outcome::Error.is_error());
    assert!(!Outcome::Ok.is_error());
    assert_eq!(Outcome::from_error(true), Outcome::Error);
    assert_eq!(Outcome::from_error(false), Outcome::Ok);
    assert_eq!(Outcome::default(), Outcome::Ok);
}
