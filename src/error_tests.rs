use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = FilelintError::Config("no patterns given".to_string());
    assert_eq!(err.to_string(), "Configuration error: no patterns given");
}

#[test]
fn error_display_file_read() {
    let err = FilelintError::FileRead {
        path: PathBuf::from("notes.txt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("notes.txt"));
}

#[test]
fn error_display_invalid_pattern() {
    let source = globset::Glob::new("[bad").unwrap_err();
    let err = FilelintError::InvalidPattern {
        pattern: "[bad".to_string(),
        source,
    };
    assert!(err.to_string().contains("[bad"));
}

#[test]
fn error_from_io() {
    let err = FilelintError::from(std::io::Error::other("disk on fire"));
    assert!(matches!(err, FilelintError::Io(_)));
}
