#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the filelint binary.
#[macro_export]
macro_rules! filelint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("filelint"))
    };
}

/// Minimal config enabling every check.
pub const FULL_CONFIG: &str = r#"
[files]
patterns = ["**/*.txt"]

[checks]
encoding = true
trailing_newline = true
trailing_whitespace = true
"#;

/// Temporary directory with helpers for laying out test files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_file_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw bytes (for invalid-UTF-8 fixtures).
    pub fn create_file_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes `.filelint.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".filelint.toml", content);
    }
}
