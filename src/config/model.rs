use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// Runtime configuration for a check run. Constructed once at startup and
/// read-only afterwards; check logic never reaches for ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub checks: ChecksConfig,
}

/// Which files a run looks at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilesConfig {
    /// Glob patterns resolved against the working directory. Directories
    /// never match; two patterns matching the same file yield one path.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Glob patterns removed from the match set.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Enabled/disabled state of each check.
///
/// The Unix line-ending check has no flag: it is always active, since the
/// other checks rely on plain `\n` line splitting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecksConfig {
    /// Report files whose bytes are not well-formed UTF-8. Decoding itself
    /// always runs; with this off an undecodable file is skipped silently.
    #[serde(default = "default_true")]
    pub encoding: bool,

    /// Require non-empty files to end in exactly one newline.
    #[serde(default = "default_true")]
    pub trailing_newline: bool,

    /// Report lines with trailing whitespace.
    #[serde(default = "default_true")]
    pub trailing_whitespace: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            encoding: true,
            trailing_newline: true,
            trailing_whitespace: true,
        }
    }
}

impl Config {
    /// Commented starting-point configuration written by `filelint init`.
    pub const TEMPLATE: &str = r#"# filelint configuration

[files]
# Glob patterns resolved against the working directory.
patterns = ["src/**/*.rs", "*.md"]
# Glob patterns removed from the match set.
exclude = ["target/**"]

[checks]
# Report files that are not well-formed UTF-8.
encoding = true
# Require non-empty files to end in exactly one newline.
trailing_newline = true
# Report lines with trailing whitespace.
trailing_whitespace = true
"#;
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
