//! Hosting-environment input overrides.
//!
//! When filelint runs inside a GitHub Action the wrapper exposes its inputs
//! the way the actions toolkit does: `INPUT_FILES` carries one glob pattern
//! per line and the `INPUT_CHECK_*` variables carry booleans. These are read
//! once at startup and folded into the [`Config`]; nothing below the config
//! layer touches the environment.

use super::Config;

pub const INPUT_FILES: &str = "INPUT_FILES";
pub const INPUT_CHECK_UTF8: &str = "INPUT_CHECK_UTF8";
pub const INPUT_CHECK_TRAILING_NEWLINE: &str = "INPUT_CHECK_TRAILING_NEWLINE";
pub const INPUT_CHECK_TRAILING_WHITESPACE: &str = "INPUT_CHECK_TRAILING_WHITESPACE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub files: Option<Vec<String>>,
    pub check_utf8: Option<bool>,
    pub check_trailing_newline: Option<bool>,
    pub check_trailing_whitespace: Option<bool>,
}

impl EnvOverrides {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            files: std::env::var(INPUT_FILES)
                .ok()
                .map(|raw| parse_multiline(&raw)),
            check_utf8: read_bool(INPUT_CHECK_UTF8),
            check_trailing_newline: read_bool(INPUT_CHECK_TRAILING_NEWLINE),
            check_trailing_whitespace: read_bool(INPUT_CHECK_TRAILING_WHITESPACE),
        }
    }

    /// Fold present inputs into `config`. An empty `files` input leaves the
    /// configured patterns untouched.
    pub fn apply(&self, config: &mut Config) {
        if let Some(files) = &self.files
            && !files.is_empty()
        {
            config.files.patterns.clone_from(files);
        }
        if let Some(enabled) = self.check_utf8 {
            config.checks.encoding = enabled;
        }
        if let Some(enabled) = self.check_trailing_newline {
            config.checks.trailing_newline = enabled;
        }
        if let Some(enabled) = self.check_trailing_whitespace {
            config.checks.trailing_whitespace = enabled;
        }
    }
}

fn read_bool(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|raw| parse_bool(&raw))
}

/// One value per line, surrounding whitespace trimmed, blank lines dropped
/// (`getMultilineInput` semantics).
#[must_use]
pub fn parse_multiline(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// The YAML 1.2 booleans accepted by `getBooleanInput`. Anything else is
/// treated as absent rather than fatal.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
