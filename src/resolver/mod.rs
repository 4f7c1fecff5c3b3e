use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use indexmap::IndexSet;
use walkdir::WalkDir;

use crate::error::{FilelintError, Result};

/// Expands glob patterns into a deduplicated set of file paths.
///
/// Matching happens against paths relative to the walk root, so patterns
/// like `src/**/*.rs` behave the same regardless of where the root lives.
/// Directories never match; only regular files are candidates.
pub struct PathResolver {
    include: GlobSet,
    exclude: GlobSet,
}

impl PathResolver {
    /// Compile include and exclude pattern sets.
    ///
    /// # Errors
    /// Returns an error if any pattern is not valid glob syntax.
    pub fn new(patterns: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_glob_set(patterns)?,
            exclude: build_glob_set(exclude)?,
        })
    }

    /// Walk `root` and collect every matching file.
    ///
    /// The result preserves first-seen walk order, deduplicated: a file
    /// matched by several patterns appears exactly once. The order is stable
    /// within a run but not guaranteed lexicographic. Unreadable directory
    /// entries are skipped rather than failing the walk.
    #[must_use]
    pub fn resolve(&self, root: &Path) -> Vec<PathBuf> {
        let mut matched: IndexSet<PathBuf> = IndexSet::new();
        for entry in WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);
            if self.include.is_match(relative) && !self.exclude.is_match(relative) {
                matched.insert(relative.to_path_buf());
            }
        }
        matched.into_iter().collect()
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| FilelintError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| FilelintError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
