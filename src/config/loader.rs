use std::fs;
use std::path::Path;

use crate::error::{FilelintError, Result};

use super::Config;

/// Name of the configuration file discovered in the working directory.
pub const LOCAL_CONFIG_NAME: &str = ".filelint.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to the
    /// built-in defaults when no config file exists.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub struct FileConfigLoader;

impl FileConfigLoader {
    fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let path = Path::new(LOCAL_CONFIG_NAME);
        if path.exists() {
            self.load_from_path(path)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| FilelintError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
