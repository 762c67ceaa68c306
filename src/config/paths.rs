//! Path management for the portfolio tool
//!
//! Resolves where the optional settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `--config-dir` on the command line (if given)
//! 2. The platform config directory from `directories`, e.g.
//!    `~/.config/portfolio-cli` on Linux

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::PortfolioError;

/// Manages all paths used by the tool
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    base_dir: PathBuf,
}

impl ConfigPaths {
    /// Resolve the platform default config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PortfolioError> {
        let dirs = ProjectDirs::from("", "", "portfolio-cli").ok_or_else(|| {
            PortfolioError::Config("Could not determine a configuration directory".into())
        })?;

        Ok(Self {
            base_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Create ConfigPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve from an optional command-line override
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, PortfolioError> {
        match override_dir {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }
}
