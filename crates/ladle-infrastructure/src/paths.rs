//! Centralized path management for client-side files.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The files Ladle keeps under its base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// `config.toml` — connection settings
    Config,
    /// `session.json` — the current auth session
    Session,
}

/// Resolves where Ladle keeps its per-user files.
///
/// Defaults to `~/.ladle`; a custom base directory can be supplied for
/// tests or alternate profiles.
#[derive(Debug, Clone)]
pub struct LadlePaths {
    base_dir: PathBuf,
}

impl LadlePaths {
    /// Creates a path resolver rooted at `base_dir`, or at `~/.ladle` when
    /// none is given.
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => {
                let home_dir = dirs::home_dir().context("Failed to get home directory")?;
                home_dir.join(".ladle")
            }
        };

        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Creates the base directory if it doesn't exist yet.
    pub fn ensure_base_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir).with_context(|| {
            format!("Failed to create base directory: {:?}", self.base_dir)
        })?;
        Ok(())
    }

    /// Returns the file path for the given service.
    pub fn get_path(&self, service: ServiceType) -> PathBuf {
        match service {
            ServiceType::Config => self.base_dir.join("config.toml"),
            ServiceType::Session => self.base_dir.join("session.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LadlePaths::new(Some(temp_dir.path())).unwrap();

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.get_path(ServiceType::Config),
            temp_dir.path().join("config.toml")
        );
        assert_eq!(
            paths.get_path(ServiceType::Session),
            temp_dir.path().join("session.json")
        );
    }

    #[test]
    fn test_ensure_base_dir_creates_nested() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("profiles").join("default");
        let paths = LadlePaths::new(Some(&nested)).unwrap();

        paths.ensure_base_dir().unwrap();
        assert!(nested.is_dir());
    }
}
