//! File-backed session store.
//!
//! Persists the current session as a small JSON file so the token survives
//! process restarts, the way browser session storage survives page
//! navigations. The on-disk keys are the storage keys the backend's web
//! client used: `auth-token` and `is-admin` (the admin flag as the string
//! literal `"true"`/`"false"`).

use crate::paths::{LadlePaths, ServiceType};
use anyhow::{Context, Result, ensure};
use ladle_core::session::{Session, SessionStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// On-disk shape of the session file.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(rename = "auth-token")]
    auth_token: String,
    #[serde(rename = "is-admin")]
    is_admin: String,
}

/// `SessionStore` implementation backed by a JSON file.
pub struct FileSessionStore {
    file_path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store writing to the given file path.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Creates a store at the session path of the given base directory,
    /// creating the directory if needed.
    pub fn from_paths(paths: &LadlePaths) -> Result<Self> {
        paths.ensure_base_dir()?;
        Ok(Self::new(paths.get_path(ServiceType::Session)))
    }
}

impl SessionStore for FileSessionStore {
    fn store(&self, session: &Session) -> Result<()> {
        ensure!(!session.token.is_empty(), "session token must not be empty");

        let flag = if session.is_admin { "true" } else { "false" };
        let persisted = PersistedSession {
            auth_token: session.token.clone(),
            is_admin: flag.to_string(),
        };
        let json = serde_json::to_string_pretty(&persisted)
            .context("Failed to serialize session data")?;

        fs::write(&self.file_path, json)
            .with_context(|| format!("Failed to write session file: {:?}", self.file_path))?;

        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read session file: {:?}", self.file_path))?;
        let persisted: PersistedSession =
            serde_json::from_str(&json).context("Failed to deserialize session data")?;

        // An empty token means no session, whatever else the file says.
        if persisted.auth_token.is_empty() {
            return Ok(None);
        }

        Ok(Some(Session::new(
            persisted.auth_token,
            Session::admin_flag(&persisted.is_admin),
        )))
    }

    fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)
                .with_context(|| format!("Failed to delete session file: {:?}", self.file_path))?;
        }

        Ok(())
    }
}
