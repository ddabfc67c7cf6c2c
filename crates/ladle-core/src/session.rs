//! Session model and the storage seam behind it.
//!
//! The session exists only while a user is authenticated: it is created by
//! a successful login, and destroyed by an explicit logout or by the client
//! discarding it after an unauthorized response. The store is an injected
//! trait so workflows stay testable without a real storage backend.

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// An authenticated session: the bearer token plus the admin flag.
///
/// Invariant: the token is non-empty whenever a session exists. `is_admin`
/// is meaningful only while a token is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque credential sent as `Authorization: Bearer <token>`
    pub token: String,
    /// Whether the backend granted admin rights at login
    pub is_admin: bool,
}

impl Session {
    pub fn new(token: impl Into<String>, is_admin: bool) -> Self {
        Self {
            token: token.into(),
            is_admin,
        }
    }

    /// Interprets a persisted admin flag.
    ///
    /// Anything but the exact literal `"true"` reads as false.
    pub fn admin_flag(raw: &str) -> bool {
        raw == "true"
    }
}

/// An abstract store for the single current session.
///
/// There is exactly one session at a time; `store` overwrites any previous
/// one and `clear` removes it. Absence of a stored session is the only
/// logged-out signal — no expiry is tracked client-side.
pub trait SessionStore: Send + Sync {
    /// Persists the session, replacing any previous one.
    fn store(&self, session: &Session) -> Result<()>;

    /// Loads the current session, if any.
    fn load(&self) -> Result<Option<Session>>;

    /// Removes the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;

    /// The current bearer token, if a session is stored.
    fn token(&self) -> Option<String> {
        self.load().ok().flatten().map(|session| session.token)
    }

    /// Whether the current session has admin rights. Defaults to false
    /// when no session is stored.
    fn is_admin(&self) -> bool {
        self.load()
            .ok()
            .flatten()
            .map(|session| session.is_admin)
            .unwrap_or(false)
    }
}

/// In-process implementation backed by a `RwLock`.
///
/// Suitable for tests and for tools that do not need the session to
/// survive the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn store(&self, session: &Session) -> Result<()> {
        ensure!(!session.token.is_empty(), "session token must not be empty");
        let mut guard = self
            .inner
            .write()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        let guard = self
            .inner
            .read()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        Ok(guard.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_then_read() {
        let store = MemorySessionStore::new();
        store.store(&Session::new("tok-1", true)).unwrap();

        assert_eq!(store.token().as_deref(), Some("tok-1"));
        assert!(store.is_admin());
    }

    #[test]
    fn test_clear_removes_session() {
        let store = MemorySessionStore::new();
        store.store(&Session::new("tok-1", false)).unwrap();
        store.clear().unwrap();

        assert_eq!(store.token(), None);
        assert!(!store.is_admin());
    }

    #[test]
    fn test_is_admin_defaults_to_false() {
        let store = MemorySessionStore::new();
        assert!(!store.is_admin());
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let store = MemorySessionStore::new();
        assert!(store.store(&Session::new("", false)).is_err());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_admin_flag_literal() {
        assert!(Session::admin_flag("true"));
        assert!(!Session::admin_flag("True"));
        assert!(!Session::admin_flag("false"));
        assert!(!Session::admin_flag(""));
    }
}
