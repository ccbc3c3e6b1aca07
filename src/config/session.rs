//! Session storage for the token/username pair.
//!
//! The session is external state: it is written by sign-in and read on
//! demand by authenticated calls, never cached by the store.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::credentials::Credentials;

/// Errors that can occur when reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize session: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Persisted session values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    /// Convert to credentials, or `None` if the token is empty.
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::new(&self.token, Some(&self.username))
    }
}

/// Key-value storage owning the session.
pub trait SessionStore: Send + Sync {
    /// Read the current session, if any.
    fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Replace the stored session.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove the stored session.
    fn clear(&self) -> Result<(), SessionError>;

    /// Resolve credentials on demand.
    ///
    /// Read failures are logged and treated as "no credentials", so a
    /// corrupt session file behaves like a signed-out user.
    fn credentials(&self) -> Option<Credentials> {
        match self.load() {
            Ok(session) => session.and_then(|s| s.credentials()),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load session");
                None
            }
        }
    }
}

/// Session kept in a TOML file.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSession {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| SessionError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;

        let session = toml::from_str(&content).map_err(|e| SessionError::ParseError {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let content = toml::to_string(session)?;
        fs::write(&self.path, content).map_err(|e| SessionError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::info!(username = %session.username, "Session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if !self.path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.path).map_err(|e| SessionError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::info!("Session cleared");
        Ok(())
    }
}

/// Session held in memory; used when nothing should touch the disk.
#[derive(Debug, Default)]
pub struct MemorySession {
    inner: RwLock<Option<Session>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a session.
    pub fn signed_in(token: &str, username: &str) -> Self {
        Self {
            inner: RwLock::new(Some(Session {
                token: token.to_string(),
                username: username.to_string(),
            })),
        }
    }
}

impl SessionStore for MemorySession {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.inner.read().clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self.inner.write() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.inner.write() = None;
        Ok(())
    }
}
