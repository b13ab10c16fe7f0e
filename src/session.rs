//! Logged-in session state and its local persistence.
//!
//! The session holds the authenticated user and token in memory and mirrors
//! them into a small key-value store so a restart picks the login back up.
//! Implementations of the store are tiny adapters; session logic never
//! knows where the bytes live.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::user::User;

const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "token";

/// Key-value persistence for the session blob.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store holds malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File-backed store: one JSON object per file, rewritten on every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open `path`, loading any existing contents. A missing file is an
    /// empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.values)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        self.flush()
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// The logged-in user and token, mirrored into a [`SessionStore`].
#[derive(Debug)]
pub struct AuthSession<S: SessionStore> {
    store: S,
    user: Option<User>,
    token: Option<String>,
}

impl<S: SessionStore> AuthSession<S> {
    /// Restore session state from the store.
    ///
    /// A missing blob means logged out; a malformed one is logged and also
    /// treated as logged out rather than failing startup.
    pub fn load(store: S) -> Self {
        let mut session = Self {
            store,
            user: None,
            token: None,
        };
        match session.store.get(USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => session.user = Some(user),
                Err(err) => tracing::warn!(%err, "stored session user is malformed, ignoring"),
            },
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "could not read stored session"),
        }
        if session.user.is_some() {
            match session.store.get(TOKEN_KEY) {
                Ok(token) => session.token = token,
                Err(err) => tracing::warn!(%err, "could not read stored token"),
            }
        }
        session
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Persist and adopt a freshly authenticated user.
    pub fn log_in(&mut self, user: User, token: String) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&user)?;
        self.store.set(USER_KEY, &raw)?;
        self.store.set(TOKEN_KEY, &token)?;
        self.user = Some(user);
        self.token = Some(token);
        Ok(())
    }

    /// Drop the session from memory and from the store.
    pub fn log_out(&mut self) -> Result<(), StoreError> {
        self.store.remove(USER_KEY)?;
        self.store.remove(TOKEN_KEY)?;
        self.user = None;
        self.token = None;
        Ok(())
    }
}
