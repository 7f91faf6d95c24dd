//! Client-side session state.
//!
//! The session is two independent storage keys: a presence key read by the
//! navigation guard, and a bearer token key read by the request interceptor.
//! Presence alone counts as logged in; nothing here validates or expires them.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::SessionError;

/// Key/value storage backing the session, e.g. browser local storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// In-process store, used on the server and in tests.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        items.remove(key);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionKeys {
    /// Checked by the navigation guard.
    pub presence: &'static str,
    /// Checked by the bearer token interceptor.
    pub bearer: &'static str,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            presence: "user",
            bearer: "campaigns_token",
        }
    }
}

/// Handle to the session shared by the guard and the API client.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    keys: SessionKeys,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_keys(store, SessionKeys::default())
    }

    pub fn with_keys(store: Arc<dyn SessionStore>, keys: SessionKeys) -> Self {
        Self { store, keys }
    }

    /// Fresh context over an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    pub fn keys(&self) -> SessionKeys {
        self.keys
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get(self.keys.presence).is_some()
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.store.get(self.keys.bearer)
    }

    /// Username recorded at sign-in, if the presence value holds one.
    pub fn current_username(&self) -> Option<String> {
        let raw = self.store.get(self.keys.presence)?;
        let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
        value.get("username")?.as_str().map(str::to_owned)
    }

    pub fn sign_in(&self, username: &str, token: &str) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(&serde_json::json!({ "username": username }))?;
        self.store.set(self.keys.presence, &encoded)?;
        self.store.set(self.keys.bearer, token)?;
        tracing::info!("signed in as {username}");
        Ok(())
    }

    pub fn sign_out(&self) -> Result<(), SessionError> {
        self.store.remove(self.keys.presence)?;
        self.store.remove(self.keys.bearer)?;
        tracing::info!("signed out");
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
