//! Persisted session.
//!
//! The token in the backing store is the only source of truth for "logged
//! in". The `isLoggedIn` key is a mirror written on every change so other
//! readers of the store see a consistent flag.

use crate::error::{
    ClientError, ClientResult, MSG_NO_USER_ID, MSG_NOT_AUTHENTICATED, MSG_SESSION_NOT_SAVED,
};
use gameshelf_shared::{AuthData, STORAGE_LOGGED_IN_KEY, STORAGE_TOKEN_KEY, STORAGE_USER_ID_KEY};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::warn;

/// String key/value storage, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Returns `false` if the write failed.
    fn set(&self, key: &str, value: &str) -> bool;
    /// Returns `false` if the removal failed.
    fn delete(&self, key: &str) -> bool;
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.inner.borrow_mut().remove(key);
        true
    }
}

/// Store whose writes always fail, like a full or blocked `localStorage`.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct ReadOnlyStore(pub MemoryStore);

#[cfg(test)]
impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> bool {
        false
    }

    fn delete(&self, _key: &str) -> bool {
        false
    }
}

/// Token and user id of an active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user_id: String,
}

#[derive(Clone, Copy)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.store.get(key).filter(|v| !v.is_empty())
    }

    pub fn token(&self) -> Option<String> {
        self.non_empty(STORAGE_TOKEN_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.non_empty(STORAGE_USER_ID_KEY)
    }

    /// Re-reads the store on every call.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Token only; used by operations that do not need the user id.
    pub fn require_token(&self) -> ClientResult<String> {
        self.token()
            .ok_or_else(|| ClientError::Unauthenticated(MSG_NOT_AUTHENTICATED.to_string()))
    }

    pub fn credentials(&self) -> ClientResult<Credentials> {
        let token = self.require_token()?;
        let user_id = self
            .user_id()
            .ok_or_else(|| ClientError::Unauthenticated(MSG_NO_USER_ID.to_string()))?;
        Ok(Credentials { token, user_id })
    }

    /// Persist a new session. On a failed write whatever was partially
    /// stored is removed again.
    pub fn set_session(&self, auth: &AuthData) -> ClientResult<()> {
        let saved = self.store.set(STORAGE_TOKEN_KEY, &auth.token)
            && self.store.set(STORAGE_USER_ID_KEY, &auth.user_id);
        if !saved {
            warn!("session storage write failed");
            self.clear();
            return Err(ClientError::Transport(MSG_SESSION_NOT_SAVED.to_string()));
        }
        self.sync_flag();
        Ok(())
    }

    pub fn clear(&self) {
        let token_removed = self.store.delete(STORAGE_TOKEN_KEY);
        let user_removed = self.store.delete(STORAGE_USER_ID_KEY);
        if !(token_removed && user_removed) {
            warn!("session storage removal failed");
        }
        self.sync_flag();
    }

    /// Rewrite the mirrored flag from the token and return it. Called at
    /// startup to repair a flag left stale by an older client.
    pub fn sync_flag(&self) -> bool {
        let logged_in = self.is_authenticated();
        if !self
            .store
            .set(STORAGE_LOGGED_IN_KEY, if logged_in { "true" } else { "false" })
        {
            warn!(logged_in, "could not mirror login flag");
        }
        logged_in
    }
}
