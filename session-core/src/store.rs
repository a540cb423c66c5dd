use std::cell::RefCell;
use std::collections::HashMap;

use log::warn;

use crate::error::StoreError;
use crate::record::SessionRecord;

/// Key the session record lives under.
pub const SESSION_KEY: &str = "user";

/// Durable string slots (the browser's `localStorage`, or memory in tests).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// In-memory slots, lost with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

/* -------------------------------------------------------------------------- */
/*                        slot unique de la session                           */
/* -------------------------------------------------------------------------- */

/// One session record under one key. A write replaces whatever was there.
#[derive(Debug)]
pub struct SessionStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, SESSION_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn write(&self, record: &SessionRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record)?;
        self.backend.set(&self.key, &raw).map_err(|e| {
            warn!("écriture de la session impossible : {e}");
            e
        })
    }

    /// `None` when nothing is stored or the stored value is not a valid record.
    pub fn read(&self) -> Option<SessionRecord> {
        let raw = self.backend.get(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("session stockée illisible, ignorée : {e}");
                None
            }
        }
    }

    pub fn clear(&self) {
        self.backend.remove(&self.key);
    }

    /// `Authorization` header value for outgoing API calls.
    pub fn authorization(&self) -> Option<String> {
        self.read()
            .filter(|record| !record.token.is_empty())
            .map(|record| format!("Bearer {}", record.token))
    }
}
