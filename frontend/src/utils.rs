//! Helpers simples (localStorage…).

use gloo::storage::{LocalStorage, Storage};
use session_core::{KeyValueStore, SessionStore, StoreError};

/// `window.localStorage`, vu comme un `KeyValueStore`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        // clé absente : pas d'erreur côté navigateur
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            log::warn!("suppression de « {key} » impossible : {e:?}");
        }
    }
}

/// Le slot de session partagé par le contexte et les appels API.
pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
