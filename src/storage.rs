//! Key-value persistence used by the contact form.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{self, LocalBoxFuture};
use log::warn;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

pub type StoreFuture<'a, T> = LocalBoxFuture<'a, Result<T, StoreError>>;

/// Asynchronous string store. Both calls can fail; neither retries.
pub trait KeyValueStore {
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>>;
    fn set<'a>(&'a self, key: &'a str, value: String) -> StoreFuture<'a, ()>;
}

/// `window.localStorage`.
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    pub fn local() -> Result<Self, StoreError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|storage| Self { storage })
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
        let result = self.storage.get_item(key).map_err(|err| StoreError::Read {
            key: key.to_string(),
            reason: describe(&err),
        });
        Box::pin(future::ready(result))
    }

    fn set<'a>(&'a self, key: &'a str, value: String) -> StoreFuture<'a, ()> {
        let result = self.storage.set_item(key, &value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: describe(&err),
        });
        Box::pin(future::ready(result))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Lives as long as the page. Used when localStorage is blocked.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
        Box::pin(future::ready(Ok(self.snapshot(key))))
    }

    fn set<'a>(&'a self, key: &'a str, value: String) -> StoreFuture<'a, ()> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Box::pin(future::ready(Ok(())))
    }
}

pub fn open_local() -> Rc<dyn KeyValueStore> {
    match BrowserStore::local() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            warn!("{err}, keeping contact submissions in memory");
            Rc::new(MemoryStore::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn memory_store_returns_none_for_unknown_keys() {
        let store = MemoryStore::default();
        assert_eq!(block_on(store.get("contact-submissions")), Ok(None));
    }

    #[test]
    fn memory_store_overwrites_values() {
        let store = MemoryStore::default();
        block_on(store.set("theme", "light".to_string())).expect("first write");
        block_on(store.set("theme", "dark".to_string())).expect("second write");
        assert_eq!(block_on(store.get("theme")), Ok(Some("dark".to_string())));
        assert_eq!(store.snapshot("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn errors_name_the_key() {
        let err = StoreError::Write {
            key: "contact-submissions".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write `contact-submissions`: QuotaExceededError"
        );
    }
}
