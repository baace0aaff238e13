//! State that survives reloads by writing through to a key-value store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::observable::{Observable, Subscription};

/// Synchronous string key-value persistence, e.g. `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store for environments without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A value mirrored to `store` under `key` as JSON.
///
/// The store is read once, at construction. Afterwards the in-memory value
/// is authoritative and every write is pushed to the store. Two instances on
/// the same key do not see each other's writes.
pub struct StoredState<T> {
    store: Rc<dyn KeyValueStore>,
    key: String,
    value: Observable<T>,
}

impl<T> StoredState<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        key: impl Into<String>,
        default: T,
    ) -> Self {
        let key = key.into();
        let initial = read_or_default(store.as_ref(), &key, default);
        let state = Self {
            store,
            key,
            value: Observable::new(initial),
        };
        state.write_through(&state.value.get());
        state
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn set(&self, value: T) {
        self.write_through(&value);
        self.value.set(value);
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value.get());
        self.set(next);
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        self.value.subscribe(f)
    }

    fn write_through(&self, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!("Failed to encode value for {:?}: {e}", self.key);
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &encoded) {
            tracing::warn!("{e}");
        }
    }
}

fn read_or_default<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    default: T,
) -> T {
    let Some(raw) = store.get(key) else {
        return default;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                "Ignoring unreadable stored value for {key:?}, using default: {e}"
            );
            default
        }
    }
}
