use std::cell::Cell;
use std::rc::Rc;

use hooks_core::{KeyValueStore, MemoryStore, StorageError, StoredState};
use serde::{Deserialize, Serialize};
use test_helpers::{capture_logs, init_tracing};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Preferences {
    theme: String,
    font_size: u8,
}

fn store() -> Rc<MemoryStore> {
    init_tracing();
    Rc::new(MemoryStore::new())
}

#[test]
fn absent_key_uses_default() {
    let store = store();
    let count = StoredState::new(store.clone(), "app-count", 0);
    assert_eq!(count.get(), 0);
    assert_eq!(count.key(), "app-count");
}

#[test]
fn initial_value_is_written_through() {
    let store = store();
    let _count = StoredState::new(store.clone(), "app-count", 7);
    assert_eq!(store.get("app-count").as_deref(), Some("7"));
}

#[test]
fn value_survives_remount() {
    let store = store();
    let prefs = StoredState::new(
        store.clone(),
        "prefs",
        Preferences {
            theme: "light".into(),
            font_size: 14,
        },
    );
    let dark = Preferences {
        theme: "dark".into(),
        font_size: 16,
    };
    prefs.set(dark.clone());
    drop(prefs);

    let remounted = StoredState::new(
        store.clone(),
        "prefs",
        Preferences {
            theme: "light".into(),
            font_size: 14,
        },
    );
    assert_eq!(remounted.get(), dark);
}

#[test]
fn every_update_writes_through() {
    let store = store();
    let count = StoredState::new(store.clone(), "app-count", 0);

    count.set(1);
    assert_eq!(store.get("app-count").as_deref(), Some("1"));

    count.update(|n| n + 10);
    assert_eq!(store.get("app-count").as_deref(), Some("11"));
    assert_eq!(count.get(), 11);
}

#[test]
fn malformed_value_falls_back_to_default() {
    let store = store();
    store.set("prefs", "{not json").unwrap();

    let (prefs, logs) = capture_logs(|| {
        StoredState::new(
            store.clone(),
            "prefs",
            Preferences {
                theme: "light".into(),
                font_size: 14,
            },
        )
    });

    assert_eq!(
        prefs.get(),
        Preferences {
            theme: "light".into(),
            font_size: 14,
        }
    );
    assert!(logs.contains("Ignoring unreadable stored value"));
}

#[test]
fn wrong_shape_falls_back_to_default() {
    let store = store();
    store.set("app-count", "\"seven\"").unwrap();
    let count = StoredState::new(store.clone(), "app-count", 3_u32);
    assert_eq!(count.get(), 3);
}

#[test]
fn instances_do_not_sync() {
    let store = store();
    let first = StoredState::new(store.clone(), "shared", String::from("a"));
    let second = StoredState::new(store.clone(), "shared", String::from("z"));
    assert_eq!(second.get(), "a");

    first.set("b".into());
    assert_eq!(second.get(), "a");
    assert_eq!(store.get("shared").as_deref(), Some("\"b\""));
}

#[test]
fn subscribers_see_updates() {
    let store = store();
    let count = StoredState::new(store, "n", 0);
    let last = Rc::new(Cell::new(0));
    let _subscription = count.subscribe({
        let last = last.clone();
        move |n| last.set(*n)
    });
    count.set(5);
    assert_eq!(last.get(), 5);
}

struct FullStore;

impl KeyValueStore for FullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "QuotaExceededError".to_string(),
        })
    }
}

#[test]
fn failed_write_keeps_in_memory_value() {
    init_tracing();
    let (count, logs) = capture_logs(|| {
        let count = StoredState::new(Rc::new(FullStore), "n", 1);
        count.set(2);
        count
    });
    assert_eq!(count.get(), 2);
    assert!(logs.contains("QuotaExceededError"));
}
