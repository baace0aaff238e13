use hooks_core::StoredState;
use serde::Serialize;
use serde::de::DeserializeOwned;
use yew::prelude::*;

use crate::storage::durable_store;

/// State that persists to `localStorage` under `key`.
///
/// Returns `(value, set_value)`. The stored JSON is read once; if it is
/// missing or unreadable `default` is used instead. Every `set_value` is
/// written straight back.
///
/// # Example
///
/// ```rust,ignore
/// let (count, set_count) = use_local_storage_state("app-count".into(), 0);
/// let onclick = Callback::from(move |_| set_count.emit(count + 1));
/// ```
#[hook]
pub fn use_local_storage_state<T>(key: String, default: T) -> (T, Callback<T>)
where
    T: Serialize + DeserializeOwned + Clone + PartialEq + 'static,
{
    let stored = use_memo(key.clone(), move |key| {
        StoredState::new(durable_store(), key.clone(), default)
    });
    let value = use_state_eq(|| stored.get());

    {
        let stored = stored.clone();
        let value = value.clone();

        use_effect_with(key.clone(), move |_| {
            value.set(stored.get());
            let subscription = {
                let value = value.clone();
                stored.subscribe(move |next| value.set(next.clone()))
            };

            move || drop(subscription)
        });
    }

    let set_value = use_callback(key, move |next: T, _| stored.set(next));

    ((*value).clone(), set_value)
}
