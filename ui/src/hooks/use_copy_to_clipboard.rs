use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use hooks_core::Clipboard;
use serde_json::Value;
use yew::prelude::*;

use crate::clipboard::WebClipboard;

/// Copy strings or numbers to the clipboard.
///
/// Returns `(is_copied, copy)`. With `reset_interval_ms`, `is_copied` goes
/// back to `false` that long after the last successful copy. Anything other
/// than a string or number is refused and logged.
///
/// # Example
///
/// ```rust,ignore
/// let (is_copied, copy) = use_copy_to_clipboard(Some(3000));
/// let onclick = {
///     let code = props.code.clone();
///     Callback::from(move |_| copy.emit(code.clone().into()))
/// };
/// ```
#[hook]
pub fn use_copy_to_clipboard(
    reset_interval_ms: Option<u32>,
) -> (bool, Callback<Value>) {
    let clipboard = use_memo(reset_interval_ms, |reset_interval_ms| {
        Clipboard::new(
            Rc::new(WebClipboard),
            reset_interval_ms.map(|ms| Duration::from_millis(ms.into())),
        )
    });
    let is_copied = use_state_eq(|| false);
    // Dropping the Timeout cancels it
    let timeout = use_mut_ref(|| None::<Timeout>);

    {
        let clipboard = clipboard.clone();
        let is_copied = is_copied.clone();
        let timeout = timeout.clone();

        use_effect_with(reset_interval_ms, move |_| {
            is_copied.set(clipboard.is_copied());
            let subscription = {
                let is_copied = is_copied.clone();
                clipboard.subscribe(move |copied| is_copied.set(*copied))
            };

            move || {
                clipboard.cancel();
                timeout.borrow_mut().take();
                drop(subscription);
            }
        });
    }

    let copy = use_callback(reset_interval_ms, move |value: Value, _| {
        let pending = clipboard.copy(value).map(|ticket| {
            let clipboard = clipboard.clone();
            Timeout::new(ticket.delay_millis(), move || {
                clipboard.expire(ticket);
            })
        });

        // Replacing the handle cancels the previous reset
        *timeout.borrow_mut() = pending;
    });

    (*is_copied, copy)
}
