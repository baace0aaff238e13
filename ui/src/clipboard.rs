use hooks_core::ClipboardWriter;
use wasm_bindgen_futures::JsFuture;
use yew::platform::spawn_local;

/// `navigator.clipboard.writeText`. The write completes asynchronously;
/// failures (e.g. a missing permission) are logged.
pub struct WebClipboard;

impl ClipboardWriter for WebClipboard {
    fn write(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!("No window, cannot write to the clipboard");
            return;
        };
        let promise = window.navigator().clipboard().write_text(text);

        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                tracing::error!("Clipboard write failed: {e:?}");
            }
        });
    }
}
