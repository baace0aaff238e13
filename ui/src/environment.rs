use std::rc::Rc;

use hooks_core::{Environment, HostEvent, Listener, ScrollMetrics, Size, Window};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, HtmlElement};

/// The browser window, seen through `web_sys`.
pub struct WebWindow {
    window: web_sys::Window,
}

/// A browser environment when `window` exists, a server one otherwise.
pub fn detect() -> Environment {
    match web_sys::window() {
        Some(window) => Environment::browser(Rc::new(WebWindow { window })),
        None => Environment::server(),
    }
}

fn pixels(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl Window for WebWindow {
    fn user_agent(&self) -> String {
        self.window.navigator().user_agent().unwrap_or_default()
    }

    fn inner_size(&self) -> Size {
        Size {
            width: pixels(self.window.inner_width()).max(0.0) as u32,
            height: pixels(self.window.inner_height()).max(0.0) as u32,
        }
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let root = self.window.document().and_then(|d| d.document_element());
        let scroll_top = root.as_ref().map(|e| e.scroll_top()).unwrap_or(0);
        let document_height = root
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .map(|e| e.offset_height())
            .unwrap_or(0);

        ScrollMetrics {
            viewport_height: pixels(self.window.inner_height()) as i32,
            scroll_top,
            document_height,
        }
    }

    fn listen(&self, event: HostEvent, handler: Rc<dyn Fn()>) -> Listener {
        let name = event.to_string();
        let target: EventTarget = self.window.clone().into();

        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn Fn()>);

        if let Err(e) = target.add_event_listener_with_callback(
            &name,
            closure.as_ref().unchecked_ref(),
        ) {
            tracing::error!("Failed to listen for {name} events: {e:?}");
        }

        // Rust keeps ownership of the closure, JS only has a pointer to it,
        // so it must outlive the registration.
        Listener::new(move || {
            let _ = target.remove_event_listener_with_callback(
                &name,
                closure.as_ref().unchecked_ref(),
            );
            drop(closure);
        })
    }
}
