//! The host the hooks run in.
//!
//! Hooks never probe for a global `window`. They receive an [`Environment`]
//! which either wraps a browser [`Window`] or says there is none (server-side
//! rendering, native tests).

use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{width}x{height}")]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Raw document scroll measurements, in the DOM's integer pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// `window.innerHeight`
    pub viewport_height: i32,
    /// `document.documentElement.scrollTop`
    pub scroll_top: i32,
    /// `document.documentElement.offsetHeight`
    pub document_height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HostEvent {
    #[display("resize")]
    Resize,
    #[display("scroll")]
    Scroll,
}

/// Read-only view of a browser window plus its event streams.
pub trait Window {
    fn user_agent(&self) -> String;

    fn inner_size(&self) -> Size;

    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Call `handler` on every `event` until the returned [`Listener`] is
    /// dropped.
    fn listen(&self, event: HostEvent, handler: Rc<dyn Fn()>) -> Listener;
}

/// Guard for an event listener registration; dropping it removes the
/// listener.
#[must_use = "dropping a Listener removes it immediately"]
pub struct Listener {
    remove: Option<Box<dyn FnOnce()>>,
}

impl Listener {
    pub fn new(remove: impl FnOnce() + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("active", &self.remove.is_some())
            .finish()
    }
}

#[derive(Clone, Default)]
pub struct Environment {
    window: Option<Rc<dyn Window>>,
}

impl Environment {
    /// No browser is available.
    pub fn server() -> Self {
        Self { window: None }
    }

    pub fn browser(window: Rc<dyn Window>) -> Self {
        Self {
            window: Some(window),
        }
    }

    pub fn is_ssr(&self) -> bool {
        self.window.is_none()
    }

    pub fn window(&self) -> Option<&Rc<dyn Window>> {
        self.window.as_ref()
    }

    /// The user agent, or an empty string without a browser.
    pub fn user_agent(&self) -> String {
        self.window
            .as_ref()
            .map(|w| w.user_agent())
            .unwrap_or_default()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("is_ssr", &self.is_ssr())
            .finish()
    }
}
