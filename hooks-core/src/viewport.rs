use std::rc::Rc;

use crate::environment::{Environment, HostEvent, Listener, Size};
use crate::observable::{Observable, Subscription};

/// Reported when there is no window to measure.
pub const FALLBACK_SIZE: Size = Size {
    width: 1200,
    height: 800,
};

/// Tracks the window's inner width and height.
pub struct ViewportTracker {
    env: Environment,
    size: Observable<Size>,
}

impl ViewportTracker {
    pub fn new(env: &Environment) -> Self {
        Self::with_fallback(env, FALLBACK_SIZE)
    }

    pub fn with_fallback(env: &Environment, fallback: Size) -> Self {
        let initial = env
            .window()
            .map(|window| window.inner_size())
            .unwrap_or(fallback);

        Self {
            env: env.clone(),
            size: Observable::new(initial),
        }
    }

    pub fn size(&self) -> Size {
        self.size.get()
    }

    pub fn subscribe(&self, f: impl Fn(&Size) + 'static) -> Subscription {
        self.size.subscribe(f)
    }

    /// Re-read the live window size.
    pub fn refresh(&self) {
        if let Some(window) = self.env.window() {
            self.size.set_if_changed(window.inner_size());
        }
    }

    /// Start following resize events. Without a window there is nothing to
    /// follow and `None` is returned.
    pub fn listen(&self) -> Option<Listener> {
        let window = self.env.window()?;
        let handler = {
            let window = window.clone();
            let size = self.size.clone();
            Rc::new(move || {
                size.set_if_changed(window.inner_size());
            })
        };
        Some(window.listen(HostEvent::Resize, handler))
    }
}
