use std::rc::Rc;

use crate::environment::{Environment, HostEvent, Listener, ScrollMetrics};
use crate::observable::{Observable, Subscription};

/// Whether the viewport's bottom edge sits exactly on the document's bottom.
///
/// This is an exact comparison: zoom levels that produce fractional scroll
/// offsets can leave a user visually at the bottom while this reports
/// `false`.
pub fn has_reached_bottom(metrics: ScrollMetrics) -> bool {
    metrics.viewport_height + metrics.scroll_top == metrics.document_height
}

/// Tracks whether the user has scrolled to the bottom of the page.
pub struct ScrollBottomTracker {
    env: Environment,
    at_bottom: Observable<bool>,
}

impl ScrollBottomTracker {
    /// Starts out `false`; the first scroll event sets the real value.
    pub fn new(env: &Environment) -> Self {
        Self {
            env: env.clone(),
            at_bottom: Observable::new(false),
        }
    }

    pub fn is_at_bottom(&self) -> bool {
        self.at_bottom.get()
    }

    pub fn subscribe(&self, f: impl Fn(&bool) + 'static) -> Subscription {
        self.at_bottom.subscribe(f)
    }

    pub fn listen(&self) -> Option<Listener> {
        let window = self.env.window()?;
        let handler = {
            let window = window.clone();
            let at_bottom = self.at_bottom.clone();
            Rc::new(move || {
                at_bottom
                    .set_if_changed(has_reached_bottom(window.scroll_metrics()));
            })
        };
        Some(window.listen(HostEvent::Scroll, handler))
    }
}
