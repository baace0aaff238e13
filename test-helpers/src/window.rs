//! A browser window whose size, scroll position and events are driven by the
//! test.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use hooks_core::{Environment, HostEvent, Listener, ScrollMetrics, Size, Window};

type Handlers = Vec<(u64, HostEvent, Rc<dyn Fn()>)>;

pub struct FakeWindow {
    user_agent: RefCell<String>,
    size: Cell<Size>,
    scroll: Cell<ScrollMetrics>,
    listeners: Rc<RefCell<Handlers>>,
    next_id: Cell<u64>,
}

impl FakeWindow {
    pub const DESKTOP_UA: &'static str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

    /// A 1024x768 desktop window, scrolled to the top of a 2000px page.
    pub fn new() -> Rc<Self> {
        Self::with_user_agent(Self::DESKTOP_UA)
    }

    pub fn with_user_agent(user_agent: &str) -> Rc<Self> {
        Rc::new(Self {
            user_agent: RefCell::new(user_agent.to_string()),
            size: Cell::new(Size {
                width: 1024,
                height: 768,
            }),
            scroll: Cell::new(ScrollMetrics {
                viewport_height: 768,
                scroll_top: 0,
                document_height: 2000,
            }),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        })
    }

    pub fn environment(self: &Rc<Self>) -> Environment {
        Environment::browser(self.clone())
    }

    pub fn set_user_agent(&self, user_agent: &str) {
        *self.user_agent.borrow_mut() = user_agent.to_string();
    }

    /// Change the size and dispatch a resize event.
    pub fn resize(&self, width: u32, height: u32) {
        self.size.set(Size { width, height });
        self.fire(HostEvent::Resize);
    }

    /// Move to `scroll_top` and dispatch a scroll event.
    pub fn scroll_to(&self, scroll_top: i32) {
        let metrics = self.scroll.get();
        self.scroll.set(ScrollMetrics {
            scroll_top,
            ..metrics
        });
        self.fire(HostEvent::Scroll);
    }

    pub fn set_scroll_metrics(&self, metrics: ScrollMetrics) {
        self.scroll.set(metrics);
    }

    pub fn fire(&self, event: HostEvent) {
        let handlers: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(_, _, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler();
        }
    }

    pub fn listener_count(&self, event: HostEvent) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .count()
    }
}

impl Window for FakeWindow {
    fn user_agent(&self) -> String {
        self.user_agent.borrow().clone()
    }

    fn inner_size(&self) -> Size {
        self.size.get()
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.scroll.get()
    }

    fn listen(&self, event: HostEvent, handler: Rc<dyn Fn()>) -> Listener {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, event, handler));

        let listeners: Weak<RefCell<Handlers>> = Rc::downgrade(&self.listeners);
        Listener::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(other, _, _)| *other != id);
            }
        })
    }
}
