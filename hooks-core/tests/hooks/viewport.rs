use std::cell::RefCell;
use std::rc::Rc;

use hooks_core::{Environment, FALLBACK_SIZE, HostEvent, Size, ViewportTracker};
use test_helpers::FakeWindow;

#[test]
fn starts_at_live_window_size() {
    let window = FakeWindow::new();
    let tracker = ViewportTracker::new(&window.environment());
    assert_eq!(
        tracker.size(),
        Size {
            width: 1024,
            height: 768
        }
    );
}

#[test]
fn falls_back_without_a_browser() {
    let tracker = ViewportTracker::new(&Environment::server());
    assert_eq!(
        tracker.size(),
        Size {
            width: 1200,
            height: 800
        }
    );
    assert_eq!(tracker.size(), FALLBACK_SIZE);
    assert!(tracker.listen().is_none());
}

#[test]
fn custom_fallback() {
    let fallback = Size {
        width: 375,
        height: 667,
    };
    let tracker = ViewportTracker::with_fallback(&Environment::server(), fallback);
    assert_eq!(tracker.size(), fallback);
}

#[test]
fn follows_resize_events() {
    let window = FakeWindow::new();
    let tracker = ViewportTracker::new(&window.environment());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _subscription = tracker.subscribe({
        let seen = seen.clone();
        move |size| seen.borrow_mut().push(*size)
    });

    let _listener = tracker.listen().unwrap();
    window.resize(800, 600);

    assert_eq!(
        tracker.size(),
        Size {
            width: 800,
            height: 600
        }
    );
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].to_string(), "800x600");
}

#[test]
fn dropping_listener_unsubscribes() {
    let window = FakeWindow::new();
    let tracker = ViewportTracker::new(&window.environment());

    let listener = tracker.listen().unwrap();
    assert_eq!(window.listener_count(HostEvent::Resize), 1);

    drop(listener);
    assert_eq!(window.listener_count(HostEvent::Resize), 0);

    window.resize(640, 480);
    assert_eq!(tracker.size().width, 1024);
}

#[test]
fn refresh_rereads_window() {
    let window = FakeWindow::new();
    let tracker = ViewportTracker::new(&window.environment());

    // Resized while nobody was listening.
    window.resize(1920, 1080);
    assert_eq!(tracker.size().width, 1024);

    tracker.refresh();
    assert_eq!(tracker.size().width, 1920);
}
