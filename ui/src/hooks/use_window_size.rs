use hooks_core::{Size, ViewportTracker};
use yew::prelude::*;

use crate::environment::detect;

/// The window's inner size, kept current across resizes.
#[hook]
pub fn use_window_size() -> Size {
    let tracker = use_memo((), |_| ViewportTracker::new(&detect()));
    let size = use_state_eq(|| tracker.size());

    {
        let size = size.clone();

        use_effect_with((), move |_| {
            // Catch resizes between the first render and now
            tracker.refresh();
            size.set(tracker.size());

            let subscription = tracker.subscribe(move |next| size.set(*next));
            let listener = tracker.listen();

            move || {
                drop(listener);
                drop(subscription);
            }
        });
    }

    *size
}
