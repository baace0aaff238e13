use hooks_core::ScrollBottomTracker;
use yew::prelude::*;

use crate::environment::detect;

/// Whether the user has scrolled to the very bottom of the page.
#[hook]
pub fn use_page_bottom() -> bool {
    let tracker = use_memo((), |_| ScrollBottomTracker::new(&detect()));
    let at_bottom = use_state_eq(|| false);

    {
        let at_bottom = at_bottom.clone();

        use_effect_with((), move |_| {
            let subscription =
                tracker.subscribe(move |next| at_bottom.set(*next));
            let listener = tracker.listen();

            move || {
                drop(listener);
                drop(subscription);
            }
        });
    }

    *at_bottom
}
