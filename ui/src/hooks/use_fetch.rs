use hooks_core::{HttpFetcher, RequestLifecycle, RequestState};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::get_fetcher;

/// Fetch hook return type
pub struct UseFetchHandle {
    pub state: RequestState,
    /// Run the current target again, e.g. after an error.
    pub refetch: Callback<()>,
}

/// Fetch JSON from `target` whenever it changes.
///
/// Responses are cached per component for its whole lifetime, so going back
/// to a previous target shows the earlier body without a request. When the
/// target changes before a response arrives, that response is dropped. A
/// blank target does nothing.
///
/// # Example
///
/// ```rust,ignore
/// #[function_component]
/// fn Search(props: &Props) -> Html {
///     let url = if props.query.is_empty() {
///         String::new()
///     } else {
///         format!("https://hn.algolia.com/api/v1/search?query={}", props.query)
///     };
///     let UseFetchHandle { state, .. } = use_fetch(url);
///
///     match state.status {
///         FetchStatus::Fetching => html! { <p>{"Searching..."}</p> },
///         FetchStatus::Errored => html! { <p>{state.error}</p> },
///         _ => html! { <Hits data={state.data} /> },
///     }
/// }
/// ```
#[hook]
pub fn use_fetch(target: String) -> UseFetchHandle {
    let lifecycle =
        use_memo((), |_| RequestLifecycle::<HttpFetcher>::new(get_fetcher()));
    let state = use_state_eq(|| lifecycle.state());

    // Mirror the lifecycle into component state; supersede on unmount
    {
        let state = state.clone();
        let lifecycle = lifecycle.clone();

        use_effect_with((), move |_| {
            let subscription =
                lifecycle.subscribe(move |next| state.set(next.clone()));

            move || {
                lifecycle.cancel();
                drop(subscription);
            }
        });
    }

    // Start a request whenever the target changes
    {
        let lifecycle = lifecycle.clone();

        use_effect_with(target, move |target| {
            if let Some(request) = lifecycle.set_target(target) {
                spawn_local(request);
            }
        });
    }

    let refetch = use_callback((), move |_: (), _| {
        if let Some(request) = lifecycle.refetch() {
            spawn_local(request);
        }
    });

    UseFetchHandle {
        state: (*state).clone(),
        refetch,
    }
}
