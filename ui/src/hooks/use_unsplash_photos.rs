use hooks_core::FetchStatus;
use hooks_core::photos::{photos_from, search_url};
use serde_json::Value;
use yew::prelude::*;

use super::use_fetch;

/// Search Unsplash for `query`.
///
/// Returns `(images, error, loading)`.
#[hook]
pub fn use_unsplash_photos(
    client_id: String,
    query: String,
) -> (Vec<Value>, bool, bool) {
    let url = use_memo((client_id, query), |(client_id, query)| {
        search_url(client_id, query)
    });
    let fetch = use_fetch((*url).clone());

    (
        photos_from(&fetch.state),
        fetch.state.status == FetchStatus::Errored,
        fetch.state.is_loading(),
    )
}
