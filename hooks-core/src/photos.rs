//! Image search against Unsplash, as a target for [`RequestLifecycle`].
//!
//! [`RequestLifecycle`]: crate::fetch::RequestLifecycle

use reqwest::Url;
use serde_json::Value;

use crate::fetch::RequestState;

pub const UNSPLASH_SEARCH_URL: &str = "https://api.unsplash.com/search/photos";

/// The search URL for `query`, authenticated with the app's `client_id`.
pub fn search_url(client_id: &str, query: &str) -> String {
    match Url::parse_with_params(
        UNSPLASH_SEARCH_URL,
        &[("client_id", client_id), ("query", query)],
    ) {
        Ok(url) => url.into(),
        // The base is a constant, so this only guards against edits to it.
        Err(e) => {
            tracing::error!("Invalid photo search URL: {e}");
            String::new()
        }
    }
}

/// The photos in a fetched search response; empty until one arrives.
pub fn photos_from(state: &RequestState) -> Vec<Value> {
    state
        .data
        .as_ref()
        .and_then(|data| data.get("results"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
