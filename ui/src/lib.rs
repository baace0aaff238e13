//! Yew hooks over the state objects in `hooks_core`.
//!
//! Each hook builds its `hooks_core` object once per component (`use_memo`),
//! mirrors the object's observable into Yew state so changes re-render, and
//! tears its subscriptions and DOM listeners down in the effect cleanup.

pub mod clipboard;
pub mod config;
pub mod environment;
pub mod hooks;
pub mod logs;
pub mod storage;

use hooks_core::HttpFetcher;

use crate::config::Config;

pub use hooks::*;

/// HTTP fetcher for `use_fetch`. Relative targets resolve against the
/// configured backend, or the page's own origin when none is configured.
pub fn get_fetcher() -> HttpFetcher {
    let config = Config::from_env();
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());

    match config::base_address(config.backend_url, origin) {
        Some(address) => HttpFetcher::with_base(&address).unwrap_or_else(|e| {
            tracing::error!("{e}");
            HttpFetcher::new()
        }),
        None => HttpFetcher::new(),
    }
}
