//! Build-time configuration, read with `option_env!` so it is baked into the
//! wasm bundle.

pub const DEFAULT_LOG_FILTER: &str = "error,ui=debug,hooks_core=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Base address for relative fetch targets (`BACKEND_URL`).
    pub backend_url: Option<&'static str>,
    /// `tracing` filter directives for the console (`LOG_FILTER`).
    pub log_filter: &'static str,
}

impl Config {
    pub const fn from_env() -> Self {
        Config {
            backend_url: option_env!("BACKEND_URL"),
            log_filter: match option_env!("LOG_FILTER") {
                Some(filter) => filter,
                None => DEFAULT_LOG_FILTER,
            },
        }
    }
}

/// The configured backend wins over the page origin.
pub fn base_address(
    backend_url: Option<&str>,
    origin: Option<String>,
) -> Option<String> {
    backend_url
        .filter(|url| !url.trim().is_empty())
        .map(str::to_string)
        .or(origin)
}
