//! Request lifecycle: fetch JSON for a target, cache it, and make sure only
//! the latest target's result reaches the state.
//!
//! ```text
//! Idle --target--> Fetching --ok--> Fetched
//!                     |
//!                     +----err---> Errored
//! ```
//!
//! Any new non-blank target restarts at `Fetching`. Each request is tagged
//! with a generation number when it starts; when it resolves it only commits
//! if no newer request (or a cancel) has bumped the generation since. The
//! network call itself is never aborted, its result is just dropped.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;
use crate::observable::{Observable, Subscription};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display,
)]
pub enum FetchStatus {
    #[default]
    #[display("idle")]
    Idle,
    #[display("fetching")]
    Fetching,
    #[display("fetched")]
    Fetched,
    #[display("errored")]
    Errored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestState {
    pub status: FetchStatus,
    pub data: Option<Value>,
    pub error: Option<String>,
}

impl RequestState {
    fn fetching() -> Self {
        Self {
            status: FetchStatus::Fetching,
            ..Self::default()
        }
    }

    fn fetched(data: Value) -> Self {
        Self {
            status: FetchStatus::Fetched,
            data: Some(data),
            error: None,
        }
    }

    fn errored(error: String) -> Self {
        Self {
            status: FetchStatus::Errored,
            data: None,
            error: Some(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Fetching
    }

    pub fn is_fetched(&self) -> bool {
        self.status == FetchStatus::Fetched
    }

    /// Decode the fetched body into `T`. `None` until something is fetched.
    pub fn decode<T: DeserializeOwned>(
        &self,
    ) -> Option<Result<T, serde_json::Error>> {
        self.data.clone().map(serde_json::from_value)
    }
}

/// Asynchronous HTTP GET that decodes the body as JSON.
pub trait Fetcher {
    fn get_json(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<Value, FetchError>>;
}

/// [`Fetcher`] over `reqwest`, which uses the browser's `fetch` on wasm.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    base: Option<Url>,
    inner_client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative targets (`/api/items`) against `address`.
    pub fn with_base(address: &str) -> Result<Self, FetchError> {
        let base = Url::parse(address).map_err(|e| {
            FetchError::InvalidTarget(address.to_string(), e.to_string())
        })?;
        Ok(Self {
            base: Some(base),
            inner_client: reqwest::Client::new(),
        })
    }

    pub fn resolve(&self, target: &str) -> Result<Url, FetchError> {
        if let Ok(url) = Url::parse(target) {
            return Ok(url);
        }
        match &self.base {
            Some(base) => base.join(target).map_err(|e| {
                FetchError::InvalidTarget(target.to_string(), e.to_string())
            }),
            None => Err(FetchError::InvalidTarget(
                target.to_string(),
                "relative target without a base address".to_string(),
            )),
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn get_json(&self, target: &str) -> Result<Value, FetchError> {
        let url = self.resolve(target)?;
        let response = self.inner_client.get(url).send().await?;
        Ok(response.json::<Value>().await?)
    }
}

/// A request started by [`RequestLifecycle`], for the host to drive to
/// completion (`spawn_local` in the browser).
pub type PendingRequest = Pin<Box<dyn Future<Output = ()>>>;

pub struct RequestLifecycle<F> {
    fetcher: Rc<F>,
    state: Observable<RequestState>,
    cache: Rc<RefCell<HashMap<String, Value>>>,
    generation: Rc<Cell<u64>>,
    target: RefCell<Option<String>>,
}

impl<F: Fetcher + 'static> RequestLifecycle<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_shared_fetcher(Rc::new(fetcher))
    }

    pub fn with_shared_fetcher(fetcher: Rc<F>) -> Self {
        Self {
            fetcher,
            state: Observable::new(RequestState::default()),
            cache: Rc::new(RefCell::new(HashMap::new())),
            generation: Rc::new(Cell::new(0)),
            target: RefCell::new(None),
        }
    }

    pub fn state(&self) -> RequestState {
        self.state.get()
    }

    pub fn subscribe(
        &self,
        f: impl Fn(&RequestState) + 'static,
    ) -> Subscription {
        self.state.subscribe(f)
    }

    pub fn target(&self) -> Option<String> {
        self.target.borrow().clone()
    }

    /// The cached body for `target`, if it has been fetched before.
    pub fn cached(&self, target: &str) -> Option<Value> {
        self.cache.borrow().get(target).cloned()
    }

    /// Point the lifecycle at a new target.
    ///
    /// Setting the current target again does nothing. Any other value
    /// supersedes the in-flight request. Blank targets stop there; cached
    /// targets complete synchronously. Otherwise the returned request must
    /// be driven for the state to leave `Fetching`.
    pub fn set_target(&self, target: &str) -> Option<PendingRequest> {
        if self.target.borrow().as_deref() == Some(target) {
            return None;
        }
        *self.target.borrow_mut() = Some(target.to_string());
        self.start(target)
    }

    /// Run the current target again. Failures are never cached, so this is
    /// how a caller retries an `Errored` request.
    pub fn refetch(&self) -> Option<PendingRequest> {
        let target = self.target()?;
        self.start(&target)
    }

    /// Supersede whatever is in flight without starting anything new.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    fn start(&self, target: &str) -> Option<PendingRequest> {
        self.cancel();
        let generation = self.generation.get();

        if target.trim().is_empty() {
            tracing::debug!("blank target, not fetching");
            return None;
        }

        self.state.set(RequestState::fetching());

        let cached = self.cached(target);
        if let Some(data) = cached {
            tracing::debug!(url = %target, "serving cached response");
            self.state.set(RequestState::fetched(data));
            return None;
        }

        tracing::debug!(url = %target, generation, "fetching");
        let fetcher = self.fetcher.clone();
        let cache = self.cache.clone();
        let state = self.state.clone();
        let latest = self.generation.clone();
        let target = target.to_string();

        let request: PendingRequest = Box::pin(async move {
            let result = fetcher.get_json(&target).await;
            let superseded = latest.get() != generation;

            match result {
                Ok(data) => {
                    cache.borrow_mut().insert(target.clone(), data.clone());
                    if superseded {
                        tracing::debug!(
                            url = %target,
                            generation,
                            "discarding superseded response"
                        );
                        return;
                    }
                    state.set(RequestState::fetched(data));
                }
                Err(e) => {
                    if superseded {
                        tracing::debug!(
                            url = %target,
                            generation,
                            "discarding superseded error: {e}"
                        );
                        return;
                    }
                    tracing::debug!(url = %target, "fetch failed: {e}");
                    state.set(RequestState::errored(e.to_string()));
                }
            }
        });
        Some(request)
    }
}

impl<F> Drop for RequestLifecycle<F> {
    fn drop(&mut self) {
        self.generation.set(self.generation.get() + 1);
    }
}
