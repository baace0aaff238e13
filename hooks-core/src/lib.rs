//! State objects behind the UI hooks.
//!
//! Every hook in the `ui` crate is a thin Yew wrapper over one of the types
//! here. Each type keeps its value in an [`Observable`], reaches the browser
//! only through an injected capability, and cleans up after itself on drop,
//! so the behavior can be exercised natively without a browser.

pub mod clipboard;
pub mod device;
pub mod environment;
pub mod error;
pub mod fetch;
pub mod list;
pub mod observable;
pub mod photos;
pub mod scroll;
pub mod storage;
pub mod viewport;

pub use clipboard::{Clipboard, ClipboardWriter, ResetTicket};
pub use device::{DeviceClassifier, is_mobile_user_agent};
pub use environment::{
    Environment, HostEvent, Listener, ScrollMetrics, Size, Window,
};
pub use error::{FetchError, StorageError};
pub use fetch::{
    FetchStatus, Fetcher, HttpFetcher, PendingRequest, RequestLifecycle,
    RequestState,
};
pub use list::{Identified, ListState};
pub use observable::{Observable, Subscription};
pub use scroll::{ScrollBottomTracker, has_reached_bottom};
pub use storage::{KeyValueStore, MemoryStore, StoredState};
pub use viewport::{FALLBACK_SIZE, ViewportTracker};
