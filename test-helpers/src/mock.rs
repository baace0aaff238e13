//! Stand-ins for the clipboard and the network.

use std::cell::RefCell;
use std::collections::HashMap;

use futures::channel::oneshot;
use hooks_core::{ClipboardWriter, FetchError, Fetcher};
use serde_json::Value;

type Reply = Result<Value, String>;

enum Stub {
    Ready(Reply),
    Gated(Option<oneshot::Receiver<Reply>>),
}

enum Pending {
    Now(Reply),
    Wait(oneshot::Receiver<Reply>),
}

/// A [`Fetcher`] with canned replies per target.
///
/// Ready replies answer every call. Gated replies hold the caller until the
/// test sends on the gate, which lets a test keep one request in flight
/// while another one completes. Failures surface as
/// [`FetchError::Decode`] carrying the given message.
#[derive(Default)]
pub struct StubFetcher {
    stubs: RefCell<HashMap<String, Stub>>,
    calls: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, target: &str, body: Value) {
        self.stubs
            .borrow_mut()
            .insert(target.to_string(), Stub::Ready(Ok(body)));
    }

    pub fn fail(&self, target: &str, message: &str) {
        self.stubs
            .borrow_mut()
            .insert(target.to_string(), Stub::Ready(Err(message.to_string())));
    }

    /// The next call for `target` waits until the returned sender is used.
    pub fn gate(&self, target: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.stubs
            .borrow_mut()
            .insert(target.to_string(), Stub::Gated(Some(rx)));
        tx
    }

    /// Every target requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, target: &str) -> usize {
        self.calls.borrow().iter().filter(|t| *t == target).count()
    }
}

impl Fetcher for StubFetcher {
    async fn get_json(&self, target: &str) -> Result<Value, FetchError> {
        self.calls.borrow_mut().push(target.to_string());

        let pending = match self.stubs.borrow_mut().get_mut(target) {
            Some(Stub::Ready(reply)) => Pending::Now(reply.clone()),
            Some(Stub::Gated(rx)) => match rx.take() {
                Some(rx) => Pending::Wait(rx),
                None => Pending::Now(Err(format!("gate for {target} already used"))),
            },
            None => Pending::Now(Err(format!("no stub for {target}"))),
        };

        let reply = match pending {
            Pending::Now(reply) => reply,
            Pending::Wait(rx) => rx
                .await
                .unwrap_or_else(|_| Err(format!("gate for {target} dropped"))),
        };
        reply.map_err(FetchError::Decode)
    }
}

/// A clipboard that remembers everything written to it.
#[derive(Default)]
pub struct RecordingClipboard {
    writes: RefCell<Vec<String>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write(&self, text: &str) {
        self.writes.borrow_mut().push(text.to_string());
    }
}
