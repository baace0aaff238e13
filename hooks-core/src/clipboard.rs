use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use serde_json::Value;

use crate::observable::{Observable, Subscription};

/// Host capability for writing text to the system clipboard. Writes are
/// assumed to succeed.
pub trait ClipboardWriter {
    fn write(&self, text: &str);
}

/// Permission to reset the `is_copied` flag once its delay has passed.
///
/// A ticket goes stale as soon as another copy attempt (or a cancel) happens,
/// after which [`Clipboard::expire`] ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
    delay: Duration,
}

impl ResetTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The delay in whole milliseconds, saturating, for browser timers.
    pub fn delay_millis(&self) -> u32 {
        u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX)
    }
}

/// Copies strings and numbers to the clipboard and tracks a transient
/// "copied" flag.
pub struct Clipboard {
    writer: Rc<dyn ClipboardWriter>,
    reset_interval: Option<Duration>,
    is_copied: Observable<bool>,
    generation: Rc<Cell<u64>>,
}

impl Clipboard {
    /// A zero `reset_interval` behaves like `None`: the flag never resets on
    /// its own.
    pub fn new(
        writer: Rc<dyn ClipboardWriter>,
        reset_interval: Option<Duration>,
    ) -> Self {
        Self {
            writer,
            reset_interval: reset_interval.filter(|d| !d.is_zero()),
            is_copied: Observable::new(false),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied.get()
    }

    pub fn subscribe(&self, f: impl Fn(&bool) + 'static) -> Subscription {
        self.is_copied.subscribe(f)
    }

    /// Copy `value` if it is a string or a number.
    ///
    /// Returns a ticket when the copy succeeded and a reset interval is
    /// configured; the caller schedules [`Clipboard::expire`] with it.
    pub fn copy(&self, value: impl Into<Value>) -> Option<ResetTicket> {
        let generation = self.bump_generation();

        let text = match value.into() {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            other => {
                tracing::error!(
                    "Cannot copy {} to clipboard, must be a string or number.",
                    type_name(&other)
                );
                self.is_copied.set(false);
                return None;
            }
        };

        self.writer.write(&text);
        self.is_copied.set(true);

        self.reset_interval.map(|delay| ResetTicket { generation, delay })
    }

    /// Reset the flag if `ticket` is still the latest. Returns whether it
    /// was.
    pub fn expire(&self, ticket: ResetTicket) -> bool {
        if ticket.generation != self.generation.get() {
            return false;
        }
        self.is_copied.set_if_changed(false);
        true
    }

    /// Sleep for the ticket's delay using the caller's timer, then expire.
    pub async fn reset_after<S, Fut>(&self, ticket: ResetTicket, sleep: S) -> bool
    where
        S: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        sleep(ticket.delay).await;
        self.expire(ticket)
    }

    /// Invalidate any outstanding ticket.
    pub fn cancel(&self) {
        self.bump_generation();
    }

    fn bump_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
