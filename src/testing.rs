//! Assertion helpers for page tests
//!
//! [`wait_for`] retries a document query until it succeeds or a bounded wait
//! expires, and [`Spy`] counts calls to a handler.

use crate::app::SharedDocument;
use crate::config::NavigationConfig;
use crate::core::{DomError, WaitError};
use crate::ui::dom::Document;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::time::Instant;

/// Retry `check` against the document until it returns `Ok`
///
/// The check runs at least once, then every `poll_interval` until
/// `wait_timeout` has elapsed.
pub async fn wait_for<T, F>(
    document: &SharedDocument,
    config: &NavigationConfig,
    mut check: F,
) -> Result<T, WaitError>
where
    F: FnMut(&Document) -> Result<T, DomError>,
{
    let deadline = Instant::now() + config.wait_timeout();
    loop {
        let last_error = match document.read(&mut check) {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };
        if Instant::now() >= deadline {
            return Err(WaitError {
                timeout_ms: config.wait_timeout_ms,
                last_error: last_error.to_string(),
            });
        }
        tokio::time::sleep(config.poll_interval()).await;
    }
}

/// Wraps a one-argument handler and counts its invocations
pub struct Spy<F> {
    handler: F,
    calls: AtomicUsize,
}

impl<F> Spy<F> {
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call<A, R>(&self, arg: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.handler)(arg)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }
}
