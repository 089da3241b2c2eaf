//! In-memory stand-in for the remote bills API
//!
//! `MockStore` answers `bills().list()` from memory and lets each test bend
//! that answer without touching the others:
//!
//! - [`MockStore::bills_once`] replaces the resource returned by the next
//!   `bills()` call only;
//! - [`MockStore::override_list`] replaces `list()` of the default resource
//!   until [`MockStore::reset`];
//! - call counters on `bills()` and the default `list()` act as spies.
//!
//! A test that panics while holding a lock does not break the store for the
//! following ones: poisoned locks are recovered everywhere.

use crate::core::{Bill, BillsResource, Store, StoreError};
use crate::storage::fixtures;
use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Replacement for the default `list()` implementation
pub type ListFn = Arc<dyn Fn() -> BoxFuture<'static, Result<Vec<Bill>, StoreError>> + Send + Sync>;

struct MockState {
    bills: RwLock<Vec<Bill>>,
    list_override: RwLock<Option<ListFn>>,
    once: Mutex<VecDeque<Arc<dyn BillsResource>>>,
    bills_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

/// Mock bills store
///
/// Cloning shares the underlying state, so a clone handed to a router still
/// sees overrides installed afterwards.
#[derive(Clone)]
pub struct MockStore {
    state: Arc<MockState>,
}

impl MockStore {
    /// Create a store answering with the given bills
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            state: Arc::new(MockState {
                bills: RwLock::new(bills),
                list_override: RwLock::new(None),
                once: Mutex::new(VecDeque::new()),
                bills_calls: AtomicUsize::new(0),
                list_calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Create a store answering with the four fixture bills
    pub fn with_fixtures() -> Self {
        Self::new(fixtures::bills())
    }

    /// Replace the canned bills
    pub fn set_bills(&self, bills: Vec<Bill>) {
        *self
            .state
            .bills
            .write()
            .unwrap_or_else(PoisonError::into_inner) = bills;
    }

    /// Make the next `bills()` call return `resource`
    ///
    /// Queued resources are consumed in order, one per `bills()` call.
    pub fn bills_once(&self, resource: Arc<dyn BillsResource>) {
        self.state
            .once
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(resource);
    }

    /// Make the next `bills().list()` fail with `error`
    pub fn fail_once(&self, error: StoreError) {
        self.bills_once(Arc::new(CannedBills(Err(error))));
    }

    /// Make the next `bills().list()` resolve to `bills`
    pub fn resolve_once(&self, bills: Vec<Bill>) {
        self.bills_once(Arc::new(CannedBills(Ok(bills))));
    }

    /// Replace `list()` on the default resource until [`MockStore::reset`]
    pub fn override_list<F, Fut>(&self, list: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<Bill>, StoreError>> + Send + 'static,
    {
        let list: ListFn = Arc::new(move || list().boxed());
        *self
            .state
            .list_override
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(list);
    }

    /// Number of `bills()` calls since creation or the last reset
    pub fn bills_call_count(&self) -> usize {
        self.state.bills_calls.load(Ordering::SeqCst)
    }

    /// Number of default `list()` calls since creation or the last reset
    pub fn list_call_count(&self) -> usize {
        self.state.list_calls.load(Ordering::SeqCst)
    }

    /// Drop every override and zero the counters; canned bills are kept
    pub fn reset(&self) {
        self.state
            .once
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        *self
            .state
            .list_override
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        self.state.bills_calls.store(0, Ordering::SeqCst);
        self.state.list_calls.store(0, Ordering::SeqCst);
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::with_fixtures()
    }
}

impl Store for MockStore {
    fn bills(&self) -> Arc<dyn BillsResource> {
        self.state.bills_calls.fetch_add(1, Ordering::SeqCst);

        let once = self
            .state
            .once
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match once {
            Some(resource) => resource,
            None => Arc::new(MockBills {
                state: self.state.clone(),
            }),
        }
    }
}

/// Default resource, backed by the shared mock state
struct MockBills {
    state: Arc<MockState>,
}

#[async_trait]
impl BillsResource for MockBills {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.state.list_calls.fetch_add(1, Ordering::SeqCst);

        let list_override = self
            .state
            .list_override
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Some(list) = list_override {
            tracing::debug!("mock store: answering list() from override");
            return list().await;
        }

        let bills = self
            .state
            .bills
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        Ok(bills)
    }
}

/// Resource answering with a fixed result
struct CannedBills(Result<Vec<Bill>, StoreError>);

#[async_trait]
impl BillsResource for CannedBills {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_list_returns_fixtures() {
        let store = MockStore::with_fixtures();

        let bills = store.bills().list().await.unwrap();

        assert_eq!(bills.len(), 4);
        assert_eq!(store.bills_call_count(), 1);
        assert_eq!(store.list_call_count(), 1);
    }

    #[tokio::test]
    async fn test_fail_once_only_affects_next_call() {
        let store = MockStore::with_fixtures();
        store.fail_once(StoreError::http(404));

        let err = store.bills().list().await.unwrap_err();
        assert_eq!(err.message, "Erreur 404");

        let bills = store.bills().list().await.unwrap();
        assert_eq!(bills.len(), 4);
    }

    #[tokio::test]
    async fn test_override_list_persists_until_reset() {
        let store = MockStore::with_fixtures();
        store.override_list(|| async { Ok(vec![fixtures::corrupted_bill()]) });

        assert_eq!(store.bills().list().await.unwrap().len(), 1);
        assert_eq!(store.bills().list().await.unwrap().len(), 1);
        assert_eq!(store.list_call_count(), 2);

        store.reset();

        assert_eq!(store.list_call_count(), 0);
        assert_eq!(store.bills().list().await.unwrap().len(), 4);
    }

    #[test]
    fn test_set_bills_outside_async_test() {
        let store = MockStore::new(Vec::new());
        store.set_bills(vec![fixtures::corrupted_bill()]);

        let bills = tokio_test::block_on(store.bills().list()).unwrap();

        assert_eq!(bills[0].bill_type, "ERROR");
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_recovered() {
        let store = MockStore::with_fixtures();
        let state = store.state.clone();
        let _ = std::thread::spawn(move || {
            let _guard = state.bills.write().unwrap();
            panic!("test panicked while holding the lock");
        })
        .join();

        let bills = store.bills().list().await.unwrap();

        assert_eq!(bills.len(), 4);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MockStore::new(Vec::new());
        let handle = store.clone();

        handle.resolve_once(fixtures::bills());

        assert_eq!(store.bills().list().await.unwrap().len(), 4);
        assert_eq!(handle.bills_call_count(), 1);
    }
}
