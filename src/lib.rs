//! # billed
//!
//! Harness for the employee "Bills" page of an expense-reporting application:
//! a mock bills store, a navigation shim, a pure view renderer, the receipt
//! modal controller and testing-library style assertions.
//!
//! ## Features
//!
//! - **Mock Store**: canned bills, one-shot and persistent `list()` overrides, call spies
//! - **Router**: `on_navigate` renders Loading at once, then Loaded or Errored
//! - **Views**: pure functions from render state to markup, serializable to HTML
//! - **Controller**: `handle(event) -> Effect`, no live DOM needed
//! - **Queries**: `get_by_text`, `get_all_by_test_id`, `query_selector_all`, `wait_for`
//! - **Preview server**: the rendered page over HTTP
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billed::prelude::*;
//!
//! let store = MockStore::with_fixtures();
//! let session = InMemorySessionStorage::new();
//! SessionUser::employee("employee@test.tld").store(&session)?;
//!
//! let router = Router::install(
//!     NavigationContext::new(Arc::new(store), Arc::new(session), AppConfig::default()),
//!     SharedDocument::new(Document::with_root()),
//! );
//!
//! let state = router.on_navigate(ROUTES_PATH.bills)?.settled().await?;
//! println!("{}", router.document().to_html());
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod testing;
pub mod ui;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Bill, BillStatus, BilledError, BillsResource, DomError, NavigationError, SessionError,
        SessionStorage, SessionUser, Store, StoreError, USER_KEY, UserType, WaitError,
    };

    // === App ===
    pub use crate::app::{
        BillsController, Effect, NavigationContext, PageState, PendingNavigation, ROUTES_PATH,
        Route, Router, SharedDocument, UiEvent,
    };

    // === UI ===
    pub use crate::ui::{Document, El, NodeId, RenderState, TextMatch, bills_ui, test_ids};

    // === Storage ===
    pub use crate::storage::{InMemorySessionStorage, MockStore, fixtures};

    // === Config ===
    pub use crate::config::{AppConfig, BillsPageConfig, NavigationConfig, ServerConfig};

    // === Testing ===
    pub use crate::testing::{Spy, wait_for};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
