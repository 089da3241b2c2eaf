//! Page navigation and controllers
//!
//! Collaborators are injected through [`NavigationContext`] instead of being
//! read from process-wide state, so every test builds its own world.

pub mod controller;
pub mod router;
pub mod routes;

pub use controller::{BillsController, Effect, UiEvent};
pub use router::{PageState, PendingNavigation, Router, SharedDocument};
pub use routes::{ROUTES_PATH, Route};

use crate::config::AppConfig;
use crate::core::{SessionStorage, Store};
use std::sync::Arc;

/// Everything a page needs besides the document
#[derive(Clone)]
pub struct NavigationContext {
    pub store: Arc<dyn Store>,
    pub session: Arc<dyn SessionStorage>,
    pub config: Arc<AppConfig>,
}

impl NavigationContext {
    pub fn new(store: Arc<dyn Store>, session: Arc<dyn SessionStorage>, config: AppConfig) -> Self {
        Self {
            store,
            session,
            config: Arc::new(config),
        }
    }
}
