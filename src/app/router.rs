//! Navigation shim: path → view, with asynchronous data loading
//!
//! ```text
//! on_navigate(path) ──▶ clear #root ──▶ session gate ──▶ render Loading
//!                                                         │
//!                                       spawned task ◀────┘
//!                                         store.bills().list()
//!                                         ├─ Ok  ──▶ render rows   (Loaded)
//!                                         └─ Err ──▶ render message (Errored)
//! ```
//!
//! Each call bumps a generation counter under the document lock, together with
//! the clear and the Loading render; a task only commits its render if no
//! newer navigation started meanwhile.

use crate::app::controller::BillsController;
use crate::app::routes::Route;
use crate::app::NavigationContext;
use crate::core::{Bill, NavigationError, SessionUser, StoreError};
use crate::ui::dom::{Document, El};
use crate::ui::views::{RenderState, bills_ui, test_ids};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Lifecycle of the page for one navigation
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Initial,
    Loading,
    Loaded { bills: Vec<Bill> },
    Errored(StoreError),
}

/// Document shared between the router, its tasks and the test code
#[derive(Clone, Default)]
pub struct SharedDocument(Arc<RwLock<Document>>);

impl SharedDocument {
    pub fn new(document: Document) -> Self {
        Self(Arc::new(RwLock::new(document)))
    }

    pub fn read<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    /// Copy of the current document
    pub fn snapshot(&self) -> Document {
        self.read(Document::clone)
    }

    pub fn to_html(&self) -> String {
        self.read(|doc| doc.inner_html(doc.body()))
    }
}

/// Replace the content of `#root`, creating it when the body has none
fn mount_root(document: &mut Document, markup: Option<&El>) {
    let root = match document.root() {
        Ok(root) => root,
        Err(_) => {
            let body = document.body();
            document.append(body, &El::new("div").id("root"))
        }
    };
    document.clear_children(root);
    if let Some(markup) = markup {
        document.append(root, markup);
    }
}

fn highlight_window_icon(document: &mut Document) {
    if let Ok(icon) = document.get_by_test_id(test_ids::ICON_WINDOW) {
        document.add_class(icon, "active-icon");
    }
}

/// A navigation whose data is still loading
pub struct PendingNavigation {
    generation: u64,
    handle: JoinHandle<PageState>,
}

impl PendingNavigation {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait for the store answer
    ///
    /// Returns the state this navigation reached, even when a newer
    /// navigation kept it from being rendered.
    pub async fn settled(self) -> Result<PageState, NavigationError> {
        self.handle
            .await
            .map_err(|e| NavigationError::TaskFailed(e.to_string()))
    }
}

/// Router installed once per test or per preview request
pub struct Router {
    context: NavigationContext,
    controller: Arc<BillsController>,
    document: SharedDocument,
    state: Arc<RwLock<PageState>>,
    generation: Arc<AtomicU64>,
}

impl Router {
    pub fn install(context: NavigationContext, document: SharedDocument) -> Self {
        let controller = Arc::new(BillsController::new(context.clone()));
        Self {
            context,
            controller,
            document,
            state: Arc::new(RwLock::new(PageState::Initial)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn controller(&self) -> &BillsController {
        &self.controller
    }

    pub fn context(&self) -> &NavigationContext {
        &self.context
    }

    pub fn page_state(&self) -> PageState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_state(&self, state: PageState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Navigate to `path`
    ///
    /// The Loading view is in the document when this returns; the returned
    /// handle settles once the store has answered and the page is rendered.
    pub fn on_navigate(&self, path: &str) -> Result<PendingNavigation, NavigationError> {
        let route = Route::from_path(path).ok_or_else(|| NavigationError::UnknownRoute {
            path: path.to_string(),
        })?;
        let runtime = Handle::try_current().map_err(|_| NavigationError::NoRuntime)?;

        let title = self.context.config.bills_page.title.clone();
        let generation = self.document.write(|doc| -> Result<u64, NavigationError> {
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::debug!(path, generation, "navigating");

            mount_root(doc, None);
            self.set_state(PageState::Initial);

            let user = SessionUser::load(self.context.session.as_ref()).map_err(|e| {
                NavigationError::Unauthorized {
                    reason: e.to_string(),
                }
            })?;
            if !user.is_employee() {
                return Err(NavigationError::Unauthorized {
                    reason: format!("{:?} users cannot open {}", user.user_type, route.path()),
                });
            }

            mount_root(doc, Some(&bills_ui(RenderState::Loading, &title)));
            highlight_window_icon(doc);
            self.set_state(PageState::Loading);
            Ok(generation)
        })?;

        let controller = self.controller.clone();
        let document = self.document.clone();
        let state = self.state.clone();
        let latest = self.generation.clone();

        let handle = runtime.spawn(async move {
            let reached = match controller.get_bills().await {
                Ok(bills) => PageState::Loaded { bills },
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load bills");
                    PageState::Errored(e)
                }
            };

            let committed = document.write(|doc| {
                if latest.load(Ordering::SeqCst) != generation {
                    return false;
                }
                let markup = match &reached {
                    PageState::Loaded { bills } => bills_ui(RenderState::Data(bills), &title),
                    PageState::Errored(e) => bills_ui(RenderState::Error(&e.message), &title),
                    PageState::Initial | PageState::Loading => return false,
                };
                mount_root(doc, Some(&markup));
                highlight_window_icon(doc);
                *state.write().unwrap_or_else(PoisonError::into_inner) = reached.clone();
                true
            });

            if !committed {
                tracing::debug!(generation, "navigation superseded, render discarded");
            }
            reached
        });

        Ok(PendingNavigation { generation, handle })
    }
}
